//! # HOSTCHECK VALIDATION MODULE
//!
//! **CORE VALIDATION SYSTEM WITH TRAIT-BASED ARCHITECTURE**
//!
//! This module provides the foundational `Validator` trait, the per-call
//! `ValidationConfig`, and the concrete validators built on them.
//!
//! ## VALIDATOR FAMILIES
//!
//! 1. **HOSTNAME** - Label-by-label structural checks (`hostname`)
//! 2. **SPECIALIZED** - Domain name, FQDN and wildcard defaults (`specialized`)
//! 3. **FIELD** - Presence, numeric range and IP literal checks (`validators`)
//!
//! Every validator is a pure function of its input and configuration: all
//! rules run, violations accumulate in order, nothing is thrown.
//!
//! ## USAGE
//!
//! ```rust
//! use hostcheck::validation::{HostnameValidator, ValidationConfig, Validator};
//!
//! let validator = HostnameValidator::new(ValidationConfig::default().allow_underscore(true));
//! assert!(validator.validate(Some("_sip.example.com")).is_empty());
//! ```

use crate::tld::{default_registry, TldRegistry};
use crate::types::Violation;
use log::warn;
use std::sync::Arc;

pub mod hostname;
pub mod specialized;
pub mod validators;

pub use hostname::HostnameValidator;
pub use specialized::{DomainnameValidator, FqdnValidator, WildcardValidator};
pub use validators::{IpValidator, NumericRangeValidator, PresenceValidator};

/// **CORE VALIDATOR TRAIT**
///
/// **MANDATE**: ALL validation implementations MUST implement this trait.
/// **GUARANTEE**: Absent input is a regular input, never a panic.
pub trait Validator {
    /// **INPUT TYPE** - Data type accepted by this validator
    type Input: ?Sized;

    /// **VALIDATION EXECUTION**
    ///
    /// **RETURNS**: Ordered violations; empty means valid.
    fn validate(&self, input: Option<&Self::Input>) -> Vec<Violation>;

    /// **VALIDITY SHORTCUT** - Any violation makes the input invalid
    fn is_valid(&self, input: Option<&Self::Input>) -> bool {
        self.validate(input).is_empty()
    }
}

/// **FIELD RESOLVER**
///
/// **PURPOSE**: Answers named boolean accessors of the record under
/// validation, so a requirement can depend on sibling state.
pub trait FieldResolver {
    /// `None` if the record has no such accessor.
    fn flag(&self, name: &str) -> Option<bool>;
}

impl<F> FieldResolver for F
where
    F: Fn(&str) -> Option<bool>,
{
    fn flag(&self, name: &str) -> Option<bool> {
        self(name)
    }
}

/// Resolver for values validated outside any record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecord;

impl FieldResolver for NoRecord {
    fn flag(&self, _name: &str) -> Option<bool> {
        None
    }
}

/// **TLD REQUIREMENT**
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TldRequirement {
    /// Fixed at configuration time.
    Literal(bool),
    /// Read from the named accessor of the record under validation.
    DynamicField(String),
}

impl TldRequirement {
    /// **RESOLVE** - An accessor the record cannot answer counts as `false`
    pub fn resolve(&self, record: &dyn FieldResolver) -> bool {
        match self {
            TldRequirement::Literal(required) => *required,
            TldRequirement::DynamicField(name) => record.flag(name).unwrap_or_else(|| {
                warn!("record has no boolean field '{name}', TLD not required");
                false
            }),
        }
    }
}

impl From<bool> for TldRequirement {
    fn from(required: bool) -> Self {
        TldRequirement::Literal(required)
    }
}

impl Default for TldRequirement {
    fn default() -> Self {
        TldRequirement::Literal(false)
    }
}

/// **TLD SOURCE** - Bundled registry or a caller-supplied replacement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TldSource {
    #[default]
    Default,
    Custom(Arc<TldRegistry>),
}

impl TldSource {
    pub fn registry(&self) -> &TldRegistry {
        match self {
            TldSource::Default => default_registry(),
            TldSource::Custom(registry) => registry,
        }
    }
}

/// **VALIDATION CONFIG**
///
/// **PURPOSE**: Relaxations accepted by the hostname family, immutable per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// **UNDERSCORE** - Accept `_` in labels
    pub allow_underscore: bool,

    /// **TLD REQUIREMENT** - Last label must be a known TLD
    pub require_valid_tld: TldRequirement,

    /// **ACCEPTED TLDS** - Consulted only when a TLD is required
    pub valid_tlds: TldSource,

    /// **NUMERIC HOSTNAME** - Accept an all-digit first label
    pub allow_numeric_hostname: bool,

    /// **WILDCARD** - Accept `*` as the first label
    pub allow_wildcard_hostname: bool,

    /// **ROOT LABEL** - Accept a trailing dot
    pub allow_root_label: bool,

    /// **CUSTOM MESSAGE** - Attached to every violation produced
    pub message: Option<String>,
}

impl ValidationConfig {
    pub fn allow_underscore(mut self, allow: bool) -> Self {
        self.allow_underscore = allow;
        self
    }

    pub fn require_valid_tld(mut self, requirement: impl Into<TldRequirement>) -> Self {
        self.require_valid_tld = requirement.into();
        self
    }

    /// **REQUIRE TLD FROM RECORD** - Resolved per call through a `FieldResolver`
    pub fn require_valid_tld_from(mut self, field: impl Into<String>) -> Self {
        self.require_valid_tld = TldRequirement::DynamicField(field.into());
        self
    }

    /// **CUSTOM TLDS** - Replaces the bundled registry entirely
    pub fn valid_tlds(mut self, registry: TldRegistry) -> Self {
        self.valid_tlds = TldSource::Custom(Arc::new(registry));
        self
    }

    pub fn allow_numeric_hostname(mut self, allow: bool) -> Self {
        self.allow_numeric_hostname = allow;
        self
    }

    pub fn allow_wildcard_hostname(mut self, allow: bool) -> Self {
        self.allow_wildcard_hostname = allow;
        self
    }

    pub fn allow_root_label(mut self, allow: bool) -> Self {
        self.allow_root_label = allow;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// **MERGE OVERRIDES** - Explicit caller values win over `self`
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(allow) = overrides.allow_underscore {
            self.allow_underscore = allow;
        }
        if let Some(requirement) = overrides.require_valid_tld {
            self.require_valid_tld = requirement;
        }
        if let Some(registry) = overrides.valid_tlds {
            self.valid_tlds = TldSource::Custom(Arc::new(registry));
        }
        if let Some(allow) = overrides.allow_numeric_hostname {
            self.allow_numeric_hostname = allow;
        }
        if let Some(allow) = overrides.allow_wildcard_hostname {
            self.allow_wildcard_hostname = allow;
        }
        if let Some(allow) = overrides.allow_root_label {
            self.allow_root_label = allow;
        }
        if overrides.message.is_some() {
            self.message = overrides.message;
        }
        self
    }
}

/// **CONFIG OVERRIDES**
///
/// Caller options layered on top of a validator's defaults; `None` keeps the
/// default.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub allow_underscore: Option<bool>,
    pub require_valid_tld: Option<TldRequirement>,
    pub valid_tlds: Option<TldRegistry>,
    pub allow_numeric_hostname: Option<bool>,
    pub allow_wildcard_hostname: Option<bool>,
    pub allow_root_label: Option<bool>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_config_default() {
        let config = ValidationConfig::default();
        assert!(!config.allow_underscore);
        assert_eq!(config.require_valid_tld, TldRequirement::Literal(false));
        assert_eq!(config.valid_tlds, TldSource::Default);
        assert!(!config.allow_numeric_hostname);
        assert!(!config.allow_wildcard_hostname);
        assert!(!config.allow_root_label);
        assert!(config.message.is_none());
    }

    #[test]
    fn test_validation_config_builder() {
        let config = ValidationConfig::default()
            .allow_underscore(true)
            .require_valid_tld(true)
            .allow_root_label(true)
            .message("bad host");

        assert!(config.allow_underscore);
        assert_eq!(config.require_valid_tld, TldRequirement::Literal(true));
        assert!(config.allow_root_label);
        assert_eq!(config.message.as_deref(), Some("bad host"));
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let base = ValidationConfig::default()
            .require_valid_tld(true)
            .allow_numeric_hostname(true);
        let merged = base.merge(ConfigOverrides {
            allow_numeric_hostname: Some(false),
            ..Default::default()
        });

        assert_eq!(merged.require_valid_tld, TldRequirement::Literal(true));
        assert!(!merged.allow_numeric_hostname);
    }

    #[test]
    fn test_merge_replaces_tlds() {
        let merged = ValidationConfig::default().merge(ConfigOverrides {
            valid_tlds: Some(TldRegistry::from_labels(["test"])),
            ..Default::default()
        });
        assert!(merged.valid_tlds.registry().contains("test"));
        assert!(!merged.valid_tlds.registry().contains("com"));
    }

    #[test]
    fn test_literal_requirement_ignores_record() {
        let record = |_: &str| Some(true);
        assert!(!TldRequirement::Literal(false).resolve(&record));
        assert!(TldRequirement::Literal(true).resolve(&NoRecord));
    }

    #[test]
    fn test_dynamic_requirement_reads_record() {
        let requirement = TldRequirement::DynamicField("public".to_string());
        let public = |name: &str| (name == "public").then_some(true);
        let private = |name: &str| (name == "public").then_some(false);

        assert!(requirement.resolve(&public));
        assert!(!requirement.resolve(&private));
    }

    #[test]
    fn test_dynamic_requirement_unknown_field_is_false() {
        let requirement = TldRequirement::DynamicField("missing".to_string());
        assert!(!requirement.resolve(&NoRecord));
    }
}
