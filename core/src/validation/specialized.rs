//! # SPECIALIZED HOSTNAME VALIDATORS
//!
//! Domain name, FQDN and wildcard validators are a `HostnameValidator` with
//! different defaults. Caller overrides are merged on top of those defaults.

use super::hostname::{is_numeric, split_labels};
use super::{ConfigOverrides, FieldResolver, HostnameValidator, NoRecord, ValidationConfig, Validator};
use crate::types::{Violation, ViolationKind};

// ================================================================================================
// DOMAINNAME VALIDATOR
// ================================================================================================

/// **DOMAINNAME VALIDATOR**
///
/// **DEFAULTS**: valid TLD required, numeric labels allowed.
/// **EXTRA RULE**: a value made of one numeric label is still rejected.
#[derive(Debug, Clone)]
pub struct DomainnameValidator {
    inner: HostnameValidator,
}

impl DomainnameValidator {
    pub fn new() -> Self {
        Self::with_overrides(ConfigOverrides::default())
    }

    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        Self {
            inner: HostnameValidator::new(Self::defaults().merge(overrides)),
        }
    }

    pub fn defaults() -> ValidationConfig {
        ValidationConfig::default()
            .require_valid_tld(true)
            .allow_numeric_hostname(true)
    }

    pub fn config(&self) -> &ValidationConfig {
        self.inner.config()
    }

    pub fn validate_with(&self, value: Option<&str>, record: &dyn FieldResolver) -> Vec<Violation> {
        let mut violations = self.inner.validate_with(value, record);

        if let Some(value) = value {
            if let [label] = split_labels(value).as_slice() {
                if is_numeric(label) {
                    violations.push(
                        Violation::new(ViolationKind::SingleNumericHostnameLabel)
                            .with_message(self.config().message.as_deref()),
                    );
                }
            }
        }

        violations
    }
}

impl Default for DomainnameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for DomainnameValidator {
    type Input = str;

    fn validate(&self, input: Option<&str>) -> Vec<Violation> {
        self.validate_with(input, &NoRecord)
    }
}

// ================================================================================================
// FQDN VALIDATOR
// ================================================================================================

/// **FQDN VALIDATOR** - Hostname with a valid TLD required
#[derive(Debug, Clone)]
pub struct FqdnValidator {
    inner: HostnameValidator,
}

impl FqdnValidator {
    pub fn new() -> Self {
        Self::with_overrides(ConfigOverrides::default())
    }

    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        Self {
            inner: HostnameValidator::new(Self::defaults().merge(overrides)),
        }
    }

    pub fn defaults() -> ValidationConfig {
        ValidationConfig::default().require_valid_tld(true)
    }

    pub fn config(&self) -> &ValidationConfig {
        self.inner.config()
    }

    pub fn validate_with(&self, value: Option<&str>, record: &dyn FieldResolver) -> Vec<Violation> {
        self.inner.validate_with(value, record)
    }
}

impl Default for FqdnValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for FqdnValidator {
    type Input = str;

    fn validate(&self, input: Option<&str>) -> Vec<Violation> {
        self.validate_with(input, &NoRecord)
    }
}

// ================================================================================================
// WILDCARD VALIDATOR
// ================================================================================================

/// **WILDCARD VALIDATOR** - Hostname whose first label may be `*`
#[derive(Debug, Clone)]
pub struct WildcardValidator {
    inner: HostnameValidator,
}

impl WildcardValidator {
    pub fn new() -> Self {
        Self::with_overrides(ConfigOverrides::default())
    }

    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        Self {
            inner: HostnameValidator::new(Self::defaults().merge(overrides)),
        }
    }

    pub fn defaults() -> ValidationConfig {
        ValidationConfig::default().allow_wildcard_hostname(true)
    }

    pub fn config(&self) -> &ValidationConfig {
        self.inner.config()
    }

    pub fn validate_with(&self, value: Option<&str>, record: &dyn FieldResolver) -> Vec<Violation> {
        self.inner.validate_with(value, record)
    }
}

impl Default for WildcardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for WildcardValidator {
    type Input = str;

    fn validate(&self, input: Option<&str>) -> Vec<Violation> {
        self.validate_with(input, &NoRecord)
    }
}
