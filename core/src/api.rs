pub use crate::errors::ProjectError;
pub use crate::messages::{EnglishCatalog, MessageCatalog};
pub use crate::tld::{default_registry, TldRegistry};
pub use crate::types::{FieldViolation, Violation, ViolationKind};
pub use crate::validation::{
    ConfigOverrides, DomainnameValidator, FieldResolver, FqdnValidator, HostnameValidator,
    NoRecord, TldRequirement, ValidationConfig, Validator, WildcardValidator,
};
pub use crate::zone::{Zone, ZoneKind, ZoneNameLookup, ZoneValidator};

/// **HOSTNAME VALIDATION** - Explicit configuration, no record context
pub fn validate_hostname(value: Option<&str>, config: &ValidationConfig) -> Vec<Violation> {
    HostnameValidator::new(config.clone()).validate(value)
}

/// **DOMAIN NAME VALIDATION** - Default domain name rules
pub fn validate_domainname(value: Option<&str>) -> Vec<Violation> {
    DomainnameValidator::new().validate(value)
}

/// **FQDN VALIDATION** - Default FQDN rules
pub fn validate_fqdn(value: Option<&str>) -> Vec<Violation> {
    FqdnValidator::new().validate(value)
}

/// **WILDCARD VALIDATION** - Default wildcard rules
pub fn validate_wildcard(value: Option<&str>) -> Vec<Violation> {
    WildcardValidator::new().validate(value)
}

/// **HOSTNAME CHECK** - Default configuration
pub fn is_valid_hostname(value: &str) -> bool {
    HostnameValidator::default().is_valid(Some(value))
}

/// **ZONE VALIDATION** - No uniqueness lookup
pub fn validate_zone(zone: &Zone) -> Vec<FieldViolation> {
    ZoneValidator::new().validate(zone)
}
