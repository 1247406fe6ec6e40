//! # ZONE VALIDATION
//!
//! **PURPOSE**: Presence and range checks over the SOA fields of a DNS zone.
//!
//! ## FIELD RULES
//!
//! - **name** - present, unique (through `ZoneNameLookup`), valid domain name
//! - **master** - required for slave zones; otherwise, if set, an IP literal
//! - **mname** - present, valid hostname (underscore allowed)
//! - **rname** - present, valid FQDN
//! - **serial** - present, unsigned 32-bit (RFC 1035, 3.3.13)
//! - **refresh / retry / expire** - present, signed 32-bit (RFC 1035, 3.3.13)
//! - **minimum** - present, one to three hours (RFC 2308, 5)
//! - **kind** - present

use crate::errors::{codes, ProjectError};
use crate::types::{attach_field, FieldViolation, Violation, ViolationKind};
use crate::validation::{
    DomainnameValidator, FieldResolver, FqdnValidator, HostnameValidator, IpValidator,
    NumericRangeValidator, PresenceValidator, ValidationConfig, Validator,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_REFRESH: i64 = 10_800;
pub const DEFAULT_RETRY: i64 = 3_600;
pub const DEFAULT_EXPIRE: i64 = 604_800;
pub const DEFAULT_MINIMUM: i64 = 3_600;

/// Lower bound of the SOA minimum TTL: one hour.
pub const MIN_MINIMUM_TTL: i64 = 3_600;
/// Upper bound of the SOA minimum TTL: three hours.
pub const MAX_MINIMUM_TTL: i64 = 10_800;

/// **ZONE KIND**
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneKind {
    Native,
    Master,
    Slave,
}

impl ZoneKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneKind::Native => "NATIVE",
            ZoneKind::Master => "MASTER",
            ZoneKind::Slave => "SLAVE",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneKind {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NATIVE" => Ok(ZoneKind::Native),
            "MASTER" => Ok(ZoneKind::Master),
            "SLAVE" => Ok(ZoneKind::Slave),
            _ => Err(ProjectError::Config {
                code: codes::UNKNOWN_ZONE_KIND.to_string(),
                message: format!("unknown zone kind '{}'", s),
            }),
        }
    }
}

/// **ZONE RECORD**
///
/// Every field is optional so that incomplete caller input can be reported
/// field by field. Numeric fields are `i64` to represent out-of-range input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    pub name: Option<String>,
    pub master: Option<String>,
    pub mname: Option<String>,
    pub rname: Option<String>,
    pub serial: Option<i64>,
    pub refresh: Option<i64>,
    pub retry: Option<i64>,
    pub expire: Option<i64>,
    pub minimum: Option<i64>,
    pub kind: Option<ZoneKind>,
    pub active: bool,
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            name: None,
            master: None,
            mname: None,
            rname: None,
            serial: None,
            refresh: None,
            retry: None,
            expire: None,
            minimum: None,
            kind: None,
            active: true,
        }
    }
}

impl Zone {
    /// **CONSTRUCTOR** - Native zone with the default SOA timers
    pub fn new(
        name: impl Into<String>,
        mname: impl Into<String>,
        rname: impl Into<String>,
        serial: i64,
    ) -> Self {
        Self {
            name: Some(name.into()),
            mname: Some(mname.into()),
            rname: Some(rname.into()),
            serial: Some(serial),
            refresh: Some(DEFAULT_REFRESH),
            retry: Some(DEFAULT_RETRY),
            expire: Some(DEFAULT_EXPIRE),
            minimum: Some(DEFAULT_MINIMUM),
            kind: Some(ZoneKind::Native),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: ZoneKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_master(mut self, master: impl Into<String>) -> Self {
        self.master = Some(master.into());
        self
    }

    pub fn is_slave(&self) -> bool {
        self.kind == Some(ZoneKind::Slave)
    }

    /// **NORMALIZE** - An empty master means no master
    pub fn normalize(&mut self) {
        if self.master.as_deref().is_some_and(str::is_empty) {
            self.master = None;
        }
    }

    pub fn normalized(&self) -> Self {
        let mut zone = self.clone();
        zone.normalize();
        zone
    }
}

impl FieldResolver for Zone {
    fn flag(&self, name: &str) -> Option<bool> {
        match name {
            "active" => Some(self.active),
            "slave" => Some(self.is_slave()),
            _ => None,
        }
    }
}

/// **ZONE NAME LOOKUP**
///
/// **PURPOSE**: Uniqueness seam. The datastore lives outside this crate.
pub trait ZoneNameLookup {
    fn is_taken(&self, name: &str) -> bool;
}

impl<F> ZoneNameLookup for F
where
    F: Fn(&str) -> bool,
{
    fn is_taken(&self, name: &str) -> bool {
        self(name)
    }
}

/// Lookup that never reports a conflict.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl ZoneNameLookup for NoLookup {
    fn is_taken(&self, _name: &str) -> bool {
        false
    }
}

/// **ZONE VALIDATOR**
#[derive(Debug, Clone)]
pub struct ZoneValidator {
    name: DomainnameValidator,
    mname: HostnameValidator,
    rname: FqdnValidator,
    master: IpValidator,
    serial: NumericRangeValidator<i64>,
    timer: NumericRangeValidator<i64>,
    minimum: NumericRangeValidator<i64>,
}

impl ZoneValidator {
    pub fn new() -> Self {
        Self {
            name: DomainnameValidator::new(),
            mname: HostnameValidator::new(ValidationConfig::default().allow_underscore(true)),
            rname: FqdnValidator::new(),
            master: IpValidator::new(),
            serial: NumericRangeValidator::u32_domain(),
            timer: NumericRangeValidator::i32_domain(),
            minimum: NumericRangeValidator::inclusive(MIN_MINIMUM_TTL, MAX_MINIMUM_TTL),
        }
    }

    /// **VALIDATE** - No uniqueness check
    pub fn validate(&self, zone: &Zone) -> Vec<FieldViolation> {
        self.validate_with(zone, &NoLookup)
    }

    /// **VALIDATE WITH UNIQUENESS LOOKUP**
    ///
    /// The zone is normalized first; violations are ordered by field.
    pub fn validate_with(&self, zone: &Zone, lookup: &dyn ZoneNameLookup) -> Vec<FieldViolation> {
        let zone = zone.normalized();
        let mut out = Vec::new();

        // **NAME**
        let mut name = PresenceValidator.validate(zone.name.as_deref());
        if let Some(value) = non_blank(&zone.name) {
            if lookup.is_taken(value) {
                name.push(Violation::new(ViolationKind::Taken));
            }
            name.extend(self.name.validate_with(Some(value), &zone));
        }
        out.extend(attach_field("name", name));

        // **MASTER**
        let master = if zone.is_slave() {
            PresenceValidator.validate(zone.master.as_deref())
        } else {
            self.master.validate(zone.master.as_deref())
        };
        out.extend(attach_field("master", master));

        // **MNAME / RNAME**
        let mut mname = PresenceValidator.validate(zone.mname.as_deref());
        if let Some(value) = non_blank(&zone.mname) {
            mname.extend(self.mname.validate_with(Some(value), &zone));
        }
        out.extend(attach_field("mname", mname));

        let mut rname = PresenceValidator.validate(zone.rname.as_deref());
        if let Some(value) = non_blank(&zone.rname) {
            rname.extend(self.rname.validate_with(Some(value), &zone));
        }
        out.extend(attach_field("rname", rname));

        // **SOA NUMBERS**
        let numbers = [
            ("serial", zone.serial, &self.serial),
            ("refresh", zone.refresh, &self.timer),
            ("retry", zone.retry, &self.timer),
            ("expire", zone.expire, &self.timer),
            ("minimum", zone.minimum, &self.minimum),
        ];
        for (field, value, validator) in numbers {
            let mut violations = PresenceValidator::check(value.as_ref());
            violations.extend(validator.validate(value.as_ref()));
            out.extend(attach_field(field, violations));
        }

        // **KIND**
        out.extend(attach_field("kind", PresenceValidator::check(zone.kind.as_ref())));

        debug!(
            "zone {:?}: {} violation(s)",
            zone.name.as_deref().unwrap_or(""),
            out.len()
        );
        out
    }
}

impl Default for ZoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_zone() -> Zone {
        Zone::new(
            "testdomain.com",
            "ns1.somewhereelse.com",
            "hostmaster.somewhereelse.com",
            1_700_000_000,
        )
    }

    fn errors_on(zone: &Zone, field: &str) -> Vec<ViolationKind> {
        ZoneValidator::new()
            .validate(zone)
            .into_iter()
            .filter(|fv| fv.field == field)
            .map(|fv| fv.kind())
            .collect()
    }

    fn is_valid(zone: &Zone) -> bool {
        ZoneValidator::new().validate(zone).is_empty()
    }

    mod record_tests {
        use super::*;

        #[test]
        fn test_new_zone_defaults() {
            let zone = valid_zone();
            assert_eq!(zone.kind, Some(ZoneKind::Native));
            assert_eq!(zone.refresh, Some(10_800));
            assert_eq!(zone.retry, Some(3_600));
            assert_eq!(zone.expire, Some(604_800));
            assert_eq!(zone.minimum, Some(3_600));
            assert!(zone.active);
            assert!(zone.master.is_none());
        }

        #[test]
        fn test_zone_kind_parsing() {
            assert_eq!("slave".parse::<ZoneKind>().unwrap(), ZoneKind::Slave);
            assert_eq!(" NATIVE ".parse::<ZoneKind>().unwrap(), ZoneKind::Native);
            let err = "primary".parse::<ZoneKind>().unwrap_err();
            assert_eq!(err.code(), Some(codes::UNKNOWN_ZONE_KIND));
        }

        #[test]
        fn test_normalize_clears_empty_master() {
            let zone = valid_zone().with_master("");
            assert!(zone.normalized().master.is_none());
            let zone = valid_zone().with_master("127.0.0.1");
            assert_eq!(zone.normalized().master.as_deref(), Some("127.0.0.1"));
        }

        #[test]
        fn test_zone_answers_flags() {
            let zone = valid_zone().with_kind(ZoneKind::Slave);
            assert_eq!(zone.flag("slave"), Some(true));
            assert_eq!(zone.flag("active"), Some(true));
            assert_eq!(zone.flag("public"), None);
        }
    }

    mod presence_tests {
        use super::*;

        #[test]
        fn test_valid_zone() {
            assert!(is_valid(&valid_zone()));
        }

        #[test]
        fn test_missing_name() {
            let mut zone = valid_zone();
            zone.name = None;
            assert_eq!(errors_on(&zone, "name"), vec![ViolationKind::Blank]);
        }

        #[test]
        fn test_missing_mname() {
            let mut zone = valid_zone();
            zone.mname = None;
            assert_eq!(errors_on(&zone, "mname"), vec![ViolationKind::Blank]);
        }

        #[test]
        fn test_missing_rname() {
            let mut zone = valid_zone();
            zone.rname = Some(String::new());
            assert_eq!(errors_on(&zone, "rname"), vec![ViolationKind::Blank]);
        }

        #[test]
        fn test_empty_record_reports_every_field_once() {
            let violations = ZoneValidator::new().validate(&Zone::default());
            let fields: Vec<_> = violations.iter().map(|fv| fv.field.as_str()).collect();
            assert_eq!(
                fields,
                vec![
                    "name", "mname", "rname", "serial", "refresh", "retry", "expire", "minimum",
                    "kind"
                ]
            );
            assert!(violations.iter().all(|fv| fv.kind() == ViolationKind::Blank));
        }
    }

    mod master_tests {
        use super::*;

        #[test]
        fn test_slave_requires_master() {
            let zone = valid_zone().with_kind(ZoneKind::Slave);
            assert_eq!(errors_on(&zone, "master"), vec![ViolationKind::Blank]);
            assert!(is_valid(&zone.with_master("10.0.0.1")));
        }

        #[test]
        fn test_slave_empty_master_is_blank() {
            let zone = valid_zone().with_kind(ZoneKind::Slave).with_master("");
            assert_eq!(errors_on(&zone, "master"), vec![ViolationKind::Blank]);
        }

        #[test]
        fn test_master_must_be_ip() {
            let mut zone = valid_zone().with_master("hestetis");
            assert_eq!(errors_on(&zone, "master"), vec![ViolationKind::InvalidIpAddress]);

            for good in [
                "127.0.0.1",
                "3ffe:1900:4545:3:200:f8ff:fe21:67cf",
                "fe80:0:0:0:200:f8ff:fe21:67cf",
                "fe80::200:f8ff:fe21:67cf",
                "::ffff:192.0.2.1",
            ] {
                zone.master = Some(good.to_string());
                assert!(is_valid(&zone), "{good}");
            }
            for bad in [
                "127..0.0.1",
                "999.999.999.999",
                "999",
                "3XXX:1900:4545:3:200:f8ff:fe21:67cf",
                "1:2:3:4:5:6:7:8:9:a::",
            ] {
                zone.master = Some(bad.to_string());
                assert!(!is_valid(&zone), "{bad}");
            }
        }

        #[test]
        fn test_overlong_ipv6_master_is_reported() {
            let zone = valid_zone().with_master("1:2:3:4:5:6:7:8:9:a:b:c::1");
            assert_eq!(errors_on(&zone, "master"), vec![ViolationKind::InvalidIpAddress]);
        }

        #[test]
        fn test_empty_master_is_absent() {
            assert!(is_valid(&valid_zone().with_master("")));
        }
    }

    mod soa_range_tests {
        use super::*;

        #[test]
        fn test_serial_range() {
            let mut zone = valid_zone();
            zone.serial = Some(-1);
            assert_eq!(errors_on(&zone, "serial"), vec![ViolationKind::OutOfRange]);
            zone.serial = Some(1);
            assert!(is_valid(&zone));
            zone.serial = Some((1 << 32) - 1);
            assert!(is_valid(&zone));
            zone.serial = Some(1 << 32);
            assert_eq!(errors_on(&zone, "serial"), vec![ViolationKind::OutOfRange]);
        }

        #[test]
        fn test_timer_ranges() {
            for field in ["refresh", "retry", "expire"] {
                let set = |value: i64| {
                    let mut zone = valid_zone();
                    match field {
                        "refresh" => zone.refresh = Some(value),
                        "retry" => zone.retry = Some(value),
                        _ => zone.expire = Some(value),
                    }
                    zone
                };
                assert_eq!(errors_on(&set(-(1 << 31) - 1), field), vec![ViolationKind::OutOfRange]);
                assert!(is_valid(&set(-(1 << 31))));
                assert!(is_valid(&set((1 << 31) - 1)));
                assert_eq!(errors_on(&set(1 << 31), field), vec![ViolationKind::OutOfRange]);
            }
        }

        #[test]
        fn test_minimum_range() {
            let mut zone = valid_zone();
            zone.minimum = Some(3599);
            assert_eq!(errors_on(&zone, "minimum"), vec![ViolationKind::OutOfRange]);
            zone.minimum = Some(3600);
            assert!(is_valid(&zone));
            zone.minimum = Some(10800);
            assert!(is_valid(&zone));
            zone.minimum = Some(10801);
            assert_eq!(errors_on(&zone, "minimum"), vec![ViolationKind::OutOfRange]);
        }
    }

    mod name_tests {
        use super::*;

        #[test]
        fn test_name_must_be_domainname() {
            let mut zone = valid_zone();
            zone.name = Some("12345".to_string());
            assert!(errors_on(&zone, "name").contains(&ViolationKind::SingleNumericHostnameLabel));
            zone.name = Some("testdomain.invalidtld".to_string());
            assert_eq!(errors_on(&zone, "name"), vec![ViolationKind::HostnameIsNotFqdn]);
        }

        #[test]
        fn test_mname_allows_underscore() {
            let mut zone = valid_zone();
            zone.mname = Some("ns_1.somewhereelse.com".to_string());
            assert!(is_valid(&zone));
        }

        #[test]
        fn test_rname_must_be_fqdn() {
            let mut zone = valid_zone();
            zone.rname = Some("hostmaster".to_string());
            assert_eq!(errors_on(&zone, "rname"), vec![ViolationKind::HostnameIsNotFqdn]);
        }

        #[test]
        fn test_name_uniqueness() {
            let taken = |name: &str| name == "testdomain.com";
            let violations = ZoneValidator::new().validate_with(&valid_zone(), &taken);
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "name");
            assert_eq!(violations[0].kind(), ViolationKind::Taken);
        }
    }
}
