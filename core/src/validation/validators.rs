//! # FIELD VALIDATOR IMPLEMENTATIONS
//!
//! **CRITICAL**: Record-level building blocks implementing the core `Validator` trait.
//! **MANDATE**: Absent input is only ever reported by `PresenceValidator`; the
//! other validators skip it so a missing field yields exactly one violation.

use super::Validator;
use crate::types::{Violation, ViolationKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;
use std::net::Ipv6Addr;
use std::ops::RangeInclusive;

// ================================================================================================
// PRESENCE VALIDATOR
// ================================================================================================

/// **PRESENCE VALIDATOR**
///
/// **PURPOSE**: Rejects absent, empty and whitespace-only strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceValidator;

impl PresenceValidator {
    /// Presence of a non-string field.
    pub fn check<T>(value: Option<&T>) -> Vec<Violation> {
        match value {
            Some(_) => Vec::new(),
            None => vec![Violation::new(ViolationKind::Blank)],
        }
    }
}

impl Validator for PresenceValidator {
    type Input = str;

    fn validate(&self, input: Option<&str>) -> Vec<Violation> {
        match input {
            Some(value) if !value.trim().is_empty() => Vec::new(),
            _ => vec![Violation::new(ViolationKind::Blank)],
        }
    }
}

// ================================================================================================
// NUMERIC RANGE VALIDATOR
// ================================================================================================

/// **NUMERIC RANGE VALIDATOR**
///
/// **PURPOSE**: Validates numeric values against an inclusive range.
/// **PARAMS**: Violations carry `min`, `max` and the offending `value`.
#[derive(Debug, Clone)]
pub struct NumericRangeValidator<T> {
    /// **VALID RANGE** - Inclusive range of acceptable values
    range: RangeInclusive<T>,

    /// **CUSTOM MESSAGE**
    message: Option<String>,
}

impl<T> NumericRangeValidator<T>
where
    T: PartialOrd + Copy + Display,
{
    /// **CONSTRUCTOR**
    pub fn inclusive(min: T, max: T) -> Self {
        Self {
            range: min..=max,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn range(&self) -> &RangeInclusive<T> {
        &self.range
    }
}

impl NumericRangeValidator<i64> {
    /// **UNSIGNED 32-BIT DOMAIN** - `[0, 2^32)`
    pub fn u32_domain() -> Self {
        Self::inclusive(i64::from(u32::MIN), i64::from(u32::MAX))
    }

    /// **SIGNED 32-BIT DOMAIN** - `[-2^31, 2^31)`
    pub fn i32_domain() -> Self {
        Self::inclusive(i64::from(i32::MIN), i64::from(i32::MAX))
    }
}

impl<T> Validator for NumericRangeValidator<T>
where
    T: PartialOrd + Copy + Display,
{
    type Input = T;

    fn validate(&self, input: Option<&T>) -> Vec<Violation> {
        match input {
            Some(value) if !self.range.contains(value) => vec![Violation::new(ViolationKind::OutOfRange)
                .with_param("min", self.range.start())
                .with_param("max", self.range.end())
                .with_param("value", value)
                .with_message(self.message.as_deref())],
            _ => Vec::new(),
        }
    }
}

// ================================================================================================
// IP VALIDATOR
// ================================================================================================

static IPV4_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \A
        (?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])
        (?:\.(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])){3}
        \z",
    )
    .expect("IPv4 literal pattern is valid")
});

/// **IP VALIDATOR**
///
/// **PURPOSE**: Syntax check for IPv4 dotted-quad and IPv6 colon-hex literals.
/// **IPV4**: Octet grammar accepts leading zeros (`010.0.0.1`).
/// **IPV6**: At most eight groups, `::` compression and an embedded
/// dotted-quad tail (`::ffff:192.0.2.1`), as parsed by `Ipv6Addr`.
#[derive(Debug, Clone, Default)]
pub struct IpValidator {
    message: Option<String>,
}

impl IpValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn is_ip_literal(value: &str) -> bool {
        if value.contains(':') {
            value.parse::<Ipv6Addr>().is_ok()
        } else {
            IPV4_LITERAL.is_match(value)
        }
    }
}

impl Validator for IpValidator {
    type Input = str;

    fn validate(&self, input: Option<&str>) -> Vec<Violation> {
        match input {
            Some(value) if !Self::is_ip_literal(value) => {
                vec![Violation::new(ViolationKind::InvalidIpAddress).with_message(self.message.as_deref())]
            }
            _ => Vec::new(),
        }
    }
}

// ================================================================================================
// UNIT TESTS
// ================================================================================================
