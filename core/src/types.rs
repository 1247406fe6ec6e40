//! # HOSTCHECK TYPE DEFINITIONS
//!
//! **CRITICAL**: Structured, localization-independent violation records
//! **MANDATE**: Validators return these; message text is rendered downstream

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::messages::{EnglishCatalog, MessageCatalog};

/// **VIOLATION KIND**
///
/// Symbolic reason a value failed validation. `key()` is the stable
/// message-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    InvalidHostnameLength,
    InvalidLabelLength,
    LabelBeginsOrEndsWithHyphen,
    LabelContainsInvalidCharacters,
    HostnameLabelIsNumeric,
    HostnameIsNotFqdn,
    HostnameContainsConsecutiveDots,
    HostnameEndsWithDot,
    SingleNumericHostnameLabel,
    InvalidIpAddress,
    Blank,
    OutOfRange,
    Taken,
}

impl ViolationKind {
    /// **MESSAGE KEY**
    pub fn key(self) -> &'static str {
        match self {
            ViolationKind::InvalidHostnameLength => "invalid_hostname_length",
            ViolationKind::InvalidLabelLength => "invalid_label_length",
            ViolationKind::LabelBeginsOrEndsWithHyphen => "label_begins_or_ends_with_hyphen",
            ViolationKind::LabelContainsInvalidCharacters => "label_contains_invalid_characters",
            ViolationKind::HostnameLabelIsNumeric => "hostname_label_is_numeric",
            ViolationKind::HostnameIsNotFqdn => "hostname_is_not_fqdn",
            ViolationKind::HostnameContainsConsecutiveDots => "hostname_contains_consecutive_dots",
            ViolationKind::HostnameEndsWithDot => "hostname_ends_with_dot",
            ViolationKind::SingleNumericHostnameLabel => "single_numeric_hostname_label",
            ViolationKind::InvalidIpAddress => "invalid_ip_address",
            ViolationKind::Blank => "blank",
            ViolationKind::OutOfRange => "out_of_range",
            ViolationKind::Taken => "taken",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// **VIOLATION**
///
/// **PURPOSE**: One way an input failed validation.
/// **GUARANTEE**: Never carries pre-rendered text except an explicit
/// caller-supplied override in `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// **KIND** - Symbolic reason
    pub kind: ViolationKind,

    /// **INTERPOLATION PARAMETERS** - e.g. `valid_chars`, `min`, `max`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<&'static str, String>,

    /// **CUSTOM MESSAGE** - Override configured by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Violation {
    /// **CONSTRUCTOR**
    pub fn new(kind: ViolationKind) -> Self {
        Self {
            kind,
            params: BTreeMap::new(),
            message: None,
        }
    }

    /// **WITH PARAMETER**
    pub fn with_param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.insert(key, value.to_string());
        self
    }

    /// **WITH MESSAGE OVERRIDE** - `None` leaves the violation untouched
    pub fn with_message(mut self, message: Option<&str>) -> Self {
        if let Some(message) = message {
            self.message = Some(message.to_string());
        }
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl From<ViolationKind> for Violation {
    fn from(kind: ViolationKind) -> Self {
        Violation::new(kind)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&EnglishCatalog.message(self))
    }
}

/// **FIELD VIOLATION**
///
/// **PURPOSE**: Violation attached to a named record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// **FIELD IDENTIFIER**
    pub field: String,

    /// **VIOLATION**
    #[serde(flatten)]
    pub violation: Violation,
}

impl FieldViolation {
    /// **CONSTRUCTOR**
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            violation,
        }
    }

    pub fn kind(&self) -> ViolationKind {
        self.violation.kind
    }
}

/// Wraps every violation with `field`, preserving order.
pub fn attach_field(field: &str, violations: Vec<Violation>) -> Vec<FieldViolation> {
    violations
        .into_iter()
        .map(|violation| FieldViolation::new(field, violation))
        .collect()
}
