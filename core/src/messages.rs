//! # MESSAGE CATALOGS
//!
//! Maps symbolic violations to human-readable text. Validators never call
//! into this module; it exists for the layer that surfaces errors.

use crate::types::{Violation, ViolationKind};

/// **MESSAGE CATALOG**
///
/// **PURPOSE**: Swappable violation-to-text table (one per locale).
pub trait MessageCatalog {
    /// **TEMPLATE LOOKUP** - `%{name}` placeholders are interpolated from params
    fn template(&self, kind: ViolationKind) -> &str;

    /// **RENDER** - Custom message override wins over the template
    fn message(&self, violation: &Violation) -> String {
        if let Some(message) = &violation.message {
            return message.clone();
        }
        interpolate(self.template(violation.kind), violation)
    }
}

/// Bundled English texts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn template(&self, kind: ViolationKind) -> &str {
        match kind {
            ViolationKind::InvalidHostnameLength => {
                "hostname must be between 1 and 255 characters long"
            }
            ViolationKind::InvalidLabelLength => "label must be between 1 and 63 characters long",
            ViolationKind::LabelBeginsOrEndsWithHyphen => "label begins or ends with a hyphen",
            ViolationKind::LabelContainsInvalidCharacters => {
                "label contains invalid characters (valid characters: [%{valid_chars}])"
            }
            ViolationKind::HostnameLabelIsNumeric => {
                "unqualified hostname part cannot consist of numeric values only"
            }
            ViolationKind::HostnameIsNotFqdn => "hostname is not a fully qualified domain name",
            ViolationKind::HostnameContainsConsecutiveDots => "hostname contains consecutive dots",
            ViolationKind::HostnameEndsWithDot => "hostname ends with a dot",
            ViolationKind::SingleNumericHostnameLabel => {
                "hostnames cannot consist of a single numeric label"
            }
            ViolationKind::InvalidIpAddress => "is not a valid IP address",
            ViolationKind::Blank => "can't be blank",
            ViolationKind::OutOfRange => "must be between %{min} and %{max}",
            ViolationKind::Taken => "has already been taken",
        }
    }
}

/// Replaces `%{name}` with the matching param. Unknown placeholders are left as-is.
fn interpolate(template: &str, violation: &Violation) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match violation.param(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
