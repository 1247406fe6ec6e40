//! # HOSTNAME VALIDATOR
//!
//! **PURPOSE**: Structural validation of a hostname against DNS labeling
//! rules (RFC 1035, RFC 1123) with opt-in relaxations.
//!
//! ## CHECK SEQUENCE
//!
//! 1. **LENGTH** - whole value is 1..=255 bytes
//! 2. **LABELS** - per label: length 1..=63, no leading/trailing hyphen,
//!    character class (wildcard first label optionally exempt)
//! 3. **NUMERIC** - first label is not all digits
//! 4. **TLD** - last label is a known TLD, when required
//! 5. **CONSECUTIVE DOTS** - no empty label inside the value
//! 6. **TRAILING DOT** - no root label unless allowed
//!
//! Every check runs; one value may collect several violations.

use super::{FieldResolver, NoRecord, ValidationConfig, Validator};
use crate::tld::ROOT_LABEL;
use crate::types::{Violation, ViolationKind};
use log::trace;

/// Maximum length of the whole hostname.
pub const MAX_HOSTNAME_LENGTH: usize = 255;

/// Maximum length of a single label.
pub const MAX_LABEL_LENGTH: usize = 63;

const VALID_CHARS: &str = "a-z0-9-";
const VALID_CHARS_WITH_UNDERSCORE: &str = "a-z0-9-_";

/// **HOSTNAME VALIDATOR**
///
/// **PURPOSE**: Runs the six-step check sequence with a fixed configuration.
/// **GUARANTEE**: Stateless; identical input yields identical violations.
#[derive(Debug, Clone, Default)]
pub struct HostnameValidator {
    config: ValidationConfig,
}

impl HostnameValidator {
    /// **CONSTRUCTOR**
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// **VALIDATE WITHIN A RECORD**
    ///
    /// **PARAMETERS**:
    /// - `value` - Candidate hostname, `None` is treated as empty
    /// - `record` - Answers a dynamic `require_valid_tld` field
    pub fn validate_with(&self, value: Option<&str>, record: &dyn FieldResolver) -> Vec<Violation> {
        let value = value.unwrap_or("");
        let labels = split_labels(value);
        let mut violations = Vec::new();

        // **STEP 1**: Overall length
        if !(1..=MAX_HOSTNAME_LENGTH).contains(&value.len()) {
            violations.push(Violation::new(ViolationKind::InvalidHostnameLength));
        }

        // **STEP 2**: Per-label checks
        for (index, label) in labels.iter().enumerate() {
            self.check_label(index, label, &mut violations);
        }

        // **STEP 3**: Numeric-only unqualified label
        if !self.config.allow_numeric_hostname && labels.first().is_some_and(|l| is_numeric(l)) {
            violations.push(Violation::new(ViolationKind::HostnameLabelIsNumeric));
        }

        // **STEP 4**: TLD requirement
        if self.config.require_valid_tld.resolve(record) {
            let tld = if value == ROOT_LABEL {
                value
            } else {
                labels.last().copied().unwrap_or("")
            };
            if !self.config.valid_tlds.registry().contains(tld) {
                violations.push(Violation::new(ViolationKind::HostnameIsNotFqdn));
            }
        }

        // **STEP 5**: Consecutive dots
        if value.contains("..") {
            violations.push(Violation::new(ViolationKind::HostnameContainsConsecutiveDots));
        }

        // **STEP 6**: Trailing dot
        if !self.config.allow_root_label && value.ends_with('.') {
            violations.push(Violation::new(ViolationKind::HostnameEndsWithDot));
        }

        trace!("hostname {:?}: {} violation(s)", value, violations.len());

        let message = self.config.message.as_deref();
        violations
            .into_iter()
            .map(|violation| violation.with_message(message))
            .collect()
    }

    fn check_label(&self, index: usize, label: &str, violations: &mut Vec<Violation>) {
        if !(1..=MAX_LABEL_LENGTH).contains(&label.len()) {
            violations.push(Violation::new(ViolationKind::InvalidLabelLength));
        }

        if label.starts_with('-') || label.ends_with('-') {
            violations.push(Violation::new(ViolationKind::LabelBeginsOrEndsWithHyphen));
        }

        if self.config.allow_wildcard_hostname && index == 0 && label == "*" {
            return;
        }

        let allow_underscore = self.config.allow_underscore;
        let valid = !label.is_empty()
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || (allow_underscore && b == b'_'));
        if !valid {
            let valid_chars = if allow_underscore {
                VALID_CHARS_WITH_UNDERSCORE
            } else {
                VALID_CHARS
            };
            violations.push(
                Violation::new(ViolationKind::LabelContainsInvalidCharacters)
                    .with_param("valid_chars", valid_chars),
            );
        }
    }
}

impl Validator for HostnameValidator {
    type Input = str;

    fn validate(&self, input: Option<&str>) -> Vec<Violation> {
        self.validate_with(input, &NoRecord)
    }
}

/// **SPLIT LABELS**
///
/// A single trailing dot marks the root label, which is not a label for the
/// per-label checks. `"."` and `""` have no labels; `"a..b"` keeps its empty
/// middle label.
pub fn split_labels(value: &str) -> Vec<&str> {
    let value = value.strip_suffix('.').unwrap_or(value);
    if value.is_empty() {
        return Vec::new();
    }
    value.split('.').collect()
}

pub(crate) fn is_numeric(label: &str) -> bool {
    !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit())
}
