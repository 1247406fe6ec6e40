//! # TLD REGISTRY
//!
//! **PURPOSE**: Case-insensitive set of accepted top-level labels.
//!
//! The default registry is parsed from the bundled IANA list the first time
//! it is requested and is immutable afterwards, so it can be shared across
//! threads without locking. Callers that need a different set build their
//! own `TldRegistry` and pass it through `ValidationConfig`; it replaces the
//! default instead of extending it.

use crate::errors::{codes, ProjectError};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// The root label, always accepted.
pub const ROOT_LABEL: &str = ".";

static BUNDLED_TLDS: &str = include_str!("../data/tlds.txt");

static DEFAULT_REGISTRY: Lazy<TldRegistry> = Lazy::new(|| {
    // The bundled list is part of the binary; failing here means the build is broken.
    let registry = TldRegistry::parse(BUNDLED_TLDS)
        .unwrap_or_else(|err| panic!("bundled TLD list is malformed: {err}"));
    debug!("loaded {} bundled TLDs", registry.len());
    registry
});

/// **DEFAULT REGISTRY** - Process-wide, initialized on first use
pub fn default_registry() -> &'static TldRegistry {
    &DEFAULT_REGISTRY
}

/// **TLD REGISTRY**
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldRegistry {
    tlds: HashSet<String>,
}

impl TldRegistry {
    /// **PARSE LIST**
    ///
    /// One TLD per line. Blank lines and lines starting with `#` are skipped,
    /// entries are lowercased, and the root label is always added.
    pub fn parse(text: &str) -> Result<Self, ProjectError> {
        let mut tlds = HashSet::new();

        for (index, line) in text.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if !is_valid_entry(entry) {
                return Err(ProjectError::Registry {
                    code: codes::REGISTRY_INVALID_ENTRY.to_string(),
                    message: format!("line {}: invalid TLD entry '{}'", index + 1, entry),
                });
            }
            tlds.insert(entry.to_ascii_lowercase());
        }

        if tlds.is_empty() {
            return Err(ProjectError::Registry {
                code: codes::REGISTRY_EMPTY.to_string(),
                message: "TLD list contains no entries".to_string(),
            });
        }

        tlds.insert(ROOT_LABEL.to_string());
        Ok(Self { tlds })
    }

    /// **LOAD FROM FILE** - Same format as `parse`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::parse(&text)?;
        debug!("loaded {} TLDs from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// Exact set of the given labels, lowercased. The root label is only
    /// present if supplied.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tlds: labels
                .into_iter()
                .map(|label| label.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// **MEMBERSHIP** - Case-insensitive
    pub fn contains(&self, tld: &str) -> bool {
        if tld.bytes().any(|b| b.is_ascii_uppercase()) {
            self.tlds.contains(&tld.to_ascii_lowercase())
        } else {
            self.tlds.contains(tld)
        }
    }

    pub fn len(&self) -> usize {
        self.tlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tlds.iter().map(String::as_str)
    }
}

fn is_valid_entry(entry: &str) -> bool {
    entry
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
