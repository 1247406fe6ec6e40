//! # HOSTCHECK ERRORS
//!
//! Failures that are NOT rule violations. Rule violations are ordinary return
//! values (`Vec<Violation>`); `ProjectError` only covers loading and
//! configuration problems.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    /// TLD list text could not be parsed.
    #[error("REGISTRY ERROR: {code} - {message}")]
    Registry { code: String, message: String },

    /// TLD list file could not be read.
    #[error("IO ERROR: failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Caller supplied an unusable configuration value.
    #[error("CONFIG ERROR: {code} - {message}")]
    Config { code: String, message: String },
}

impl ProjectError {
    /// **ERROR CODE** - Stable identifier, `None` for I/O failures
    pub fn code(&self) -> Option<&str> {
        match self {
            ProjectError::Registry { code, .. } | ProjectError::Config { code, .. } => {
                Some(code.as_str())
            }
            ProjectError::Io { .. } => None,
        }
    }
}

/// **ERROR CODES**
///
/// **MANDATE**: Use these standardized error codes for consistent error reporting.
pub mod codes {
    pub const REGISTRY_INVALID_ENTRY: &str = "HOSTCHECK_REGISTRY_INVALID_ENTRY";
    pub const REGISTRY_EMPTY: &str = "HOSTCHECK_REGISTRY_EMPTY";
    pub const UNKNOWN_ZONE_KIND: &str = "HOSTCHECK_CONFIG_UNKNOWN_ZONE_KIND";
}
