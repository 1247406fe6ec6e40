//! # HOSTCHECK CORE LIBRARY
//!
//! **HOSTNAME, DOMAIN NAME AND ZONE FIELD VALIDATION**
//!
//! **ARCHITECTURE**: Trait-based validators returning structured violations
//! **GUARANTEE**: Pure, stateless validation; the only shared state is the
//! immutable TLD registry
//! **COMPATIBILITY**: Violations are symbolic and serializable; message text
//! is produced by a swappable `MessageCatalog`

pub mod api;
pub mod errors;
pub mod messages;
pub mod tld;
pub mod types;
pub mod zone;

// **VALIDATION MODULE REGISTRATION**
pub mod validation;
