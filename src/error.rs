//! Trust core error types
//!
//! The taxonomy is deliberately asymmetric: failing to resolve the current
//! process's own identity is fatal and surfaced to the caller, while a
//! failure resolving a counterpart's identity is logged and resolves to
//! "not trusted". Granting trust incorrectly is the worse outcome than
//! withholding it.

use crate::providers::LookupError;
use std::path::PathBuf;
use thiserror::Error;

/// Trust core specific errors
#[derive(Debug, Error)]
pub enum TrustError {
    /// The current process's own descriptor could not be resolved during
    /// session initialization. The process cannot safely continue without
    /// knowing its own identity, so this is never silently defaulted.
    #[error("failed to resolve own application descriptor for {package_name}")]
    SelfIdentity {
        package_name: String,
        #[source]
        source: LookupError,
    },

    /// Failed to read the identity registry config file
    #[error("failed to read identity registry from {path}")]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the identity registry config file
    #[error("failed to parse identity registry (corrupted or invalid format)")]
    RegistryParse {
        #[source]
        source: serde_json::Error,
    },

    /// The registry file declares a format version this build does not know
    #[error("unsupported identity registry version {found}")]
    UnsupportedRegistryVersion { found: u32 },

    /// The registry lists the same package name more than once
    #[error("identity registry lists {package_name} more than once")]
    DuplicateIdentity { package_name: String },
}
