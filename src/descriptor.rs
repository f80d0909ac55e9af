//! Application identity material fetched from the external package registry

use serde::{Deserialize, Serialize};

/// Immutable snapshot of an installed application's identity material
///
/// Fetched fresh from the package registry for every evaluation and never
/// mutated. Signature fingerprints are opaque strings: the platform has
/// already verified the signature chain, so exact equality is the only
/// operation the trust core performs on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDescriptor {
    /// Package name the application was installed under
    pub package_name: String,

    /// Fingerprints of the certificates currently signing the application
    pub signatures: Vec<String>,

    /// Fingerprints the application was previously signed with, present only
    /// when the registry was asked for signing history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_signatures: Option<Vec<String>>,

    /// Whether the platform installed this application as privileged
    pub is_privileged: bool,

    /// Shared-identity group the application committed to at first install
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_identity_group: Option<String>,
}
