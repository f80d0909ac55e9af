//! Identity registry - the fixed table of known applications
//!
//! The registry is externally supplied configuration, static for the
//! process lifetime. It is the source of truth for which package names are
//! eligible for compatibility treatment and which signing key and
//! shared-identity group each of them must present.

use crate::error::TrustError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Registry file format version for future compatibility
pub const REGISTRY_VERSION: u32 = 1;

/// Which known application a registry entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownApp {
    /// The central service provider application
    Primary,
    /// The companion storefront application
    Secondary,
    /// The legacy services framework component
    ServicesFramework,
}

/// A single known application identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownIdentity {
    /// Package name the application ships under
    pub package_name: String,

    /// Which known application this entry describes
    pub app: KnownApp,

    /// Shared-identity group the package must have committed to at first
    /// install, when required. Package names are attacker-controllable at
    /// install time; the group commitment is not, so it defends against a
    /// same-named impostor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_identity_group: Option<String>,

    /// Fingerprint of the publisher's expected signing certificate
    pub fingerprint: String,
}

/// On-disk registry format: `{ "version": 1, "identities": [...] }`
#[derive(Debug, Serialize, Deserialize)]
struct RegistryFile {
    version: u32,
    identities: Vec<KnownIdentity>,
}

/// The fixed table of known identities
///
/// Cardinality is a handful at most; lookups are linear scans by package
/// name. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct IdentityRegistry {
    identities: Vec<KnownIdentity>,
}

impl IdentityRegistry {
    /// Build a registry from a list of known identities
    ///
    /// Rejects duplicate package names: one package name must resolve to at
    /// most one expected identity.
    pub fn new(identities: Vec<KnownIdentity>) -> Result<Self, TrustError> {
        for (index, identity) in identities.iter().enumerate() {
            let duplicated = identities[..index]
                .iter()
                .any(|earlier| earlier.package_name == identity.package_name);
            if duplicated {
                return Err(TrustError::DuplicateIdentity {
                    package_name: identity.package_name.clone(),
                });
            }
        }
        Ok(IdentityRegistry { identities })
    }

    /// Load the registry from a versioned JSON config file
    pub fn load(path: &Path) -> Result<Self, TrustError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| TrustError::RegistryRead {
                path: path.to_path_buf(),
                source,
            })?;

        let file: RegistryFile = serde_json::from_str(&contents)
            .map_err(|source| TrustError::RegistryParse { source })?;

        if file.version != REGISTRY_VERSION {
            return Err(TrustError::UnsupportedRegistryVersion {
                found: file.version,
            });
        }

        let registry = Self::new(file.identities)?;
        info!(
            "Loaded identity registry from {}: {} known identities",
            path.display(),
            registry.len()
        );
        Ok(registry)
    }

    /// Find the entry for a package name, if the package is known
    pub fn find(&self, package_name: &str) -> Option<&KnownIdentity> {
        self.identities
            .iter()
            .find(|identity| identity.package_name == package_name)
    }

    /// All configured identities
    pub fn identities(&self) -> &[KnownIdentity] {
        &self.identities
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
