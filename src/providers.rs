//! Collaborator seams - interfaces this crate consumes but does not implement
//!
//! The trust core is invoked synchronously on whatever thread the caller
//! runs on. The package registry lookup is the only call that may block;
//! timeout and retry policy belong to the implementation behind the trait,
//! not to this crate.

use crate::descriptor::ApplicationDescriptor;
use thiserror::Error;

/// A failed package registry lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// The package is not installed. Expected and common; dependent-app
    /// detection treats it as a silent negative.
    #[error("package not installed: {package_name}")]
    NotInstalled { package_name: String },

    /// The registry failed for any other reason (transport, internal error).
    /// Uncertainty never grants trust.
    #[error("package registry lookup failed for {package_name}")]
    Failed {
        package_name: String,
        #[source]
        source: anyhow::Error,
    },
}

/// External package registry holding installed-application metadata
pub trait PackageRegistry: Send + Sync {
    /// Fetch a fresh descriptor for `package_name`
    ///
    /// `include_signing_history` asks the registry to also return the
    /// certificates the package was previously signed with, so that a
    /// publisher's legitimate key rotation can be recognized.
    fn lookup(
        &self,
        package_name: &str,
        include_signing_history: bool,
    ) -> Result<ApplicationDescriptor, LookupError>;
}

/// Classifies the current process
pub trait ProcessIdentity: Send + Sync {
    /// Whether the current process is an application process, as opposed to
    /// a system or core process. Trust decisions only apply to application
    /// processes.
    fn is_application_process(&self) -> bool;
}

/// Permission state of the current process's own application context
pub trait PermissionHost: Send + Sync {
    fn has_granted_permission(&self, permission: &str) -> bool;
}
