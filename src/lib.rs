//! Compatibility trust core
//!
//! Decides whether an installed application belongs to a small, fixed set of
//! known applications that should receive compatibility treatment, without
//! being fooled by a differently-signed or unrelated app that merely shares
//! a package name.

pub mod certificate;
pub mod context;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod providers;
pub mod registry;

pub use context::{MatchedIdentity, SessionTrustState, TrustContext};
pub use descriptor::ApplicationDescriptor;
pub use error::TrustError;
pub use providers::{LookupError, PackageRegistry, PermissionHost, ProcessIdentity};
pub use registry::{IdentityRegistry, KnownApp, KnownIdentity};
