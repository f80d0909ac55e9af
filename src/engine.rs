//! Trust decision engine - resolves a descriptor to a known identity
//!
//! Evaluation is deterministic and side-effect free: no I/O, no logging, no
//! retries. Each gate can short-circuit to "not a known app"; none is ever
//! skipped.

use crate::certificate::matches_fingerprint;
use crate::descriptor::ApplicationDescriptor;
use crate::registry::{IdentityRegistry, KnownApp};

/// Resolve which known application, if any, a descriptor is
///
/// Gates, in order:
/// 1. Privileged installs never receive compatibility treatment - the
///    platform already trusts them.
/// 2. The package name must have a registry entry.
/// 3. If the entry requires a shared-identity group, the descriptor must
///    present exactly that group.
/// 4. The current signing certificates must contain the expected
///    fingerprint, or
/// 5. the historical certificates must, which keeps a legitimately rotated
///    publisher key recognized.
pub fn evaluate(
    registry: &IdentityRegistry,
    descriptor: &ApplicationDescriptor,
) -> Option<KnownApp> {
    if descriptor.is_privileged {
        return None;
    }

    let identity = registry.find(&descriptor.package_name)?;

    if let Some(required_group) = &identity.shared_identity_group {
        if descriptor.shared_identity_group.as_ref() != Some(required_group) {
            return None;
        }
    }

    if matches_fingerprint(&descriptor.signatures, &identity.fingerprint) {
        return Some(identity.app);
    }

    if let Some(past_signatures) = &descriptor.past_signatures {
        if matches_fingerprint(past_signatures, &identity.fingerprint) {
            return Some(identity.app);
        }
    }

    None
}

/// Boolean view of [`evaluate`]
pub fn is_known_app(registry: &IdentityRegistry, descriptor: &ApplicationDescriptor) -> bool {
    evaluate(registry, descriptor).is_some()
}
