//! Shared helpers for integration tests
//!
//! This module is shared across test files using the tests/common/ pattern:
//! logging setup plus in-memory implementations of the collaborator traits.

use compat_trust::{
    ApplicationDescriptor, IdentityRegistry, KnownApp, KnownIdentity, LookupError,
    PackageRegistry, PermissionHost, ProcessIdentity,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, Once};

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// The registry used by most tests: a primary and a framework component that
/// require a shared-identity group, and a storefront that does not
pub fn test_registry() -> IdentityRegistry {
    IdentityRegistry::new(vec![
        KnownIdentity {
            package_name: "core.pkg".to_string(),
            app: KnownApp::Primary,
            shared_identity_group: Some("shared.id".to_string()),
            fingerprint: "ABCD".to_string(),
        },
        KnownIdentity {
            package_name: "store.pkg".to_string(),
            app: KnownApp::Secondary,
            shared_identity_group: None,
            fingerprint: "ABCD".to_string(),
        },
        KnownIdentity {
            package_name: "framework.pkg".to_string(),
            app: KnownApp::ServicesFramework,
            shared_identity_group: Some("shared.id".to_string()),
            fingerprint: "ABCD".to_string(),
        },
    ])
    .unwrap()
}

pub fn descriptor(package_name: &str, signatures: &[&str]) -> ApplicationDescriptor {
    ApplicationDescriptor {
        package_name: package_name.to_string(),
        signatures: signatures.iter().map(|s| s.to_string()).collect(),
        past_signatures: None,
        is_privileged: false,
        shared_identity_group: None,
    }
}

/// In-memory package registry whose installed set can change mid-test
#[derive(Default)]
pub struct InMemoryPackages {
    apps: Mutex<HashMap<String, ApplicationDescriptor>>,
    failing: Mutex<bool>,
}

impl InMemoryPackages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, descriptor: ApplicationDescriptor) {
        self.apps
            .lock()
            .unwrap()
            .insert(descriptor.package_name.clone(), descriptor);
    }

    pub fn uninstall(&self, package_name: &str) {
        self.apps.lock().unwrap().remove(package_name);
    }

    /// Make every lookup fail with a transport-style error
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }
}

impl PackageRegistry for InMemoryPackages {
    fn lookup(
        &self,
        package_name: &str,
        include_signing_history: bool,
    ) -> Result<ApplicationDescriptor, LookupError> {
        if *self.failing.lock().unwrap() {
            return Err(LookupError::Failed {
                package_name: package_name.to_string(),
                source: anyhow::anyhow!("registry transport unavailable"),
            });
        }

        let apps = self.apps.lock().unwrap();
        let mut descriptor =
            apps.get(package_name)
                .cloned()
                .ok_or_else(|| LookupError::NotInstalled {
                    package_name: package_name.to_string(),
                })?;
        if !include_signing_history {
            descriptor.past_signatures = None;
        }
        Ok(descriptor)
    }
}

/// Fixed process classification
pub struct ProcessKind(pub bool);

impl ProcessIdentity for ProcessKind {
    fn is_application_process(&self) -> bool {
        self.0
    }
}

/// Permission host backed by a fixed granted set
pub struct GrantedPermissions(pub HashSet<String>);

impl GrantedPermissions {
    pub fn of(permissions: &[&str]) -> Self {
        GrantedPermissions(permissions.iter().map(|p| p.to_string()).collect())
    }
}

impl PermissionHost for GrantedPermissions {
    fn has_granted_permission(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }
}
