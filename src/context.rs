//! Session trust context - process-wide trust state and its consumers
//!
//! What the source platform kept in process-wide mutable statics lives here
//! as one explicit value: a [`TrustContext`] constructed at startup and
//! handed by reference to every consumer. The session snapshot is written
//! exactly once; the dependent-app cache is a single monotonic bit.

use crate::engine;
use crate::error::TrustError;
use crate::providers::{LookupError, PackageRegistry, PermissionHost, ProcessIdentity};
use crate::registry::{IdentityRegistry, KnownApp};
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Which known identity this process matched at startup, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedIdentity {
    None,
    Primary,
    Secondary,
}

impl From<KnownApp> for MatchedIdentity {
    fn from(app: KnownApp) -> Self {
        match app {
            KnownApp::Primary => MatchedIdentity::Primary,
            KnownApp::Secondary => MatchedIdentity::Secondary,
            // The framework component receives the compatibility treatment
            // but has no dedicated identity accessor.
            KnownApp::ServicesFramework => MatchedIdentity::None,
        }
    }
}

/// Set-once snapshot of the current process's trust classification
///
/// Computed once during startup, before concurrent access begins, and never
/// re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTrustState {
    trust_enabled: bool,
    matched: MatchedIdentity,
}

impl SessionTrustState {
    fn disabled() -> Self {
        SessionTrustState {
            trust_enabled: false,
            matched: MatchedIdentity::None,
        }
    }

    fn enabled(app: KnownApp) -> Self {
        SessionTrustState {
            trust_enabled: true,
            matched: app.into(),
        }
    }

    /// Whether this process is a known application and receives
    /// compatibility treatment
    pub fn trust_enabled(&self) -> bool {
        self.trust_enabled
    }

    /// Which known identity matched, if one with a dedicated accessor did
    pub fn matched_identity(&self) -> MatchedIdentity {
        self.matched
    }
}

/// Process-wide trust context
///
/// Construct once at startup, call [`TrustContext::initialize`] before any
/// concurrent access, then share by reference.
pub struct TrustContext {
    registry: IdentityRegistry,
    own_package: String,
    packages: Arc<dyn PackageRegistry>,
    process: Arc<dyn ProcessIdentity>,
    permissions: Arc<dyn PermissionHost>,
    state: OnceCell<SessionTrustState>,
    dependent_on_known: AtomicBool,
}

impl TrustContext {
    pub fn new(
        registry: IdentityRegistry,
        own_package: impl Into<String>,
        packages: Arc<dyn PackageRegistry>,
        process: Arc<dyn ProcessIdentity>,
        permissions: Arc<dyn PermissionHost>,
    ) -> Self {
        TrustContext {
            registry,
            own_package: own_package.into(),
            packages,
            process,
            permissions,
            state: OnceCell::new(),
            dependent_on_known: AtomicBool::new(false),
        }
    }

    /// Compute the session trust state for the current process
    ///
    /// Runs the decision engine once against this process's own descriptor
    /// and records the result. Re-entry after the first call is a no-op
    /// returning the recorded state; startup code may be re-entered
    /// defensively without re-evaluating anything.
    ///
    /// Failing to resolve the own descriptor is fatal and surfaced as
    /// [`TrustError::SelfIdentity`] - the process cannot safely continue
    /// without knowing its own identity.
    pub fn initialize(&self) -> Result<&SessionTrustState, TrustError> {
        if let Some(state) = self.state.get() {
            debug!("Session trust state already initialized");
            return Ok(state);
        }

        if !self.process.is_application_process() {
            debug!("Not an application process, compatibility trust stays disabled");
            return Ok(self.state.get_or_init(SessionTrustState::disabled));
        }

        let descriptor = self
            .packages
            .lookup(&self.own_package, true)
            .map_err(|source| TrustError::SelfIdentity {
                package_name: self.own_package.clone(),
                source,
            })?;

        let state = match engine::evaluate(&self.registry, &descriptor) {
            Some(app) => {
                info!(
                    "Compatibility trust enabled for {} ({:?})",
                    descriptor.package_name, app
                );
                SessionTrustState::enabled(app)
            }
            None => {
                debug!(
                    "{} is not a known application, compatibility trust disabled",
                    descriptor.package_name
                );
                SessionTrustState::disabled()
            }
        };

        Ok(self.state.get_or_init(|| state))
    }

    /// Whether this process receives compatibility treatment
    ///
    /// False until [`TrustContext::initialize`] has run.
    pub fn is_trust_enabled(&self) -> bool {
        self.state
            .get()
            .map(SessionTrustState::trust_enabled)
            .unwrap_or(false)
    }

    /// Which known identity this process matched at startup
    pub fn matched_identity(&self) -> MatchedIdentity {
        self.state
            .get()
            .map(SessionTrustState::matched_identity)
            .unwrap_or(MatchedIdentity::None)
    }

    /// Whether this process is the primary known application
    pub fn is_primary(&self) -> bool {
        self.matched_identity() == MatchedIdentity::Primary
    }

    /// Whether this process is the secondary known application
    pub fn is_secondary(&self) -> bool {
        self.matched_identity() == MatchedIdentity::Secondary
    }

    /// The recorded session state, if initialization has run
    pub fn session_state(&self) -> Option<&SessionTrustState> {
        self.state.get()
    }

    /// Package name this context evaluates as its own identity
    pub fn own_package(&self) -> &str {
        &self.own_package
    }

    /// Whether this untrusted process is a legitimate client of the named
    /// known application
    ///
    /// Callable repeatedly and concurrently. A positive answer is cached for
    /// the process lifetime; negatives are recomputed because the
    /// counterpart may be installed later. The registry lookup may block.
    pub fn is_dependent_on_known_app(&self, counterpart: &str) -> bool {
        if self.dependent_on_known.load(Ordering::Relaxed) {
            return true;
        }

        // A known identity is never dependent on itself, and
        // non-application processes are out of scope.
        if !self.process.is_application_process() || self.is_trust_enabled() {
            return false;
        }

        match self.packages.lookup(counterpart, true) {
            Ok(descriptor) => {
                if engine::is_known_app(&self.registry, &descriptor) {
                    self.dependent_on_known.store(true, Ordering::Relaxed);
                    return true;
                }
                false
            }
            Err(LookupError::NotInstalled { .. }) => {
                // Expected common path: the counterpart simply isn't there.
                debug!("Counterpart {} not installed", counterpart);
                false
            }
            Err(err) => {
                // Fail closed: uncertainty must not grant trust.
                error!("Failed to look up counterpart {}: {}", counterpart, err);
                false
            }
        }
    }

    /// Whether the current process holds the named permission
    ///
    /// Valid only once [`TrustContext::initialize`] has recorded the session
    /// state; before that the application context is not known.
    pub fn has_granted_permission(&self, permission: &str) -> bool {
        debug_assert!(
            self.state.get().is_some(),
            "has_granted_permission called before initialize"
        );
        self.permissions.has_granted_permission(permission)
    }
}
