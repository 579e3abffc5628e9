//! DeploymentContext — holds the current deployment facts.
//! Setters normalize raw payloads; readers get copies.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::errors::FeatureGateResult;

use super::entitlements::EntitlementSet;
use super::environment::{EnvironmentFacts, InvocationMode, Plan};
use super::license::{LicensePayload, LicenseState};

/// The facts the evaluator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSnapshot {
    pub plan: Plan,
    pub entitlements: EntitlementSet,
    pub license: LicenseState,
    pub mode: InvocationMode,
}

impl Default for DeploymentSnapshot {
    /// The most conservative combination: nothing beyond the free plan.
    fn default() -> Self {
        Self {
            plan: Plan::Ce,
            entitlements: EntitlementSet::none(),
            license: LicenseState::None,
            mode: InvocationMode::Server,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct ContextState {
    snapshot: DeploymentSnapshot,
    environment: EnvironmentFacts,
}

/// Owned, thread-safe holder of the deployment snapshot.
///
/// Each setter replaces its field group under one write guard, so a reader
/// sees either the old or the new group, never a mix.
pub struct DeploymentContext {
    state: RwLock<ContextState>,
    clock: Arc<dyn Clock>,
}

impl DeploymentContext {
    /// Create a context at the default snapshot, reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(ContextState::default()),
            clock,
        }
    }

    /// Apply the server's environment facts.
    ///
    /// An unrecognized edition code is rejected and the snapshot is left as it was.
    pub fn set_environment_facts(&self, facts: EnvironmentFacts) -> FeatureGateResult<()> {
        let plan = facts.plan().inspect_err(|_| {
            warn!(
                edition_code = facts.edition_code.as_str(),
                "Rejected environment facts with unknown edition code"
            );
        })?;

        let mut state = self.write();
        state.snapshot.plan = plan;
        state.snapshot.mode = facts.invocation_mode;
        state.environment = facts;
        drop(state);

        info!(plan = plan.as_str(), "Deployment plan set");
        Ok(())
    }

    pub fn set_entitlements(&self, entitlements: EntitlementSet) {
        self.write().snapshot.entitlements = entitlements;
        let granted: Vec<&str> = entitlements.granted().map(|e| e.as_str()).collect();
        info!(granted = ?granted, "Entitlements replaced");
    }

    /// Derive and store the license state, judged against the context's clock.
    pub fn set_license(&self, payload: &LicensePayload) {
        let license = LicenseState::derive(payload, self.clock.now_millis());
        self.write().snapshot.license = license;

        match license {
            LicenseState::GracePeriod { grace_ends_at, .. } => {
                warn!(grace_ends_at, "License expired but within grace period");
            }
            LicenseState::Expired { .. } => warn!("License expired and past grace period"),
            _ => info!(status = license.as_str(), "License state set"),
        }
    }

    /// Restore the conservative default snapshot.
    pub fn reset(&self) {
        *self.write() = ContextState::default();
        info!("Deployment context reset");
    }

    /// Current snapshot (read-only copy).
    pub fn snapshot(&self) -> DeploymentSnapshot {
        self.read().snapshot
    }

    /// The raw facts behind the current plan and mode.
    pub fn environment_facts(&self) -> EnvironmentFacts {
        self.read().environment.clone()
    }

    // Every write is a whole-value assignment, so a poisoned lock still holds
    // a consistent state.
    fn read(&self) -> RwLockReadGuard<'_, ContextState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ContextState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DeploymentContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DeploymentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentContext")
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}
