//! Add-on entitlements granted to a deployment.

use serde::{Deserialize, Serialize};

use crate::errors::FeatureGateResult;

/// A named add-on capability flag, independent of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Entitlement {
    NeonDatabaseIntegration,
    DatadogIntegration,
}

impl Entitlement {
    pub const ALL: [Entitlement; 2] = [Self::NeonDatabaseIntegration, Self::DatadogIntegration];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeonDatabaseIntegration => "NeonDatabaseIntegration",
            Self::DatadogIntegration => "DatadogIntegration",
        }
    }
}

/// Every entitlement with its grant. Updates replace the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EntitlementSet {
    #[serde(rename = "NeonDatabaseIntegration")]
    pub neon_database_integration: bool,
    #[serde(rename = "DatadogIntegration")]
    pub datadog_integration: bool,
}

impl EntitlementSet {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            neon_database_integration: true,
            datadog_integration: true,
        }
    }

    pub fn has(&self, entitlement: Entitlement) -> bool {
        match entitlement {
            Entitlement::NeonDatabaseIntegration => self.neon_database_integration,
            Entitlement::DatadogIntegration => self.datadog_integration,
        }
    }

    /// Granted entitlements in `Entitlement::ALL` order.
    pub fn granted(&self) -> impl Iterator<Item = Entitlement> + '_ {
        Entitlement::ALL.into_iter().filter(|e| self.has(*e))
    }

    /// Copy of this set with one flag changed.
    pub fn with(mut self, entitlement: Entitlement, granted: bool) -> Self {
        match entitlement {
            Entitlement::NeonDatabaseIntegration => self.neon_database_integration = granted,
            Entitlement::DatadogIntegration => self.datadog_integration = granted,
        }
        self
    }

    /// Parse an entitlement payload. Every entitlement must be present.
    pub fn from_json(json: &str) -> FeatureGateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
