//! Compatibility descriptors: the per-feature rule record.
//!
//! Plan axes (`ce`, `ee_lite`, `cloud`, `self_hosted_cloud`) are OR'd.
//! `entitlements` narrows `cloud` and `self_hosted_cloud`, `ee_lite_license`
//! narrows `ee_lite`, and `cli_mode` gates everything.
//!
//! No field is optional and nothing implements `Default`: a new axis must be
//! filled in on every feature before the crate compiles.

use serde::{Deserialize, Serialize};

use crate::context::{Entitlement, InvocationMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisState {
    Enabled,
    Disabled,
}

impl AxisState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Requirement {
    Required,
    NotRequired,
}

impl Requirement {
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Which invocation modes a feature can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CliModeCompatibility {
    CliOnly,
    ServerOnly,
    CliOrServer,
}

impl CliModeCompatibility {
    pub fn allows(&self, mode: InvocationMode) -> bool {
        match self {
            Self::CliOnly => mode == InvocationMode::Cli,
            Self::ServerOnly => mode == InvocationMode::Server,
            Self::CliOrServer => true,
        }
    }
}

/// One requirement per named entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntitlementRequirements {
    #[serde(rename = "NeonDatabaseIntegration")]
    pub neon_database_integration: Requirement,
    #[serde(rename = "DatadogIntegration")]
    pub datadog_integration: Requirement,
}

impl EntitlementRequirements {
    pub fn get(&self, entitlement: Entitlement) -> Requirement {
        match entitlement {
            Entitlement::NeonDatabaseIntegration => self.neon_database_integration,
            Entitlement::DatadogIntegration => self.datadog_integration,
        }
    }

    /// Entitlements marked `required`, in `Entitlement::ALL` order.
    pub fn required(&self) -> impl Iterator<Item = Entitlement> + '_ {
        Entitlement::ALL
            .into_iter()
            .filter(|e| self.get(*e).is_required())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompatibilityDescriptor {
    pub ce: AxisState,
    pub ee_lite: AxisState,
    pub cloud: AxisState,
    pub self_hosted_cloud: AxisState,
    #[serde(rename = "luxEntitlements")]
    pub entitlements: EntitlementRequirements,
    pub ee_lite_license: Requirement,
    pub cli_mode: CliModeCompatibility,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_lists_only_required_entitlements() {
        let reqs = EntitlementRequirements {
            neon_database_integration: Requirement::NotRequired,
            datadog_integration: Requirement::Required,
        };
        assert_eq!(reqs.required().collect::<Vec<_>>(), vec![Entitlement::DatadogIntegration]);
    }

    #[test]
    fn cli_mode_compatibility() {
        assert!(CliModeCompatibility::CliOnly.allows(InvocationMode::Cli));
        assert!(!CliModeCompatibility::CliOnly.allows(InvocationMode::Server));
        assert!(CliModeCompatibility::ServerOnly.allows(InvocationMode::Server));
        assert!(!CliModeCompatibility::ServerOnly.allows(InvocationMode::Cli));
        assert!(CliModeCompatibility::CliOrServer.allows(InvocationMode::Cli));
        assert!(CliModeCompatibility::CliOrServer.allows(InvocationMode::Server));
    }
}
