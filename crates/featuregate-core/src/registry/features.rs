//! Built-in feature catalogue.
//!
//! prometheus: EE Lite deployments holding a valid license
//! neon: Cloud deployments entitled to the Neon database integration

use super::descriptor::{
    AxisState, CliModeCompatibility, CompatibilityDescriptor, EntitlementRequirements,
    Requirement,
};

pub const PROMETHEUS: &str = "prometheus";
pub const NEON: &str = "neon";

pub const PROMETHEUS_DESCRIPTOR: CompatibilityDescriptor = CompatibilityDescriptor {
    ce: AxisState::Disabled,
    ee_lite: AxisState::Enabled,
    cloud: AxisState::Disabled,
    self_hosted_cloud: AxisState::Disabled,
    entitlements: EntitlementRequirements {
        neon_database_integration: Requirement::NotRequired,
        datadog_integration: Requirement::NotRequired,
    },
    ee_lite_license: Requirement::Required,
    cli_mode: CliModeCompatibility::CliOrServer,
};

pub const NEON_DESCRIPTOR: CompatibilityDescriptor = CompatibilityDescriptor {
    ce: AxisState::Disabled,
    ee_lite: AxisState::Disabled,
    cloud: AxisState::Enabled,
    self_hosted_cloud: AxisState::Disabled,
    entitlements: EntitlementRequirements {
        neon_database_integration: Requirement::Required,
        datadog_integration: Requirement::NotRequired,
    },
    ee_lite_license: Requirement::NotRequired,
    cli_mode: CliModeCompatibility::CliOrServer,
};

/// All built-in features.
pub const BUILTIN: [(&str, CompatibilityDescriptor); 2] = [
    (PROMETHEUS, PROMETHEUS_DESCRIPTOR),
    (NEON, NEON_DESCRIPTOR),
];
