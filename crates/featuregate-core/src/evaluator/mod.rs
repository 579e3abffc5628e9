//! Compatibility evaluator — decides whether a feature is enabled.
//!
//! `evaluate` is pure: it reads a snapshot and a descriptor and returns a
//! fresh verdict. All feature policy lives here.

pub mod reason;
pub mod verdict;

use std::collections::BTreeSet;

use crate::context::{DeploymentSnapshot, Plan};
use crate::registry::CompatibilityDescriptor;

pub use reason::MatchingReason;
pub use verdict::{FeatureStatus, Reasons, Verdict};

/// Evaluate `descriptor` against `snapshot`.
///
/// Plan axes are OR'd. The license gate vetoes `eeLite` and the entitlement
/// gates veto `cloud`/`selfHostedCloud` when unmet. The mode gate vetoes
/// everything, yet never enables a feature on its own.
pub fn evaluate(snapshot: &DeploymentSnapshot, descriptor: &CompatibilityDescriptor) -> Verdict {
    let mut do_match = BTreeSet::new();
    let mut do_not_match = BTreeSet::new();

    let plan_axes = [
        (Plan::Ce, descriptor.ce),
        (Plan::EeLite, descriptor.ee_lite),
        (Plan::Cloud, descriptor.cloud),
        (Plan::SelfHostedCloud, descriptor.self_hosted_cloud),
    ];
    for (plan, axis) in plan_axes {
        if !axis.is_enabled() {
            continue;
        }
        let reason = MatchingReason::plan(plan);
        if snapshot.plan == plan {
            do_match.insert(reason);
        } else {
            do_not_match.insert(reason);
        }
    }

    let mut reject_ee_lite = false;
    if descriptor.ee_lite_license.is_required() {
        if snapshot.license.is_valid() {
            do_match.insert(MatchingReason::EeLiteLicense);
        } else {
            do_not_match.insert(MatchingReason::EeLiteLicense);
            reject_ee_lite = true;
        }
    }

    let mut reject_cloud = false;
    for entitlement in descriptor.entitlements.required() {
        let reason = MatchingReason::Entitlement(entitlement);
        if snapshot.entitlements.has(entitlement) {
            do_match.insert(reason);
        } else {
            do_not_match.insert(reason);
            reject_cloud = true;
        }
    }

    let mode_matches = descriptor.cli_mode.allows(snapshot.mode);
    if mode_matches {
        do_match.insert(MatchingReason::CliMode);
    } else {
        do_not_match.insert(MatchingReason::CliMode);
    }

    let mode_is_only_match = do_match.len() == 1 && do_match.contains(&MatchingReason::CliMode);
    let license_outside_ee_lite = do_match.contains(&MatchingReason::EeLiteLicense)
        && do_not_match.contains(&MatchingReason::EeLite);

    let status = if !mode_matches
        || reject_ee_lite
        || reject_cloud
        || mode_is_only_match
        || license_outside_ee_lite
        || do_match.is_empty()
    {
        FeatureStatus::Disabled
    } else {
        FeatureStatus::Enabled
    };

    Verdict {
        status,
        reasons: Reasons {
            do_match,
            do_not_match,
        },
        current: *snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{EntitlementSet, InvocationMode, LicenseState};
    use crate::registry::{
        AxisState, CliModeCompatibility, EntitlementRequirements, Requirement,
    };

    fn nothing_enabled() -> CompatibilityDescriptor {
        CompatibilityDescriptor {
            ce: AxisState::Disabled,
            ee_lite: AxisState::Disabled,
            cloud: AxisState::Disabled,
            self_hosted_cloud: AxisState::Disabled,
            entitlements: EntitlementRequirements {
                neon_database_integration: Requirement::NotRequired,
                datadog_integration: Requirement::NotRequired,
            },
            ee_lite_license: Requirement::NotRequired,
            cli_mode: CliModeCompatibility::CliOrServer,
        }
    }

    #[test]
    fn plan_match_enables() {
        let descriptor = CompatibilityDescriptor {
            self_hosted_cloud: AxisState::Enabled,
            ..nothing_enabled()
        };
        let snapshot = DeploymentSnapshot {
            plan: Plan::SelfHostedCloud,
            ..DeploymentSnapshot::default()
        };
        let verdict = evaluate(&snapshot, &descriptor);
        assert!(verdict.is_enabled());
        assert!(verdict.reasons.do_not_match.is_empty());
    }

    #[test]
    fn grace_period_counts_as_licensed() {
        let descriptor = CompatibilityDescriptor {
            ee_lite: AxisState::Enabled,
            ee_lite_license: Requirement::Required,
            ..nothing_enabled()
        };
        let snapshot = DeploymentSnapshot {
            plan: Plan::EeLite,
            license: LicenseState::GracePeriod {
                expires_at: 1,
                grace_ends_at: 2,
            },
            ..DeploymentSnapshot::default()
        };
        assert!(evaluate(&snapshot, &descriptor).is_enabled());
    }

    #[test]
    fn empty_descriptor_is_disabled() {
        let descriptor = CompatibilityDescriptor {
            cli_mode: CliModeCompatibility::ServerOnly,
            ..nothing_enabled()
        };
        let verdict = evaluate(&DeploymentSnapshot::default(), &descriptor);
        assert!(!verdict.is_enabled());
        assert_eq!(
            verdict.reasons.do_match.iter().collect::<Vec<_>>(),
            vec![&MatchingReason::CliMode]
        );
    }

    #[test]
    fn entitlement_gate_vetoes_self_hosted_cloud() {
        let descriptor = CompatibilityDescriptor {
            self_hosted_cloud: AxisState::Enabled,
            entitlements: EntitlementRequirements {
                neon_database_integration: Requirement::NotRequired,
                datadog_integration: Requirement::Required,
            },
            ..nothing_enabled()
        };
        let snapshot = DeploymentSnapshot {
            plan: Plan::SelfHostedCloud,
            entitlements: EntitlementSet::none(),
            mode: InvocationMode::Cli,
            ..DeploymentSnapshot::default()
        };
        let verdict = evaluate(&snapshot, &descriptor);
        assert!(!verdict.is_enabled());
        assert!(verdict.matched(MatchingReason::SelfHostedCloud));
        assert!(verdict.unmatched(MatchingReason::Entitlement(
            crate::context::Entitlement::DatadogIntegration
        )));
    }
}
