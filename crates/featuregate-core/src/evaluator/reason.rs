//! Reason tags recorded by the evaluator, one per descriptor clause.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::context::{Entitlement, Plan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchingReason {
    Ce,
    EeLite,
    EeLiteLicense,
    Cloud,
    SelfHostedCloud,
    CliMode,
    Entitlement(Entitlement),
}

impl MatchingReason {
    pub fn plan(plan: Plan) -> Self {
        match plan {
            Plan::Ce => Self::Ce,
            Plan::EeLite => Self::EeLite,
            Plan::Cloud => Self::Cloud,
            Plan::SelfHostedCloud => Self::SelfHostedCloud,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ce => "ce",
            Self::EeLite => "eeLite",
            Self::EeLiteLicense => "eeLiteLicense",
            Self::Cloud => "cloud",
            Self::SelfHostedCloud => "selfHostedCloud",
            Self::CliMode => "cliMode",
            Self::Entitlement(Entitlement::NeonDatabaseIntegration) => {
                "luxEntitlements.NeonDatabaseIntegration"
            }
            Self::Entitlement(Entitlement::DatadogIntegration) => {
                "luxEntitlements.DatadogIntegration"
            }
        }
    }
}

impl fmt::Display for MatchingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MatchingReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
