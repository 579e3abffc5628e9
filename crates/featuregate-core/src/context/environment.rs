//! Edition classification and invocation mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{FeatureGateError, FeatureGateResult};

/// The product edition a deployment runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Plan {
    Ce,
    EeLite,
    Cloud,
    SelfHostedCloud,
}

impl Plan {
    pub const ALL: [Plan; 4] = [Self::Ce, Self::EeLite, Self::Cloud, Self::SelfHostedCloud];

    /// Map a raw edition code to its plan. `None` for codes outside the table.
    pub fn from_edition_code(code: &str) -> Option<Self> {
        match code {
            "oss" => Some(Self::Ce),
            "pro-lite" => Some(Self::EeLite),
            "cloud" => Some(Self::Cloud),
            "pro" => Some(Self::SelfHostedCloud),
            _ => None,
        }
    }

    /// The edition code a server running this plan reports.
    pub fn edition_code(&self) -> &'static str {
        match self {
            Self::Ce => "oss",
            Self::EeLite => "pro-lite",
            Self::Cloud => "cloud",
            Self::SelfHostedCloud => "pro",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ce => "ce",
            Self::EeLite => "eeLite",
            Self::Cloud => "cloud",
            Self::SelfHostedCloud => "selfHostedCloud",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the product was started as a command-line tool or a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationMode {
    Cli,
    #[default]
    Server,
}

impl InvocationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Server => "server",
        }
    }
}

/// Raw environment facts as reported by the running server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFacts {
    #[serde(alias = "consoleType")]
    pub edition_code: String,
    #[serde(alias = "mode")]
    pub invocation_mode: InvocationMode,
}

impl EnvironmentFacts {
    pub fn new(edition_code: impl Into<String>, invocation_mode: InvocationMode) -> Self {
        Self {
            edition_code: edition_code.into(),
            invocation_mode,
        }
    }

    /// Facts a deployment of `plan` would report.
    pub fn for_plan(plan: Plan, invocation_mode: InvocationMode) -> Self {
        Self::new(plan.edition_code(), invocation_mode)
    }

    pub fn from_json(json: &str) -> FeatureGateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the edition code. Unknown codes are rejected, never defaulted.
    pub fn plan(&self) -> FeatureGateResult<Plan> {
        Plan::from_edition_code(&self.edition_code).ok_or_else(|| {
            FeatureGateError::InvalidInput {
                edition_code: self.edition_code.clone(),
            }
        })
    }
}

impl Default for EnvironmentFacts {
    fn default() -> Self {
        Self::for_plan(Plan::Ce, InvocationMode::Server)
    }
}
