//! Evaluation output.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::context::DeploymentSnapshot;

use super::reason::MatchingReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureStatus {
    Enabled,
    Disabled,
}

/// Matched and unmatched clauses of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reasons {
    pub do_match: BTreeSet<MatchingReason>,
    pub do_not_match: BTreeSet<MatchingReason>,
}

/// The outcome of evaluating one descriptor against one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub status: FeatureStatus,
    pub reasons: Reasons,
    /// The snapshot the verdict was computed from.
    pub current: DeploymentSnapshot,
}

impl Verdict {
    pub fn is_enabled(&self) -> bool {
        self.status == FeatureStatus::Enabled
    }

    pub fn matched(&self, reason: MatchingReason) -> bool {
        self.reasons.do_match.contains(&reason)
    }

    pub fn unmatched(&self, reason: MatchingReason) -> bool {
        self.reasons.do_not_match.contains(&reason)
    }

    /// Explanation for a disabled verdict, `None` when enabled.
    pub fn denial_message(&self) -> Option<String> {
        if self.is_enabled() {
            return None;
        }
        if self.reasons.do_not_match.is_empty() {
            return Some(format!(
                "Feature unavailable on the {} plan in {} mode",
                self.current.plan,
                self.current.mode.as_str()
            ));
        }
        let unmet: Vec<&str> = self
            .reasons
            .do_not_match
            .iter()
            .map(MatchingReason::as_str)
            .collect();
        Some(format!(
            "Feature unavailable on the {} plan: unmet {}",
            self.current.plan,
            unmet.join(", ")
        ))
    }
}
