//! Trial license payloads and the derived license state.
//!
//! The server reports a license as `none`, `active`, or `expired`. An expired
//! license whose grace window is still open keeps its features; the
//! distinction between "in grace" and "fully expired" is made here, against
//! the time at which the payload is applied.

use serde::{Deserialize, Serialize};

use crate::errors::FeatureGateResult;

/// License family carried in the payload's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseKind {
    #[default]
    Trial,
}

/// Raw license state as sent by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RawLicenseState {
    None,
    Active { expiry_at: i64 },
    Expired { expiry_at: i64, grace_at: i64 },
}

/// License payload: `{ "type": "trial", "state": ..., ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePayload {
    #[serde(rename = "type")]
    pub kind: LicenseKind,
    #[serde(flatten)]
    pub state: RawLicenseState,
}

impl LicensePayload {
    pub fn none() -> Self {
        Self::trial(RawLicenseState::None)
    }

    pub fn active(expiry_at: i64) -> Self {
        Self::trial(RawLicenseState::Active { expiry_at })
    }

    pub fn expired(expiry_at: i64, grace_at: i64) -> Self {
        Self::trial(RawLicenseState::Expired {
            expiry_at,
            grace_at,
        })
    }

    fn trial(state: RawLicenseState) -> Self {
        Self {
            kind: LicenseKind::Trial,
            state,
        }
    }

    pub fn from_json(json: &str) -> FeatureGateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Derived license validity. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LicenseState {
    #[default]
    None,
    #[serde(rename_all = "camelCase")]
    Active { expires_at: i64 },
    #[serde(rename_all = "camelCase")]
    GracePeriod { expires_at: i64, grace_ends_at: i64 },
    #[serde(rename_all = "camelCase")]
    Expired { expires_at: i64, grace_ends_at: i64 },
}

impl LicenseState {
    /// Derive the state of `payload` as seen at `now_millis`.
    pub fn derive(payload: &LicensePayload, now_millis: i64) -> Self {
        match payload.state {
            RawLicenseState::None => Self::None,
            RawLicenseState::Active { expiry_at } => Self::Active {
                expires_at: expiry_at,
            },
            RawLicenseState::Expired {
                expiry_at,
                grace_at,
            } if grace_at > now_millis => Self::GracePeriod {
                expires_at: expiry_at,
                grace_ends_at: grace_at,
            },
            RawLicenseState::Expired {
                expiry_at,
                grace_at,
            } => Self::Expired {
                expires_at: expiry_at,
                grace_ends_at: grace_at,
            },
        }
    }

    /// Active or still inside the grace window.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Active { .. } | Self::GracePeriod { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Active { .. } => "active",
            Self::GracePeriod { .. } => "gracePeriod",
            Self::Expired { .. } => "expired",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 24 * 60 * 60 * 1000;
    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn grace_window_open() {
        let state = LicenseState::derive(&LicensePayload::expired(NOW - 2 * DAY, NOW + DAY), NOW);
        assert_eq!(
            state,
            LicenseState::GracePeriod {
                expires_at: NOW - 2 * DAY,
                grace_ends_at: NOW + DAY
            }
        );
        assert!(state.is_valid());
    }

    #[test]
    fn grace_window_closes_at_its_end() {
        let state = LicenseState::derive(&LicensePayload::expired(NOW - DAY, NOW), NOW);
        assert!(matches!(state, LicenseState::Expired { .. }));
        assert!(!state.is_valid());
    }

    #[test]
    fn active_ignores_clock() {
        // Expiry in the past still maps to active; the server decides.
        let state = LicenseState::derive(&LicensePayload::active(NOW - DAY), NOW);
        assert_eq!(state, LicenseState::Active { expires_at: NOW - DAY });
    }

    #[test]
    fn parses_server_payloads() {
        let none = LicensePayload::from_json(r#"{"type":"trial","state":"none"}"#).unwrap();
        assert_eq!(none, LicensePayload::none());

        let expired = LicensePayload::from_json(
            r#"{"type":"trial","state":"expired","expiry_at":10,"grace_at":20}"#,
        )
        .unwrap();
        assert_eq!(expired, LicensePayload::expired(10, 20));
    }

    #[test]
    fn expired_payload_without_grace_is_rejected() {
        assert!(
            LicensePayload::from_json(r#"{"type":"trial","state":"expired","expiry_at":10}"#)
                .is_err()
        );
    }
}
