use super::error_code::{self, GateErrorCode};

/// Errors surfaced by the deployment context, registry, and configuration.
///
/// Evaluation itself never fails: a disabled feature is a normal verdict.
#[derive(Debug, thiserror::Error)]
pub enum FeatureGateError {
    /// The environment facts carry an edition code with no plan mapping.
    /// The context refuses the update and keeps its previous snapshot.
    #[error("Invalid input: unrecognized edition code '{edition_code}'")]
    InvalidInput { edition_code: String },

    #[error("Unknown feature: '{feature}' is not registered")]
    UnknownFeature { feature: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl FeatureGateError {
    /// Whether the caller must treat this as unrecoverable for the current
    /// deployment facts rather than fall back to a guess.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl GateErrorCode for FeatureGateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::UnknownFeature { .. } => error_code::UNKNOWN_FEATURE,
            Self::MalformedPayload(_) => error_code::MALFORMED_PAYLOAD,
            Self::Config { .. } => error_code::CONFIG_ERROR,
        }
    }
}

impl From<toml::de::Error> for FeatureGateError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

/// Convenience type alias.
pub type FeatureGateResult<T> = Result<T, FeatureGateError>;
