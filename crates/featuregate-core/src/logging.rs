//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::errors::{FeatureGateError, FeatureGateResult};

const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber.
///
/// Filter precedence: `filter`, then `RUST_LOG`, then `info`. A malformed
/// `filter` is a config error. Returns `Ok(false)` if a subscriber was
/// already installed.
pub fn init(filter: Option<&str>) -> FeatureGateResult<bool> {
    let env_filter = match filter {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| FeatureGateError::Config {
                message: format!("Invalid log filter '{directives}': {e}"),
            })?
        }
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok())
}
