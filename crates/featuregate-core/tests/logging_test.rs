//! The configured log filter becomes the global subscriber's filter.
//!
//! Kept in its own test binary: the subscriber is process-wide.

use featuregate_core::{FeatureGate, FeatureGateConfig};
use tracing::Level;

#[test]
fn configured_filter_is_installed_by_from_config() {
    let config =
        FeatureGateConfig::from_toml(r#"log_filter = "featuregate_core=debug,hyper=warn""#)
            .unwrap();
    assert!(!tracing::dispatcher::has_been_set());

    let gate = FeatureGate::from_config(&config).unwrap();
    assert!(tracing::dispatcher::has_been_set());
    assert!(tracing::enabled!(target: "featuregate_core", Level::DEBUG));
    assert!(tracing::enabled!(target: "hyper", Level::WARN));
    assert!(!tracing::enabled!(target: "hyper", Level::INFO));

    // A second install is refused without error.
    assert!(!config.init_logging().unwrap());
    assert!(gate.registry().contains("neon"));
}
