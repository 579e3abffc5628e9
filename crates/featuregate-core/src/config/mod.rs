//! Startup configuration.
//!
//! ```toml
//! log_filter = "featuregate_core=debug"
//!
//! [environment]
//! editionCode = "pro-lite"
//! invocationMode = "server"
//!
//! [features.metrics_export]
//! ce = "disabled"
//! eeLite = "enabled"
//! cloud = "disabled"
//! selfHostedCloud = "disabled"
//! eeLiteLicense = "required"
//! cliMode = "cliOrServer"
//!
//! [features.metrics_export.luxEntitlements]
//! NeonDatabaseIntegration = "notRequired"
//! DatadogIntegration = "notRequired"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::EnvironmentFacts;
use crate::errors::{FeatureGateError, FeatureGateResult};
use crate::logging;
use crate::registry::CompatibilityDescriptor;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeatureGateConfig {
    /// `tracing` filter directive. Falls back to `RUST_LOG`, then `info`.
    /// When set, `FeatureGate::from_config` installs it and rejects a
    /// malformed directive.
    pub log_filter: Option<String>,
    /// Environment facts to apply at startup, if known ahead of the server.
    pub environment: Option<EnvironmentFacts>,
    /// Extra or overriding feature descriptors, keyed by feature id.
    pub features: BTreeMap<String, CompatibilityDescriptor>,
}

impl FeatureGateConfig {
    /// Parse a TOML document. Descriptors must set every axis.
    pub fn from_toml(toml_str: &str) -> FeatureGateResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load(path: &Path) -> FeatureGateResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FeatureGateError::Config {
            message: format!("Cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }

    /// Install the global subscriber using `log_filter`.
    /// `Ok(false)` if one was already installed.
    pub fn init_logging(&self) -> FeatureGateResult<bool> {
        logging::init(self.log_filter.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::InvocationMode;
    use crate::registry::{AxisState, Requirement};

    const SAMPLE: &str = r#"
log_filter = "debug"

[environment]
editionCode = "cloud"
invocationMode = "cli"

[features.datadog]
ce = "disabled"
eeLite = "disabled"
cloud = "enabled"
selfHostedCloud = "enabled"
eeLiteLicense = "notRequired"
cliMode = "serverOnly"

[features.datadog.luxEntitlements]
NeonDatabaseIntegration = "notRequired"
DatadogIntegration = "required"
"#;

    #[test]
    fn parses_full_document() {
        let config = FeatureGateConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.log_filter.as_deref(), Some("debug"));

        let env = config.environment.unwrap();
        assert_eq!(env.edition_code, "cloud");
        assert_eq!(env.invocation_mode, InvocationMode::Cli);

        let datadog = &config.features["datadog"];
        assert_eq!(datadog.self_hosted_cloud, AxisState::Enabled);
        assert_eq!(datadog.entitlements.datadog_integration, Requirement::Required);
    }

    #[test]
    fn empty_document_is_default() {
        let config = FeatureGateConfig::from_toml("").unwrap();
        assert!(config.environment.is_none());
        assert!(config.features.is_empty());
    }

    #[test]
    fn descriptor_missing_an_axis_is_rejected() {
        let doc = SAMPLE.replace("cliMode = \"serverOnly\"\n", "");
        let err = FeatureGateConfig::from_toml(&doc).unwrap_err();
        assert!(matches!(err, FeatureGateError::Config { .. }));
    }

    #[test]
    fn descriptor_with_unknown_axis_is_rejected() {
        let doc = SAMPLE.replace(
            "cliMode = \"serverOnly\"",
            "cliMode = \"serverOnly\"\nenterprise = \"enabled\"",
        );
        assert!(FeatureGateConfig::from_toml(&doc).is_err());
    }

    #[test]
    fn malformed_log_filter_fails_init_logging() {
        let config = FeatureGateConfig::from_toml("log_filter = \"not a [valid filter\"").unwrap();
        let err = config.init_logging().unwrap_err();
        assert!(matches!(err, FeatureGateError::Config { .. }));
    }
}
