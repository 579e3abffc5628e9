//! FeatureGate — answers "is this feature enabled right now?"
//!
//! Pairs a deployment context with a registry. Consumers write facts through
//! `context()` and ask questions by feature id.

use tracing::debug;

use crate::config::FeatureGateConfig;
use crate::context::DeploymentContext;
use crate::errors::FeatureGateResult;
use crate::evaluator::{evaluate, Verdict};
use crate::registry::FeatureRegistry;

#[derive(Debug)]
pub struct FeatureGate {
    context: DeploymentContext,
    registry: FeatureRegistry,
}

impl FeatureGate {
    pub fn new(context: DeploymentContext, registry: FeatureRegistry) -> Self {
        Self { context, registry }
    }

    /// Build from configuration, applying its environment facts if present.
    ///
    /// A configured `log_filter` is installed as the global subscriber first.
    pub fn from_config(config: &FeatureGateConfig) -> FeatureGateResult<Self> {
        if config.log_filter.is_some() {
            config.init_logging()?;
        }
        let context = DeploymentContext::new();
        if let Some(facts) = &config.environment {
            context.set_environment_facts(facts.clone())?;
        }
        Ok(Self::new(context, FeatureRegistry::from_config(config)))
    }

    pub fn context(&self) -> &DeploymentContext {
        &self.context
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    /// Evaluate `feature` against the current snapshot.
    pub fn check(&self, feature: &str) -> FeatureGateResult<Verdict> {
        let descriptor = self.registry.lookup(feature)?;
        let verdict = evaluate(&self.context.snapshot(), descriptor);
        debug!(
            feature,
            enabled = verdict.is_enabled(),
            plan = verdict.current.plan.as_str(),
            "Feature checked"
        );
        Ok(verdict)
    }

    pub fn is_enabled(&self, feature: &str) -> FeatureGateResult<bool> {
        Ok(self.check(feature)?.is_enabled())
    }

    /// Run `on_enabled` when `feature` is enabled, otherwise hand the verdict
    /// to `if_disabled`, which may produce a fallback or nothing.
    pub fn when_enabled<T>(
        &self,
        feature: &str,
        on_enabled: impl FnOnce() -> T,
        if_disabled: impl FnOnce(&Verdict) -> Option<T>,
    ) -> FeatureGateResult<Option<T>> {
        let verdict = self.check(feature)?;
        if verdict.is_enabled() {
            Ok(Some(on_enabled()))
        } else {
            Ok(if_disabled(&verdict))
        }
    }
}

impl Default for FeatureGate {
    /// Default context with the built-in catalogue.
    fn default() -> Self {
        Self::new(DeploymentContext::new(), FeatureRegistry::builtin())
    }
}
