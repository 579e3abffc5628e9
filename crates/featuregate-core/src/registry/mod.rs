//! Feature registry — feature id → compatibility descriptor.
//!
//! ## Components
//! - **descriptor** — the fixed-shape rule record
//! - **features** — built-in catalogue
//!
//! The registry is assembled once at startup and never mutated afterwards.

pub mod descriptor;
pub mod features;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::FeatureGateConfig;
use crate::errors::{FeatureGateError, FeatureGateResult};

pub use descriptor::{
    AxisState, CliModeCompatibility, CompatibilityDescriptor, EntitlementRequirements,
    Requirement,
};

#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    features: FxHashMap<String, CompatibilityDescriptor>,
}

impl FeatureRegistry {
    /// Build a registry from explicit entries. Later duplicates win.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, CompatibilityDescriptor)>,
        S: Into<String>,
    {
        Self {
            features: entries
                .into_iter()
                .map(|(id, descriptor)| (id.into(), descriptor))
                .collect(),
        }
    }

    /// The built-in catalogue only.
    pub fn builtin() -> Self {
        Self::new(features::BUILTIN)
    }

    /// Built-ins plus the features declared in configuration.
    /// A configured feature replaces the built-in with the same id.
    pub fn from_config(config: &FeatureGateConfig) -> Self {
        let mut features = Self::builtin().features;
        for (id, descriptor) in &config.features {
            if features.insert(id.clone(), *descriptor).is_some() {
                debug!(feature = id.as_str(), "Configured descriptor overrides built-in");
            }
        }
        Self { features }
    }

    pub fn lookup(&self, feature: &str) -> FeatureGateResult<&CompatibilityDescriptor> {
        self.features
            .get(feature)
            .ok_or_else(|| FeatureGateError::UnknownFeature {
                feature: feature.to_string(),
            })
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.features.contains_key(feature)
    }

    /// Registered ids, sorted.
    pub fn feature_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.features.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
