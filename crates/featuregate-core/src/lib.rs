//! # featuregate-core
//!
//! Decides whether optional features are exposed for a deployment.
//! A `DeploymentContext` holds the normalized deployment facts (plan,
//! entitlements, license state, invocation mode), a `FeatureRegistry` maps
//! feature ids to compatibility descriptors, and `evaluate` combines the two
//! into a `Verdict` with the matched and unmatched clauses.

pub mod clock;
pub mod config;
pub mod context;
pub mod errors;
pub mod evaluator;
pub mod gate;
pub mod logging;
pub mod registry;

// Re-export the most commonly used types at the crate root.
pub use config::FeatureGateConfig;
pub use context::{
    DeploymentContext, DeploymentSnapshot, Entitlement, EntitlementSet, EnvironmentFacts,
    InvocationMode, LicensePayload, LicenseState, Plan,
};
pub use errors::{FeatureGateError, FeatureGateResult, GateErrorCode};
pub use evaluator::{evaluate, FeatureStatus, MatchingReason, Verdict};
pub use gate::FeatureGate;
pub use registry::{CompatibilityDescriptor, FeatureRegistry};
