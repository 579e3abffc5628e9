//! Deployment context — the normalized facts feature decisions are made from.
//!
//! ## Components
//! - **environment** — edition code → plan, invocation mode
//! - **entitlements** — add-on capability flags
//! - **license** — trial license payloads and grace-period derivation
//! - **deployment** — DeploymentContext: owns and replaces the snapshot

pub mod deployment;
pub mod entitlements;
pub mod environment;
pub mod license;

pub use deployment::{DeploymentContext, DeploymentSnapshot};
pub use entitlements::{Entitlement, EntitlementSet};
pub use environment::{EnvironmentFacts, InvocationMode, Plan};
pub use license::{LicenseKind, LicensePayload, LicenseState, RawLicenseState};
