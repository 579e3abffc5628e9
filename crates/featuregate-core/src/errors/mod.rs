pub mod error_code;
mod gate_error;

pub use error_code::GateErrorCode;
pub use gate_error::{FeatureGateError, FeatureGateResult};
