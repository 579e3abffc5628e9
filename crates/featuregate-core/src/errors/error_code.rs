//! Stable machine-readable error codes.

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const UNKNOWN_FEATURE: &str = "UNKNOWN_FEATURE";
pub const MALFORMED_PAYLOAD: &str = "MALFORMED_PAYLOAD";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Implemented by every error type that crosses the crate boundary.
pub trait GateErrorCode {
    fn error_code(&self) -> &'static str;
}
