//! Core Error Types
//!
//! Errors raised while constructing requests or decoding results against the
//! analysis contract.

use thiserror::Error;

/// Core error type for the Recruiter Check workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input rejected before a request could be built
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payload does not conform to the analysis result contract
    #[error("Contract violation: {0}")]
    Contract(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a contract error
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }
}

impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
