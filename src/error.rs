//! Custom error types for Fynix
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Fynix operations
#[derive(Error, Debug)]
pub enum FynixError {
    /// A numeric input violated its domain: negative where non-negative is
    /// required, non-finite where a finite value is required, or a rate
    /// outside its defined range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Errors parsing user-supplied text (CLI arguments, plan files)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl FynixError {
    /// Create an `InvalidArgument` error naming the offending input
    pub fn invalid_argument(name: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("`{}` {}", name, reason))
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FynixError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FynixError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Fynix operations
pub type FynixResult<T> = Result<T, FynixError>;
