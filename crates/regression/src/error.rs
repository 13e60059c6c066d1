//! Model error types
//!
//! Defines the standardized error type for all model operations.

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur during training, prediction, or artifact IO
#[derive(Error, Debug)]
pub enum ModelError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Invalid training data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Artifact file IO error
    #[error("Artifact IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact serialization or deserialization error
    #[error("Artifact serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
