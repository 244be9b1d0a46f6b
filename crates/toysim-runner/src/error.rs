//! Runner error types.

use thiserror::Error;
use toysim_domain::DomainError;

/// Runner errors.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Domain rule violated while running a scenario
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Report serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;
