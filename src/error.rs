use crate::search::SearchError;
use crate::store::StoreError;
use thiserror::Error;

/// Result type used across the service surface
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Top-level service error types
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Search errors surfaced outside an orchestrated invocation
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Validation errors on host-supplied parameters
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ServiceError {
    fn from(err: config::ConfigError) -> Self {
        ServiceError::Configuration(err.to_string())
    }
}
