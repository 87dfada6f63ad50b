//! Error handling for the application layer
//!
//! The adapter itself only ever returns [`ProviderError`]; this type wraps it
//! together with the failures of the surrounding plumbing (configuration,
//! file I/O, output encoding).

use crate::core::providers::unified_provider::ProviderError;
use thiserror::Error;

/// Result type alias for the application layer
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system errors, with the offending path in the message
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl AppError {
    /// Underlying provider error, if this came from the adapter
    pub fn as_provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(err) => Some(err),
            _ => None,
        }
    }
}
