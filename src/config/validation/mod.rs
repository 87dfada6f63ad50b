//! Configuration validation

use super::models::LoggingConfig;
use crate::core::providers::gemini::config::GeminiConfig;
use crate::core::traits::ProviderConfig;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        ProviderConfig::validate(self)
    }
}
