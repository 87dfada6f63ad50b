//! Configuration management
//!
//! Loads adapter, mode and logging settings from YAML and/or environment
//! variables. Environment values override file values.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gemini adapter settings
    pub gemini: GeminiConfig,
    /// Operation mode the adapter is built with
    #[serde(default = "default_mode")]
    pub mode: OperationMode,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini = GeminiConfig::from_lookup(&lookup)?;
        let mut config = Self {
            gemini,
            mode: default_mode(),
            logging: LoggingConfig::default(),
        };
        config.apply_lookup(lookup)?;
        Ok(config)
    }

    /// Overlay process environment variables on top of this configuration
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup` on top of this configuration
    pub fn apply_lookup<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("GEMINI_API_KEY").or_else(|| lookup("GOOGLE_API_KEY")) {
            if !api_key.is_empty() {
                self.gemini.api_key = api_key;
            }
        }
        if let Some(model) = lookup("PAGESCRIBE_MODEL") {
            self.gemini.model = model;
        }
        if let Some(base_url) = lookup("PAGESCRIBE_BASE_URL") {
            self.gemini.base_url = base_url;
        }
        if let Some(mode) = lookup("PAGESCRIBE_MODE") {
            self.mode = mode.parse()?;
        }
        if let Some(level) = lookup("PAGESCRIBE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PAGESCRIBE_LOG_FORMAT") {
            self.logging.format = format.parse().map_err(AppError::Config)?;
        }
        Ok(())
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.gemini)
            .map_err(|e| AppError::Config(format!("Gemini config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AppError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
