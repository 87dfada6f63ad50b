//! Gemini Configuration Module

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ProviderConfig;
use crate::utils::casing::map_keys_to_snake_case;

use super::types::GenerationConfig;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for the Gemini adapter
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (Google AI Studio)
    #[serde(default)]
    pub api_key: String,

    /// Model identifier, e.g. `gemini-2.0-flash`
    #[serde(default = "default_model")]
    pub model: String,

    /// Generation parameters in the caller's camelCase convention
    /// (`temperature`, `maxOutputTokens`, `topP`, ...)
    #[serde(default)]
    pub generation_params: Map<String, Value>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connect timeout (seconds)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Custom headers added to every request
    #[serde(default)]
    pub custom_headers: HashMap<String, String>,

    /// Proxy URL
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Log request and response bodies at debug level
    #[serde(default)]
    pub debug: bool,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_request_timeout() -> u64 {
    600
}

fn default_connect_timeout() -> u64 {
    10
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "[REDACTED]" })
            .field("model", &self.model)
            .field("generation_params", &self.generation_params)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("custom_headers", &self.custom_headers.keys().collect::<Vec<_>>())
            .field("proxy_url", &self.proxy_url)
            .field("debug", &self.debug)
            .finish()
    }
}

impl GeminiConfig {
    /// Create a Google AI Studio configuration
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            generation_params: Map::new(),
            base_url: default_base_url(),
            api_version: default_api_version(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            custom_headers: HashMap::new(),
            proxy_url: None,
            debug: false,
        }
    }

    /// Create from process environment variables
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    ///
    /// `GEMINI_API_KEY` wins over `GOOGLE_API_KEY`; `PAGESCRIBE_MODEL` and
    /// `PAGESCRIBE_BASE_URL` are optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("GOOGLE_API_KEY"))
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ProviderError::configuration(
                    "gemini",
                    "No API key found in GEMINI_API_KEY or GOOGLE_API_KEY",
                )
            })?;

        let model = lookup("PAGESCRIBE_MODEL").unwrap_or_else(default_model);
        let mut config = Self::new(api_key, model);

        if let Some(base_url) = lookup("PAGESCRIBE_BASE_URL") {
            config.base_url = base_url;
        }

        Ok(config)
    }

    /// Settings
    pub fn with_generation_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.generation_params.insert(key.into(), value);
        self
    }

    /// Settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Settings
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Settings
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Generation parameters translated to the vendor's naming convention
    pub fn vendor_generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(map_keys_to_snake_case(&self.generation_params))
    }

    /// Get endpoint URL for a model operation
    pub fn get_endpoint(&self, model: &str, operation: &str) -> String {
        format!(
            "{}/{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            model,
            operation
        )
    }
}

impl ProviderConfig for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("API key is required for Google AI Studio".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("Model identifier is required".to_string());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base URL '{}': {}", self.base_url, e))?;

        if self.request_timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.connect_timeout == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if self.connect_timeout > self.request_timeout {
            return Err("Connect timeout cannot be greater than request timeout".to_string());
        }

        Ok(())
    }
}

/// Configuration builder
pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl GeminiConfigBuilder {
    /// Create
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: GeminiConfig::new(api_key, DEFAULT_MODEL),
        }
    }

    /// Settings
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Settings
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.request_timeout = timeout_secs;
        self
    }

    /// Settings
    pub fn with_generation_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.generation_params.insert(key.into(), value);
        self
    }

    /// Settings
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.custom_headers.insert(name.into(), value.into());
        self
    }

    /// Settings
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<GeminiConfig, ProviderError> {
        self.config
            .validate()
            .map_err(|e| ProviderError::configuration("gemini", e))?;
        Ok(self.config)
    }
}
