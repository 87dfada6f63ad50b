//! Unified Provider Error Handling
//!
//! Single error type returned across the provider adapter boundary.
//!
//! ## Core Components
//!
//! ### `ProviderError` Enum
//!
//! | Variant | Purpose | HTTP Status | Retryable |
//! |------|------|------------|--------|
//! | UnsupportedMode | Adapter mode has no handler for the request | 400 | No |
//! | MalformedResponse | Extraction output is not valid JSON | 502 | No |
//! | Authentication | Authentication failed | 401 | No |
//! | RateLimit | Rate limit exceeded | 429 | Yes (after delay) |
//! | QuotaExceeded | Quota exceeded | 402 | No |
//! | ModelNotFound | Model not found | 404 | No |
//! | InvalidRequest | Invalid request | 400 | No |
//! | Network | Network error | 503 | Yes |
//! | Timeout | Timeout | 503 | Yes |
//! | ProviderUnavailable | Service unavailable | 503 | Yes |
//! | ContentFiltered | Blocked by safety systems | 400 | No |
//! | ApiError | Other upstream status | status | 429/5xx |
//! | Configuration | Invalid adapter configuration | 400 | No |
//! | Serialization | Wire payload could not be encoded/decoded | 500 | No |
//!
//! Vendor call failures are never rewrapped by the adapter: whatever the
//! client returns is what the caller sees.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagescribe::ProviderError;
//!
//! let err = ProviderError::authentication("gemini", "Invalid API key");
//! if err.is_retryable() {
//!     if let Some(delay) = err.retry_delay() {
//!         println!("Retry after {} seconds", delay);
//!     }
//! }
//! ```

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// The adapter's operation mode has no handler for the request shape
    #[error("Operation mode '{mode}' is not supported by {provider}")]
    UnsupportedMode {
        provider: &'static str,
        mode: String,
    },

    /// The vendor answered, but the structured output did not parse
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        provider: &'static str,
        message: String,
    },

    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Quota exceeded for {provider}: {message}")]
    QuotaExceeded {
        provider: &'static str,
        message: String,
    },

    #[error("Model '{model}' not found for {provider}")]
    ModelNotFound {
        provider: &'static str,
        model: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Provider {provider} is unavailable: {message}")]
    ProviderUnavailable {
        provider: &'static str,
        message: String,
    },

    /// Content filtered by safety systems
    #[error("Content filtered by {provider} safety systems: {reason}")]
    ContentFiltered {
        provider: &'static str,
        reason: String,
    },

    /// API error with status code
    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Serialization error for {provider}: {message}")]
    Serialization {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create unsupported mode error
    pub fn unsupported_mode(provider: &'static str, mode: impl Into<String>) -> Self {
        Self::UnsupportedMode {
            provider,
            mode: mode.into(),
        }
    }

    /// Create malformed response error
    pub fn malformed_response(provider: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider,
            message: message.into(),
        }
    }

    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create rate limit error
    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            message: match retry_after {
                Some(seconds) => format!("Rate limit exceeded. Retry after {} seconds", seconds),
                None => "Rate limit exceeded".to_string(),
            },
            retry_after,
        }
    }

    /// Create quota exceeded error
    pub fn quota_exceeded(provider: &'static str, message: impl Into<String>) -> Self {
        Self::QuotaExceeded {
            provider,
            message: message.into(),
        }
    }

    /// Create model not found error
    pub fn model_not_found(provider: &'static str, model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            provider,
            model: model.into(),
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create provider unavailable error
    pub fn provider_unavailable(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider,
            message: message.into(),
        }
    }

    /// Create content filtered error
    pub fn content_filtered(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            provider,
            reason: reason.into(),
        }
    }

    /// Create API error with status code
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Create serialization error
    pub fn serialization(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            provider,
            message: message.into(),
        }
    }

    /// Get the provider name from any error variant
    pub fn provider(&self) -> &'static str {
        match self {
            Self::UnsupportedMode { provider, .. }
            | Self::MalformedResponse { provider, .. }
            | Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::QuotaExceeded { provider, .. }
            | Self::ModelNotFound { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ProviderUnavailable { provider, .. }
            | Self::ContentFiltered { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Configuration { provider, .. }
            | Self::Serialization { provider, .. } => provider,
        }
    }

    /// Whether the error came out of the vendor call rather than the adapter's own checks
    pub fn is_vendor_error(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedMode { .. }
                | Self::MalformedResponse { .. }
                | Self::Configuration { .. }
        )
    }

    /// Check if this error is retryable
    ///
    /// The adapter never retries on its own; this is for the orchestrator.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. }
            | Self::Timeout { .. }
            | Self::RateLimit { .. }
            | Self::ProviderUnavailable { .. } => true,

            // API errors depend on status code
            Self::ApiError { status, .. } => matches!(*status, 429 | 500..=599),

            Self::UnsupportedMode { .. }
            | Self::MalformedResponse { .. }
            | Self::Authentication { .. }
            | Self::QuotaExceeded { .. }
            | Self::ModelNotFound { .. }
            | Self::InvalidRequest { .. }
            | Self::ContentFiltered { .. }
            | Self::Configuration { .. }
            | Self::Serialization { .. } => false,
        }
    }

    /// Get retry delay in seconds
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            Self::Network { .. } | Self::Timeout { .. } => Some(1),
            Self::ProviderUnavailable { .. } => Some(5),
            Self::ApiError { status, .. } => match *status {
                429 => Some(60),
                500..=599 => Some(3),
                _ => None,
            },
            _ => None,
        }
    }

    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            Self::UnsupportedMode { .. } => 400,
            Self::MalformedResponse { .. } => 502,
            Self::Authentication { .. } => 401,
            Self::RateLimit { .. } => 429,
            Self::QuotaExceeded { .. } => 402,
            Self::ModelNotFound { .. } => 404,
            Self::InvalidRequest { .. } | Self::Configuration { .. } => 400,
            Self::ContentFiltered { .. } => 400,
            Self::Network { .. } | Self::Timeout { .. } | Self::ProviderUnavailable { .. } => 503,
            Self::ApiError { status, .. } => *status,
            Self::Serialization { .. } => 500,
        }
    }
}
