//! Error mapper trait definition
//!
//! Converts HTTP status codes, vendor error bodies and transport failures into
//! [`ProviderError`] values tagged with the provider that produced them.

use crate::core::providers::unified_provider::ProviderError;

/// Trait for mapping transport and vendor error conditions to [`ProviderError`]
///
/// Implement this once per provider to handle its specific error formats:
///
/// ```rust,ignore
/// struct MyProviderErrorMapper;
///
/// impl ErrorMapper for MyProviderErrorMapper {
///     fn provider_name(&self) -> &'static str {
///         "my_provider"
///     }
///
///     fn map_http_error(&self, status: u16, body: &str) -> ProviderError {
///         match status {
///             401 => ProviderError::authentication("my_provider", "Invalid API key"),
///             429 => ProviderError::rate_limit("my_provider", Some(60)),
///             _ => ProviderError::api_error("my_provider", status, body),
///         }
///     }
/// }
/// ```
pub trait ErrorMapper: Send + Sync + 'static {
    /// Provider tag stamped on every mapped error
    fn provider_name(&self) -> &'static str;

    /// Map HTTP status code and response body to a provider error
    ///
    /// # Common Mappings
    /// * `400` - Invalid request parameters
    /// * `401` / `403` - Authentication failure
    /// * `404` - Resource/model not found
    /// * `429` - Rate limit exceeded
    /// * `5xx` - Server-side errors
    fn map_http_error(&self, status_code: u16, response_body: &str) -> ProviderError;

    /// Map network-level errors
    fn map_network_error(&self, error: &dyn std::error::Error) -> ProviderError {
        ProviderError::network(self.provider_name(), error.to_string())
    }

    /// Map parsing/serialization errors
    fn map_parsing_error(&self, error: &dyn std::error::Error) -> ProviderError {
        ProviderError::serialization(self.provider_name(), error.to_string())
    }

    /// Map timeout errors
    fn map_timeout_error(&self, timeout_duration: std::time::Duration) -> ProviderError {
        ProviderError::timeout(
            self.provider_name(),
            format!("Request timeout after {:?}", timeout_duration),
        )
    }
}
