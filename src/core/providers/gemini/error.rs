//! Gemini Error Handling

use serde_json::Value;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ErrorMapper;

pub const PROVIDER_NAME: &str = "gemini";

/// Maps Gemini HTTP failures and error bodies onto [`ProviderError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiErrorMapper;

impl ErrorMapper for GeminiErrorMapper {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_http_error(&self, status_code: u16, response_body: &str) -> ProviderError {
        Self::from_http_status(status_code, response_body)
    }
}

impl GeminiErrorMapper {
    /// Classify a non-success HTTP response
    ///
    /// A Google error body, when present, refines the status code.
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        if let Ok(json) = serde_json::from_str::<Value>(body) {
            if json.get("error").is_some() {
                return Self::from_api_response(&json);
            }
        }

        match status {
            400 => ProviderError::invalid_request(PROVIDER_NAME, format!("Bad request: {}", body)),
            401 => ProviderError::authentication(PROVIDER_NAME, "Invalid or missing API key"),
            403 => ProviderError::authentication(PROVIDER_NAME, "Forbidden: insufficient permissions"),
            404 => ProviderError::model_not_found(PROVIDER_NAME, "Model or endpoint not found"),
            429 => ProviderError::rate_limit(PROVIDER_NAME, None),
            503 => ProviderError::provider_unavailable(PROVIDER_NAME, format!("Service unavailable: {}", body)),
            500..=599 => ProviderError::api_error(PROVIDER_NAME, status, format!("Server error: {}", body)),
            _ => ProviderError::api_error(PROVIDER_NAME, status, body),
        }
    }

    /// Classify a Google `{"error": {...}}` body
    pub fn from_api_response(response: &Value) -> ProviderError {
        let Some(error) = response.get("error") else {
            return ProviderError::api_error(PROVIDER_NAME, 500, "Unknown API error");
        };

        let code = error
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or(500);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        let status = error.get("status").and_then(Value::as_str).unwrap_or("");

        match (code, status) {
            (401, _) | (_, "UNAUTHENTICATED") => ProviderError::authentication(PROVIDER_NAME, message),
            (403, _) | (_, "PERMISSION_DENIED") => ProviderError::authentication(PROVIDER_NAME, message),
            (404, _) | (_, "NOT_FOUND") => ProviderError::model_not_found(PROVIDER_NAME, message),
            (429, _) | (_, "RESOURCE_EXHAUSTED") => {
                if message.to_ascii_lowercase().contains("quota") && Self::extract_retry_after(error).is_none() {
                    ProviderError::quota_exceeded(PROVIDER_NAME, message)
                } else {
                    ProviderError::RateLimit {
                        provider: PROVIDER_NAME,
                        message: message.to_string(),
                        retry_after: Self::extract_retry_after(error),
                    }
                }
            }
            (503, _) | (_, "UNAVAILABLE") => ProviderError::provider_unavailable(PROVIDER_NAME, message),
            (504, _) | (_, "DEADLINE_EXCEEDED") => ProviderError::timeout(PROVIDER_NAME, message),
            (400, _) | (_, "INVALID_ARGUMENT") | (_, "FAILED_PRECONDITION") => {
                ProviderError::invalid_request(PROVIDER_NAME, message)
            }
            _ => ProviderError::api_error(PROVIDER_NAME, code, message),
        }
    }

    /// Retry delay in seconds from a `RetryInfo` detail (`"retryDelay": "30s"`)
    fn extract_retry_after(error: &Value) -> Option<u64> {
        if let Some(retry_after) = error.get("retry_after").and_then(Value::as_u64) {
            return Some(retry_after);
        }

        error
            .get("details")?
            .as_array()?
            .iter()
            .filter_map(|detail| detail.get("retryDelay").and_then(Value::as_str))
            .find_map(|delay| {
                let seconds = delay.trim_end_matches('s');
                seconds
                    .parse::<u64>()
                    .ok()
                    .or_else(|| seconds.parse::<f64>().ok().map(|s| s.ceil() as u64))
            })
    }
}

/// Create
pub fn gemini_network_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::network(PROVIDER_NAME, msg.into())
}

/// Create
pub fn gemini_parse_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::serialization(PROVIDER_NAME, msg.into())
}

/// Create
pub fn gemini_safety_error(reason: impl Into<String>) -> ProviderError {
    ProviderError::content_filtered(PROVIDER_NAME, reason.into())
}
