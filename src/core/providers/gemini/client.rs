//! Gemini Client
//!
//! HTTP client for the Google AI Studio `generateContent` endpoint. This is
//! the vendor boundary of the adapter: [`GeminiProvider`](super::GeminiProvider)
//! only ever talks to it through [`ContentGenerator`].

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Response};
use tracing::debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ErrorMapper;
use crate::utils::logging::truncate_for_log;

use super::config::GeminiConfig;
use super::error::{GeminiErrorMapper, gemini_network_error, gemini_parse_error, gemini_safety_error};
use super::types::{GenerateContentRequest, GenerateContentResponse, Part};

const API_KEY_HEADER: &str = "x-goog-api-key";
const GENERATE_CONTENT: &str = "generateContent";
const MAX_LOGGED_BODY: usize = 4096;

/// Single "generate content" capability of the vendor SDK
///
/// Injected into the adapter so its request building and response shaping
/// can be exercised without a network.
#[async_trait]
pub trait ContentGenerator: Send + Sync + Debug {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError>;
}

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    /// Create
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| gemini_network_error(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder
            .build()
            .map_err(|e| gemini_network_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut api_key = HeaderValue::from_str(&self.config.api_key)
            .map_err(|e| ProviderError::authentication("gemini", format!("Invalid API key format: {}", e)))?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);

        for (key, value) in &self.config.custom_headers {
            let header_name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| gemini_network_error(format!("Invalid header name: {}", e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| gemini_network_error(format!("Invalid header value: {}", e)))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    async fn handle_response(&self, response: Response) -> Result<GenerateContentResponse, ProviderError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| gemini_network_error(format!("Failed to read response: {}", e)))?;

        if self.config.debug {
            debug!(status = %status, body = %truncate_for_log(&response_text, MAX_LOGGED_BODY), "Gemini response");
        }

        if !status.is_success() {
            return Err(GeminiErrorMapper.map_http_error(status.as_u16(), &response_text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| gemini_parse_error(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(reason) = parsed.block_reason() {
            return Err(gemini_safety_error(format!("Prompt blocked: {}", reason)));
        }

        if let Some(reason) = parsed.blocked_finish_reason() {
            return Err(gemini_safety_error(format!("Candidate withheld: {}", reason)));
        }

        Ok(parsed)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.config.get_endpoint(model, GENERATE_CONTENT);
        let headers = self.build_headers()?;

        if self.config.debug {
            debug!(url = %url, body = %describe_request(request), "Gemini request");
        }

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiErrorMapper.map_timeout_error(Duration::from_secs(self.config.request_timeout))
                } else {
                    GeminiErrorMapper.map_network_error(&e)
                }
            })?;

        self.handle_response(response).await
    }
}

/// Request body for debug logs, with image payloads elided
fn describe_request(request: &GenerateContentRequest) -> String {
    let mut redacted = request.clone();
    for content in &mut redacted.contents {
        for part in &mut content.parts {
            if let Part::InlineData { inline_data } = part {
                inline_data.data = format!("<{} base64 chars>", inline_data.data.len());
            }
        }
    }

    let rendered = serde_json::to_string(&redacted).unwrap_or_default();
    truncate_for_log(&rendered, MAX_LOGGED_BODY)
}
