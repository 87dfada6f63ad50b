//! Gemini Provider Implementation
//!
//! Adapts the Gemini `generateContent` API to the [`ModelProvider`] contract:
//! OCR requests become a markdown-transcription prompt, extraction requests
//! become a JSON-constrained generation against the caller's schema.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::core::prompts::{EXTRACTION_PROMPT, OCR_SYSTEM_PROMPT, consistency_prompt};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::{ModelProvider, ProviderConfig};
use crate::core::types::{
    common::OperationMode,
    requests::{CompletionRequest, ExtractionRequest, ImageSource, ModelRequest},
    responses::{CompletionResult, ExtractionResult, ModelResponse},
};
use crate::utils::generate_request_id;

use super::client::{ContentGenerator, GeminiClient};
use super::config::GeminiConfig;
use super::error::PROVIDER_NAME;
use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

/// Gemini provider adapter
///
/// Holds only immutable state, so one instance can serve concurrent page
/// requests.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    config: GeminiConfig,
    mode: OperationMode,
    generation_config: GenerationConfig,
    generator: Arc<dyn ContentGenerator>,
}

impl GeminiProvider {
    /// Create an adapter backed by the HTTP client
    pub fn new(config: GeminiConfig, mode: OperationMode) -> Result<Self, ProviderError> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration(PROVIDER_NAME, e))?;

        let client = GeminiClient::new(config.clone())?;
        Ok(Self::with_generator(config, mode, Arc::new(client)))
    }

    /// Create an adapter over any [`ContentGenerator`]
    pub fn with_generator(
        config: GeminiConfig,
        mode: OperationMode,
        generator: Arc<dyn ContentGenerator>,
    ) -> Self {
        let generation_config = config.vendor_generation_config();
        Self {
            config,
            mode,
            generation_config,
            generator,
        }
    }

    /// Generation parameters as sent to the vendor
    pub fn generation_config(&self) -> &GenerationConfig {
        &self.generation_config
    }

    /// Build the OCR payload: base instruction, optional consistency
    /// instruction, then the page image.
    pub fn build_ocr_request(&self, request: &CompletionRequest) -> GenerateContentRequest {
        let mut parts = vec![Part::text(OCR_SYSTEM_PROMPT)];

        if let Some(prior_page) = request.consistency_source() {
            parts.push(Part::text(consistency_prompt(prior_page)));
        }

        parts.push(image_part(&request.image));

        GenerateContentRequest::single_turn(parts, self.generation_config.clone())
    }

    /// Build the extraction payload: instruction, page image, and a
    /// generation config forcing JSON output under the caller's schema.
    pub fn build_extraction_request(&self, request: &ExtractionRequest) -> GenerateContentRequest {
        let parts = vec![Part::text(EXTRACTION_PROMPT), image_part(&request.image)];

        let generation_config = self
            .generation_config
            .clone()
            .with_structured_output(request.schema.clone());

        GenerateContentRequest::single_turn(parts, generation_config)
    }

    async fn handle_ocr(
        &self,
        request: &CompletionRequest,
        request_id: &str,
    ) -> Result<CompletionResult, ProviderError> {
        let payload = self.build_ocr_request(request);
        let response = self.call_vendor(&payload, request_id).await?;

        let usage = response.usage();
        debug!(
            provider = PROVIDER_NAME,
            request_id,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "OCR page completed"
        );

        Ok(CompletionResult::new(response.text(), usage))
    }

    async fn handle_extraction(
        &self,
        request: &ExtractionRequest,
        request_id: &str,
    ) -> Result<ExtractionResult, ProviderError> {
        let payload = self.build_extraction_request(request);
        let response = self.call_vendor(&payload, request_id).await?;

        let extracted = parse_structured_output(&response).map_err(|e| {
            error!(provider = PROVIDER_NAME, request_id, error = %e, "Extraction output is not valid JSON");
            e
        })?;

        let usage = response.usage();
        debug!(
            provider = PROVIDER_NAME,
            request_id,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "Extraction page completed"
        );

        Ok(ExtractionResult::new(extracted, usage))
    }

    /// One vendor round-trip; failures are logged here and returned as-is
    async fn call_vendor(
        &self,
        payload: &GenerateContentRequest,
        request_id: &str,
    ) -> Result<GenerateContentResponse, ProviderError> {
        self.generator
            .generate_content(&self.config.model, payload)
            .await
            .map_err(|e| {
                error!(
                    provider = PROVIDER_NAME,
                    model = %self.config.model,
                    request_id,
                    error = %e,
                    "Gemini generateContent call failed"
                );
                e
            })
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn mode(&self) -> OperationMode {
        self.mode
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn get_completion(&self, request: ModelRequest) -> Result<ModelResponse, ProviderError> {
        let request_id = generate_request_id();
        info!(
            provider = PROVIDER_NAME,
            model = %self.config.model,
            mode = %self.mode,
            request_id = %request_id,
            "Dispatching page request"
        );

        match (self.mode, &request) {
            (OperationMode::Ocr, ModelRequest::Completion(req)) => self
                .handle_ocr(req, &request_id)
                .await
                .map(ModelResponse::Completion),
            (OperationMode::Extraction, ModelRequest::Extraction(req)) => self
                .handle_extraction(req, &request_id)
                .await
                .map(ModelResponse::Extraction),
            (mode, other) => {
                let err = ProviderError::unsupported_mode(PROVIDER_NAME, mode.as_str());
                error!(
                    provider = PROVIDER_NAME,
                    request_id = %request_id,
                    configured = %mode,
                    requested = %other.mode(),
                    "No handler for request in configured mode"
                );
                Err(err)
            }
        }
    }
}

fn image_part(image: &ImageSource) -> Part {
    Part::inline_data(image.media_type.clone(), image.data.clone())
}

/// Parse the generated text of an extraction call as JSON
///
/// Tolerates a single surrounding markdown code fence. Only objects and
/// arrays are accepted; `null` or a bare scalar cannot satisfy a schema.
fn parse_structured_output(
    response: &GenerateContentResponse,
) -> Result<serde_json::Value, ProviderError> {
    let text = response.text();
    let trimmed = strip_code_fence(text.trim());

    if trimmed.is_empty() {
        return Err(ProviderError::malformed_response(
            PROVIDER_NAME,
            "Empty response text where JSON was expected",
        ));
    }

    let value: serde_json::Value = serde_json::from_str(trimmed).map_err(|e| {
        ProviderError::malformed_response(PROVIDER_NAME, format!("Failed to parse extraction JSON: {}", e))
    })?;

    match value {
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => Ok(value),
        other => Err(ProviderError::malformed_response(
            PROVIDER_NAME,
            format!("Expected a JSON object or array, got `{}`", other),
        )),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
