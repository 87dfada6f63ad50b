//! Test fixtures and data factories
//!
//! Factories build real request and response values with sensible defaults.

use pagescribe::core::providers::gemini::GenerateContentResponse;
use pagescribe::{CompletionRequest, ExtractionRequest, GeminiConfig, ImageSource};
use serde_json::{Value, json};

/// Smallest valid PNG (1x1 transparent pixel), base64 encoded
pub const PIXEL_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

pub const TEST_MODEL: &str = "gemini-2.0-flash";

/// Factory for page requests
pub struct PageFactory;

impl PageFactory {
    pub fn image() -> ImageSource {
        ImageSource::png(PIXEL_PNG)
    }

    /// OCR request without formatting context
    pub fn ocr() -> CompletionRequest {
        CompletionRequest::new(Self::image())
    }

    /// OCR request that should follow the previous page's formatting
    pub fn ocr_following(prior_page: &str) -> CompletionRequest {
        CompletionRequest::new(Self::image()).maintaining_format(prior_page)
    }

    pub fn invoice_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "invoiceNumber": {"type": "string"},
                "totalAmount": {"type": "number"},
                "lineItems": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {"unitPrice": {"type": "number"}}
                    }
                }
            },
            "required": ["invoiceNumber"]
        })
    }

    pub fn extraction() -> ExtractionRequest {
        ExtractionRequest::new(Self::image(), Self::invoice_schema())
    }

    /// Config with the camelCase generation params a caller would pass
    pub fn config() -> GeminiConfig {
        GeminiConfig::new("test-key", TEST_MODEL)
            .with_generation_param("temperature", json!(0))
            .with_generation_param("maxOutputTokens", json!(8192))
            .with_generation_param("topP", json!(0.95))
    }
}

/// Factory for vendor responses
pub struct ResponseFactory;

impl ResponseFactory {
    pub fn text(text: &str, input_tokens: u32, output_tokens: u32) -> GenerateContentResponse {
        GenerateContentResponse::from_text(text).with_usage(input_tokens, output_tokens)
    }

    /// Wire body as the Gemini REST API returns it
    pub fn wire_body(text: &str, input_tokens: u32, output_tokens: u32) -> Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {
                "promptTokenCount": input_tokens,
                "candidatesTokenCount": output_tokens,
                "totalTokenCount": input_tokens + output_tokens
            },
            "modelVersion": "gemini-2.0-flash"
        })
    }

    /// Google error envelope
    pub fn error_body(code: u16, status: &str, message: &str) -> Value {
        json!({
            "error": {"code": code, "message": message, "status": status}
        })
    }
}
