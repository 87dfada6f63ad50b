//! Result types for the adapter interface

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token usage reported by the vendor; zero when it reports nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Usage {
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// OCR result for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResult {
    /// Raw generated text
    pub content: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl CompletionResult {
    pub fn new(content: impl Into<String>, usage: Usage) -> Self {
        Self {
            content: content.into(),
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        }
    }
}

/// Extraction result for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Parsed structured value
    pub extracted: Value,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl ExtractionResult {
    pub fn new(extracted: Value, usage: Usage) -> Self {
        Self {
            extracted,
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        }
    }
}

/// Adapter response, mirroring [`ModelRequest`](super::requests::ModelRequest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelResponse {
    Completion(CompletionResult),
    Extraction(ExtractionResult),
}

impl ModelResponse {
    pub fn usage(&self) -> Usage {
        match self {
            Self::Completion(result) => Usage {
                input_tokens: result.input_tokens,
                output_tokens: result.output_tokens,
            },
            Self::Extraction(result) => Usage {
                input_tokens: result.input_tokens,
                output_tokens: result.output_tokens,
            },
        }
    }

    pub fn into_completion(self) -> Option<CompletionResult> {
        match self {
            Self::Completion(result) => Some(result),
            Self::Extraction(_) => None,
        }
    }

    pub fn into_extraction(self) -> Option<ExtractionResult> {
        match self {
            Self::Extraction(result) => Some(result),
            Self::Completion(_) => None,
        }
    }
}
