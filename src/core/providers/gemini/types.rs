//! Gemini wire types
//!
//! Outbound payloads are written in snake_case (accepted by the
//! `generateContent` endpoint); inbound payloads arrive in camelCase.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::types::responses::Usage;

/// MIME type requested for structured output
pub const JSON_MIME_TYPE: &str = "application/json";

/// Role of the single user turn sent per page
pub const USER_ROLE: &str = "user";

/// Candidate finish reasons that mean the answer was withheld
pub const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
    "IMAGE_SAFETY",
];

/// `generateContent` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "GenerationConfig::is_empty")]
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Single-turn user message carrying `parts` in order
    pub fn single_turn(parts: Vec<Part>, generation_config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: USER_ROLE.to_string(),
                parts,
            }],
            generation_config,
        }
    }

    /// All parts across all turns, in order
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.contents.iter().flat_map(|content| content.parts.iter())
    }
}

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// A text segment or an inline binary blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: Blob },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: Blob {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::InlineData { .. } => None,
        }
    }

    pub fn as_inline_data(&self) -> Option<&Blob> {
        match self {
            Self::InlineData { inline_data } => Some(inline_data),
            Self::Text { .. } => None,
        }
    }
}

/// Inline base64 payload with declared media type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

/// Generation configuration, keyed in the vendor's snake_case convention
///
/// Kept as an open map so any parameter the caller configures is forwarded
/// without this crate having to know about it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationConfig(Map<String, Value>);

impl GenerationConfig {
    pub fn new(params: Map<String, Value>) -> Self {
        Self(params)
    }

    /// Force JSON output constrained by `schema`
    ///
    /// The schema is inserted verbatim; its keys are caller data and are
    /// never case-translated.
    pub fn with_structured_output(mut self, schema: Value) -> Self {
        self.0.insert(
            "response_mime_type".to_string(),
            Value::String(JSON_MIME_TYPE.to_string()),
        );
        self.0.insert("response_schema".to_string(), schema);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn response_mime_type(&self) -> Option<&str> {
        self.0.get("response_mime_type").and_then(Value::as_str)
    }

    pub fn response_schema(&self) -> Option<&Value> {
        self.0.get("response_schema")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// `generateContent` response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Response carrying a single text candidate
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![ResponsePart {
                        text: Some(text.into()),
                        thought: false,
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            usage_metadata: None,
            prompt_feedback: None,
        }
    }

    pub fn with_usage(mut self, prompt_tokens: u32, candidate_tokens: u32) -> Self {
        self.usage_metadata = Some(UsageMetadata {
            prompt_token_count: Some(prompt_tokens),
            candidates_token_count: Some(candidate_tokens),
            total_token_count: Some(prompt_tokens.saturating_add(candidate_tokens)),
        });
        self
    }

    /// Concatenated answer text of the first candidate
    ///
    /// Thought summaries are left out.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Token counts, zero where the vendor reported nothing
    pub fn usage(&self) -> Usage {
        self.usage_metadata
            .as_ref()
            .map(|usage| Usage {
                input_tokens: usage.prompt_token_count.unwrap_or(0),
                output_tokens: usage.candidates_token_count.unwrap_or(0),
            })
            .unwrap_or_default()
    }

    /// Block reason when the prompt itself was rejected
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }

    /// Finish reason of the first candidate when generation was stopped by
    /// a content policy
    pub fn blocked_finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
            .filter(|reason| BLOCKING_FINISH_REASONS.contains(reason))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Thought summary rather than answer text (`includeThoughts`)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub thought: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}
