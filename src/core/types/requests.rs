//! Request types for the adapter interface

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::OperationMode;

/// Media type declared for page images unless the caller says otherwise
pub const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/png";

/// Image source data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Media type
    pub media_type: String,
    /// Base64 encoded data
    pub data: String,
}

impl ImageSource {
    /// Wrap already base64-encoded PNG data
    pub fn png(data: impl Into<String>) -> Self {
        Self {
            media_type: DEFAULT_IMAGE_MEDIA_TYPE.to_string(),
            data: data.into(),
        }
    }

    /// Encode raw image bytes
    pub fn from_bytes(bytes: &[u8], media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            data: BASE64_STANDARD.encode(bytes),
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }
}

/// OCR request for a single page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Page image
    pub image: ImageSource,
    /// Keep formatting consistent with the previous page
    #[serde(default)]
    pub maintain_format: bool,
    /// Text produced for the previous page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_page: Option<String>,
}

impl CompletionRequest {
    pub fn new(image: ImageSource) -> Self {
        Self {
            image,
            maintain_format: false,
            prior_page: None,
        }
    }

    /// Ask for formatting consistent with `prior_page`
    pub fn maintaining_format(mut self, prior_page: impl Into<String>) -> Self {
        self.maintain_format = true;
        self.prior_page = Some(prior_page.into());
        self
    }

    /// Prior page text that should be echoed into the prompt, if any.
    ///
    /// Only present when formatting is requested and the text is non-empty.
    pub fn consistency_source(&self) -> Option<&str> {
        if !self.maintain_format {
            return None;
        }
        self.prior_page.as_deref().filter(|text| !text.is_empty())
    }
}

/// Schema-driven extraction request for a single page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Page image
    pub image: ImageSource,
    /// JSON-schema-like description of the desired output
    pub schema: Value,
}

impl ExtractionRequest {
    pub fn new(image: ImageSource, schema: Value) -> Self {
        Self { image, schema }
    }
}

/// A request to an adapter, tagged by the capability it targets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelRequest {
    Completion(CompletionRequest),
    Extraction(ExtractionRequest),
}

impl ModelRequest {
    /// Mode this request shape belongs to
    pub fn mode(&self) -> OperationMode {
        match self {
            Self::Completion(_) => OperationMode::Ocr,
            Self::Extraction(_) => OperationMode::Extraction,
        }
    }
}

impl From<CompletionRequest> for ModelRequest {
    fn from(request: CompletionRequest) -> Self {
        Self::Completion(request)
    }
}

impl From<ExtractionRequest> for ModelRequest {
    fn from(request: ExtractionRequest) -> Self {
        Self::Extraction(request)
    }
}
