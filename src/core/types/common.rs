//! Common types shared by every adapter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::providers::unified_provider::ProviderError;

/// What an adapter does with each page
///
/// Fixed when the adapter is built; requests are dispatched on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    /// Transcribe the page to free-form markdown text
    Ocr,
    /// Pull structured data matching a caller-supplied schema
    Extraction,
}

impl OperationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ocr => "ocr",
            Self::Extraction => "extraction",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ocr" => Ok(Self::Ocr),
            "extraction" | "extract" => Ok(Self::Extraction),
            other => Err(ProviderError::unsupported_mode("pagescribe", other)),
        }
    }
}
