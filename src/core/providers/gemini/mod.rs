//! Google Gemini Provider
//!
//! Page OCR and schema-driven extraction over the Gemini `generateContent`
//! API (Google AI Studio).
//!
//! # Features
//! - Inline page images with declared media type
//! - Formatting consistency with the previous page
//! - JSON output constrained by a caller-supplied schema

pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod types;

// Re-export main types
pub use client::{ContentGenerator, GeminiClient};
pub use config::{GeminiConfig, GeminiConfigBuilder};
pub use error::GeminiErrorMapper;
pub use provider::GeminiProvider;
pub use types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
