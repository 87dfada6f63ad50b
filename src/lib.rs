//! # pagescribe
//!
//! Gemini provider adapter for a multi-provider document OCR pipeline.
//!
//! The adapter turns one page image into either markdown text (OCR mode) or
//! structured data matching a caller-supplied schema (extraction mode). It
//! does one vendor call per page and nothing else: batching, retries, rate
//! limiting and document assembly belong to the orchestrator that drives it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagescribe::{
//!     CompletionRequest, GeminiConfig, GeminiProvider, ImageSource, ModelProvider, OperationMode,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GeminiConfig::from_env()?;
//!     let provider = GeminiProvider::new(config, OperationMode::Ocr)?;
//!
//!     let page = pagescribe::utils::load_image("page-1.png").await?;
//!     let response = provider
//!         .get_completion(CompletionRequest::new(page).into())
//!         .await?;
//!
//!     if let Some(result) = response.into_completion() {
//!         println!("{}", result.content);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::providers::gemini::{ContentGenerator, GeminiClient, GeminiConfig, GeminiProvider};
pub use core::providers::ProviderError;
pub use core::traits::ModelProvider;
pub use core::types::{
    CompletionRequest, CompletionResult, ExtractionRequest, ExtractionResult, ImageSource,
    ModelRequest, ModelResponse, OperationMode, Usage,
};
pub use utils::error::{AppError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
