//! Core provider trait definitions
//!
//! Defines the uniform interface every OCR provider adapter satisfies

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{
    common::OperationMode,
    requests::ModelRequest,
    responses::ModelResponse,
};

/// Unified provider adapter interface
///
/// An adapter is built once per document or session with a fixed
/// [`OperationMode`] and then reused for every page. Calls are independent:
/// the adapter keeps no per-call state, so the orchestrator may issue as
/// many concurrent calls as it likes and owns any ordering between them.
///
/// # Example
///
/// ```rust,ignore
/// let provider = GeminiProvider::new(config, OperationMode::Ocr)?;
/// let request = CompletionRequest::new(ImageSource::png(page_base64));
/// let response = provider.get_completion(request.into()).await?;
/// ```
#[async_trait]
pub trait ModelProvider: Send + Sync + Debug + 'static {
    /// Get provider name
    ///
    /// Used as the `provider` field in logs and errors.
    fn name(&self) -> &'static str;

    /// Mode fixed at construction
    fn mode(&self) -> OperationMode;

    /// Model identifier requests are sent to
    fn model(&self) -> &str;

    /// Run one page through the provider
    ///
    /// The request variant must match [`mode`](Self::mode); a mismatch fails
    /// with [`ProviderError::UnsupportedMode`] without contacting the vendor.
    /// Vendor failures are returned unchanged, and no partial result is ever
    /// produced.
    async fn get_completion(&self, request: ModelRequest) -> Result<ModelResponse, ProviderError>;
}

/// Provider configuration contract
pub trait ProviderConfig: Send + Sync + Clone + Debug + 'static {
    /// Validate configuration
    fn validate(&self) -> Result<(), String>;
}
