//! Provider adapter implementations
//!
//! Each vendor lives in its own module and implements
//! [`ModelProvider`](crate::core::traits::ModelProvider).

pub mod gemini;
pub mod unified_provider;

pub use unified_provider::ProviderError;
