//! Core functionality
//!
//! Adapter contract, request/result types, prompt templates and provider
//! implementations.

pub mod prompts;
pub mod providers;
pub mod traits;
pub mod types;
