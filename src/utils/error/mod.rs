//! Error Handling utilities
//!
//! Application-level error type wrapping provider and plumbing failures.

pub mod error;

pub use error::*;
