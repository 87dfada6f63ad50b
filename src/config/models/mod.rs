//! Configuration data models

pub mod logging;

pub use logging::*;

pub use crate::core::providers::gemini::config::GeminiConfig;
pub use crate::core::types::common::OperationMode;

/// Default operation mode when a config file does not name one
pub fn default_mode() -> OperationMode {
    OperationMode::Ocr
}
