//! Utility modules
//!
//! - **casing**: camelCase -> snake_case key translation for vendor payloads
//! - **error**: application-level error type
//! - **image**: page image loading and base64 encoding
//! - **logging**: tracing subscriber setup

pub mod casing;
pub mod error;
pub mod image;
pub mod logging;

pub use casing::{camel_to_snake, keys_to_snake_case};
pub use error::{AppError, Result};
pub use image::load_image;
pub use logging::init_logging;

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
