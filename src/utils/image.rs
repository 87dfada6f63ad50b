//! Page image loading
//!
//! Turns image files on disk into base64 [`ImageSource`] values for requests.

use std::path::Path;

use tracing::debug;

use crate::core::types::requests::{DEFAULT_IMAGE_MEDIA_TYPE, ImageSource};
use crate::utils::error::{AppError, Result};

/// Guess the media type from a file extension
///
/// Unknown or missing extensions fall back to `image/png`.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => DEFAULT_IMAGE_MEDIA_TYPE,
    }
}

/// Read an image file and base64-encode it
pub async fn load_image(path: impl AsRef<Path>) -> Result<ImageSource> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::Io(format!("Failed to read image {}: {}", path.display(), e)))?;

    if bytes.is_empty() {
        return Err(AppError::Io(format!("Image file {} is empty", path.display())));
    }

    let media_type = media_type_for_path(path);
    debug!(path = %path.display(), bytes = bytes.len(), media_type, "Loaded page image");

    Ok(ImageSource::from_bytes(&bytes, media_type))
}
