//! Image Upload Use Case
//!
//! Accepts a single image, validates MIME type and size, and writes it
//! under the configured upload directory with a collision-resistant
//! `timestamp-random.ext` name. The binary serves that directory
//! statically, so the returned URL is immediately fetchable.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;

use crate::application::config::BlogConfig;
use crate::error::{BlogError, BlogResult};

/// Fallback extension when the client filename carries none
const DEFAULT_EXTENSION: &str = "bin";

/// An image received from a multipart request
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// A stored image
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// File name under the upload directory
    pub file_name: String,
    /// Public URL the file is served at
    pub url: String,
}

/// Upload image use case
pub struct UploadImageUseCase {
    config: Arc<BlogConfig>,
}

impl UploadImageUseCase {
    pub fn new(config: Arc<BlogConfig>) -> Self {
        Self { config }
    }

    pub async fn execute(&self, upload: ImageUpload) -> BlogResult<UploadedImage> {
        let content_type = upload
            .content_type
            .as_deref()
            .ok_or_else(|| BlogError::Validation("Content type is required".to_string()))?;
        if !content_type.starts_with("image/") {
            return Err(BlogError::Validation(
                "Only image uploads are accepted".to_string(),
            ));
        }

        if upload.data.is_empty() {
            return Err(BlogError::Validation("Uploaded file is empty".to_string()));
        }
        if upload.data.len() > self.config.max_upload_bytes {
            return Err(BlogError::UploadTooLarge);
        }

        let file_name = generate_file_name(upload.file_name.as_deref());

        tokio::fs::create_dir_all(&self.config.upload_dir)
            .await
            .map_err(|e| BlogError::Internal(format!("Upload dir unavailable: {e}")))?;
        tokio::fs::write(self.config.upload_dir.join(&file_name), &upload.data)
            .await
            .map_err(|e| BlogError::Internal(format!("Upload write failed: {e}")))?;

        let url = format!(
            "{}/{}",
            self.config.public_upload_path.trim_end_matches('/'),
            file_name
        );

        tracing::info!(file = %file_name, bytes = upload.data.len(), "Image uploaded");

        Ok(UploadedImage { file_name, url })
    }
}

/// Build a `timestamp-random.ext` name
///
/// Only the extension of the client-supplied filename is kept, and only
/// when it is plain ASCII alphanumeric, so nothing the client sends can
/// influence the stored path.
fn generate_file_name(client_name: Option<&str>) -> String {
    let ext = client_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let random = platform::crypto::random_bytes(4)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<String>();

    format!("{}-{}.{}", Utc::now().timestamp_millis(), random, ext)
}
