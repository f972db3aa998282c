//! Application Configuration
//!
//! Configuration for the blog application layer.

use std::path::PathBuf;

/// Default page size for listings
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on page size to keep queries cheap
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum accepted upload size (5 MiB)
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Blog application configuration
#[derive(Debug, Clone)]
pub struct BlogConfig {
    /// Directory uploaded images are written to
    pub upload_dir: PathBuf,
    /// Public URL prefix the binary serves that directory under
    pub public_upload_path: String,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            public_upload_path: "/uploads".to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl BlogConfig {
    /// Config rooted at a specific upload directory
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            ..Default::default()
        }
    }
}
