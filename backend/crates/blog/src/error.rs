//! Blog Error Types
//!
//! Blog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Post not found
    #[error("Post not found")]
    PostNotFound,

    /// Comment not found
    #[error("Comment not found")]
    CommentNotFound,

    /// Category not found
    #[error("Category not found")]
    CategoryNotFound,

    /// The authenticated user does not own the resource
    #[error("You can only modify your own content")]
    NotOwner,

    /// Request field validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Upload exceeds the configured size limit
    #[error("Uploaded file is too large")]
    UploadTooLarge,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::PostNotFound
            | BlogError::CommentNotFound
            | BlogError::CategoryNotFound => StatusCode::NOT_FOUND,
            BlogError::NotOwner => StatusCode::FORBIDDEN,
            BlogError::Validation(_) => StatusCode::BAD_REQUEST,
            BlogError::UploadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            BlogError::Database(_) | BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::PostNotFound
            | BlogError::CommentNotFound
            | BlogError::CategoryNotFound => ErrorKind::NotFound,
            BlogError::NotOwner => ErrorKind::Forbidden,
            BlogError::Validation(_) => ErrorKind::BadRequest,
            BlogError::UploadTooLarge => ErrorKind::PayloadTooLarge,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::NotOwner => {
                tracing::warn!("Ownership check rejected a mutation");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for BlogError {
    fn from(err: AppError) -> Self {
        BlogError::Validation(err.message().to_string())
    }
}
