//! Application Layer
//!
//! Use cases and application services.

pub mod category;
pub mod comments;
pub mod config;
pub mod posts;
pub mod upload;

// Re-exports
pub use category::{CategoryRef, ListCategoriesUseCase};
pub use comments::{
    CreateCommentInput, CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase,
    MyCommentsOutput, MyCommentsUseCase,
};
pub use config::BlogConfig;
pub use posts::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsInput,
    ListPostsOutput, ListPostsUseCase, UpdatePostInput, UpdatePostUseCase,
};
pub use upload::{ImageUpload, UploadImageUseCase, UploadedImage};
