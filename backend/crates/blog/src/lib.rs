//! Blog Backend Module
//!
//! Posts, comments, categories and image upload.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, ownership policy, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Ownership Model
//! Every mutation on a post or comment is gated by a pure ownership
//! check: the authenticated identity's id must equal the stored owner
//! id. Missing resources report NotFound before ownership is ever
//! considered, and a rejected mutation leaves the resource untouched.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::BlogConfig;
pub use domain::policy::can_mutate;
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::{categories_router, comments_router, posts_router, upload_router};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
