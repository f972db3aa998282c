//! Domain Layer

pub mod entity;
pub mod policy;
pub mod repository;

pub use entity::{Category, Comment, Post};
pub use policy::can_mutate;
pub use repository::{CategoryRepository, CommentRepository, PostRepository};
