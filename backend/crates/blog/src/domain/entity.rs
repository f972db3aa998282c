//! Blog Entities
//!
//! 記事（Post）、コメント（Comment）、カテゴリ（Category）のドメイン実体。
//! `author_id` / `user_id` は作成時に一度だけ設定され、以後不変。

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, CommentId, PostId, UserId};

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Optional cover image URL
    pub cover: Option<String>,
    pub tags: Option<Vec<String>>,
    /// View counter, incremented on every detail read
    pub views: i64,
    pub category_id: Option<CategoryId>,
    /// Owner; set once at creation
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post about to be inserted; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub cover: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category_id: Option<CategoryId>,
    pub author_id: UserId,
}

/// Replacement content for an existing post
///
/// The owner and the view counter are never touched by an update.
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
    pub cover: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category_id: Option<CategoryId>,
}

/// A post joined with its author and category names for display
#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub author_name: String,
    pub category_name: Option<String>,
}

/// Filter for post listing
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring match on title or content
    pub keyword: Option<String>,
}

/// Comment entity
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    /// Owner; set once at creation
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment about to be inserted
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
}

/// A comment joined with its author's username
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub username: String,
}

/// A comment joined with the title of the post it belongs to
#[derive(Debug, Clone)]
pub struct CommentWithPost {
    pub comment: Comment,
    pub post_title: String,
}

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
