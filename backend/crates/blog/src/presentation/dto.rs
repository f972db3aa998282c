//! Data Transfer Objects
//!
//! Request/response types for the HTTP API. Field names are camelCase
//! on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::category::CategoryRef;
use crate::domain::entity::{Category, CommentView, CommentWithPost, PostView};

// ============================================================================
// Category field
// ============================================================================

/// A category reference as it arrives in JSON: number or string
///
/// `3` and `"3"` both mean the category with id 3; `"rust"` means the
/// category named rust.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    Id(i64),
    Raw(String),
}

impl From<CategoryField> for CategoryRef {
    fn from(field: CategoryField) -> Self {
        match field {
            CategoryField::Id(id) => CategoryRef::ById(kernel::id::CategoryId::from_i64(id)),
            CategoryField::Raw(raw) => CategoryRef::parse(&raw),
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

/// POST /api/posts request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<CategoryField>,
}

/// POST /api/posts response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub post_id: i64,
}

/// PUT /api/posts/{id} request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<CategoryField>,
}

/// GET /api/posts query string
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
}

/// A post as rendered in responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub cover: Option<String>,
    pub tags: Option<Vec<String>>,
    pub views: i64,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub author_id: i64,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostView> for PostDto {
    fn from(view: PostView) -> Self {
        let post = view.post;
        Self {
            id: post.id.as_i64(),
            title: post.title,
            content: post.content,
            cover: post.cover,
            tags: post.tags,
            views: post.views,
            category_id: post.category_id.map(|c| c.as_i64()),
            category_name: view.category_name,
            author_id: post.author_id.as_i64(),
            author_name: view.author_name,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// GET /api/posts response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsResponse {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub posts: Vec<PostDto>,
}

// ============================================================================
// Categories
// ============================================================================

/// An item of GET /api/categories
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.as_i64(),
            name: category.name,
        }
    }
}

// ============================================================================
// Comments
// ============================================================================

/// POST /api/comments request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: i64,
    #[serde(default)]
    pub content: String,
}

/// POST /api/comments response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentResponse {
    pub comment_id: i64,
}

/// An item of GET /api/comments/{postId}
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentView> for CommentDto {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.comment.id.as_i64(),
            post_id: view.comment.post_id.as_i64(),
            user_id: view.comment.user_id.as_i64(),
            username: view.username,
            content: view.comment.content,
            created_at: view.comment.created_at,
        }
    }
}

/// GET /api/comments/my query string
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MyCommentsQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// An item of GET /api/comments/my
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyCommentDto {
    pub id: i64,
    pub post_id: i64,
    pub post_title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentWithPost> for MyCommentDto {
    fn from(item: CommentWithPost) -> Self {
        Self {
            id: item.comment.id.as_i64(),
            post_id: item.comment.post_id.as_i64(),
            post_title: item.post_title,
            content: item.comment.content,
            created_at: item.comment.created_at,
        }
    }
}

/// GET /api/comments/my response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyCommentsResponse {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub comments: Vec<MyCommentDto>,
}

// ============================================================================
// Upload
// ============================================================================

/// POST /api/upload/image response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub file_name: String,
}
