//! Comment Use Cases
//!
//! Deletion is restricted to the comment's author. The post's author
//! has no special rights over other people's comments.

use std::sync::Arc;

use auth::domain::entity::Identity;
use kernel::id::{CommentId, PostId};

use crate::domain::entity::{CommentView, CommentWithPost, NewComment};
use crate::domain::policy::can_mutate;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{BlogError, BlogResult};

use super::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

// ============================================================================
// Create
// ============================================================================

/// Create comment input
#[derive(Debug, Clone)]
pub struct CreateCommentInput {
    pub post_id: PostId,
    pub content: String,
}

/// Create comment use case
pub struct CreateCommentUseCase<R: CommentRepository + PostRepository> {
    repo: Arc<R>,
}

impl<R: CommentRepository + PostRepository> CreateCommentUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        input: CreateCommentInput,
    ) -> BlogResult<CommentId> {
        let content = input.content.trim().to_string();
        if content.is_empty() {
            return Err(BlogError::Validation("Content is required".to_string()));
        }

        // The referenced post must exist
        PostRepository::find_by_id(&*self.repo, input.post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        let comment = NewComment {
            post_id: input.post_id,
            user_id: identity.id,
            content,
        };
        let id = CommentRepository::insert(&*self.repo, &comment).await?;

        tracing::info!(
            comment_id = id.as_i64(),
            post_id = input.post_id.as_i64(),
            "Comment created"
        );

        Ok(id)
    }
}

// ============================================================================
// List by post
// ============================================================================

/// List comments on a post, oldest first
pub struct ListCommentsUseCase<R: CommentRepository> {
    repo: Arc<R>,
}

impl<R: CommentRepository> ListCommentsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: PostId) -> BlogResult<Vec<CommentView>> {
        self.repo.list_by_post(post_id).await
    }
}

// ============================================================================
// My comments
// ============================================================================

/// Paginated listing of the caller's own comments
#[derive(Debug, Clone)]
pub struct MyCommentsOutput {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub comments: Vec<CommentWithPost>,
}

/// My comments use case
pub struct MyCommentsUseCase<R: CommentRepository> {
    repo: Arc<R>,
}

impl<R: CommentRepository> MyCommentsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> BlogResult<MyCommentsOutput> {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let total = self.repo.count_by_user(identity.id).await?;
        let comments = self
            .repo
            .list_by_user(identity.id, limit, (page - 1).saturating_mul(limit))
            .await?;

        Ok(MyCommentsOutput {
            total,
            page,
            limit,
            total_pages: (total + limit - 1) / limit,
            comments,
        })
    }
}

// ============================================================================
// Delete
// ============================================================================

/// Delete comment use case (author only)
pub struct DeleteCommentUseCase<R: CommentRepository> {
    repo: Arc<R>,
}

impl<R: CommentRepository> DeleteCommentUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, id: CommentId) -> BlogResult<()> {
        let comment = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(BlogError::CommentNotFound)?;

        if !can_mutate(identity, comment.user_id) {
            return Err(BlogError::NotOwner);
        }

        self.repo.delete(id).await
    }
}
