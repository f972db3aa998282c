//! Post Use Cases
//!
//! Mutations follow a fixed order: fetch, NotFound if absent, ownership
//! check, then the mutation. A rejected request leaves the post
//! untouched.

use std::sync::Arc;

use auth::domain::entity::Identity;
use kernel::id::PostId;

use crate::application::category::CategoryRef;
use crate::domain::entity::{NewPost, PostFilter, PostPatch, PostView};
use crate::domain::policy::can_mutate;
use crate::domain::repository::{CategoryRepository, PostRepository};
use crate::error::{BlogError, BlogResult};

use super::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

fn require_text(value: &str, field: &str) -> BlogResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BlogError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Create
// ============================================================================

/// Create post input
#[derive(Debug, Clone)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub cover: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<CategoryRef>,
}

/// Create post use case
pub struct CreatePostUseCase<R: PostRepository + CategoryRepository> {
    repo: Arc<R>,
}

impl<R: PostRepository + CategoryRepository> CreatePostUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, input: CreatePostInput) -> BlogResult<PostId> {
        let title = require_text(&input.title, "Title")?;
        let content = require_text(&input.content, "Content")?;

        let category_id = match &input.category {
            Some(cat) => Some(cat.resolve_or_create(self.repo.as_ref()).await?),
            None => None,
        };

        let post = NewPost {
            title,
            content,
            cover: input.cover,
            tags: input.tags,
            category_id,
            author_id: identity.id,
        };
        let id = PostRepository::insert(&*self.repo, &post).await?;

        tracing::info!(post_id = id.as_i64(), author_id = identity.id.as_i64(), "Post created");

        Ok(id)
    }
}

// ============================================================================
// List
// ============================================================================

/// List posts input
#[derive(Debug, Clone, Default)]
pub struct ListPostsInput {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub category: Option<CategoryRef>,
    pub keyword: Option<String>,
}

/// List posts output
#[derive(Debug, Clone)]
pub struct ListPostsOutput {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub posts: Vec<PostView>,
}

/// List posts use case
pub struct ListPostsUseCase<R: PostRepository + CategoryRepository> {
    repo: Arc<R>,
}

impl<R: PostRepository + CategoryRepository> ListPostsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ListPostsInput) -> BlogResult<ListPostsOutput> {
        let page = input.page.unwrap_or(1).max(1);
        let page_size = input
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        // A filter naming an unknown category yields an empty page
        let category_id = match &input.category {
            Some(cat) => match cat.resolve_for_filter(self.repo.as_ref()).await? {
                Some(id) => Some(id),
                None => {
                    return Ok(ListPostsOutput {
                        total: 0,
                        page,
                        page_size,
                        posts: Vec::new(),
                    });
                }
            },
            None => None,
        };

        let filter = PostFilter {
            category_id,
            keyword: input
                .keyword
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
        };

        let total = self.repo.count(&filter).await?;
        let posts = self
            .repo
            .list(&filter, page_size, (page - 1).saturating_mul(page_size))
            .await?;

        Ok(ListPostsOutput {
            total,
            page,
            page_size,
            posts,
        })
    }
}

// ============================================================================
// Detail
// ============================================================================

/// Get post detail use case
///
/// Reading a detail bumps the view counter first, so this read is
/// intentionally not idempotent.
pub struct GetPostUseCase<R: PostRepository> {
    repo: Arc<R>,
}

impl<R: PostRepository> GetPostUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: PostId) -> BlogResult<PostView> {
        if !self.repo.increment_views(id).await? {
            return Err(BlogError::PostNotFound);
        }

        self.repo
            .find_view(id)
            .await?
            .ok_or(BlogError::PostNotFound)
    }
}

// ============================================================================
// Update
// ============================================================================

/// Update post input
#[derive(Debug, Clone)]
pub struct UpdatePostInput {
    pub title: String,
    pub content: String,
    pub cover: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<CategoryRef>,
}

/// Update post use case
pub struct UpdatePostUseCase<R: PostRepository + CategoryRepository> {
    repo: Arc<R>,
}

impl<R: PostRepository + CategoryRepository> UpdatePostUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        id: PostId,
        input: UpdatePostInput,
    ) -> BlogResult<()> {
        let post = PostRepository::find_by_id(&*self.repo, id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !can_mutate(identity, post.author_id) {
            return Err(BlogError::NotOwner);
        }

        let title = require_text(&input.title, "Title")?;
        let content = require_text(&input.content, "Content")?;

        let category_id = match &input.category {
            Some(cat) => Some(cat.resolve_or_create(self.repo.as_ref()).await?),
            None => None,
        };

        let patch = PostPatch {
            title,
            content,
            cover: input.cover,
            tags: input.tags,
            category_id,
        };
        self.repo.update(id, &patch).await
    }
}

// ============================================================================
// Delete
// ============================================================================

/// Delete post use case
pub struct DeletePostUseCase<R: PostRepository> {
    repo: Arc<R>,
}

impl<R: PostRepository> DeletePostUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, id: PostId) -> BlogResult<()> {
        let post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !can_mutate(identity, post.author_id) {
            return Err(BlogError::NotOwner);
        }

        self.repo.delete(id).await?;

        tracing::info!(post_id = id.as_i64(), "Post deleted");

        Ok(())
    }
}
