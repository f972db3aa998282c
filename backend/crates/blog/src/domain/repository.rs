//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CategoryId, CommentId, PostId, UserId};

use crate::domain::entity::{
    Category, Comment, CommentView, CommentWithPost, NewComment, NewPost, Post, PostFilter,
    PostPatch, PostView,
};
use crate::error::BlogResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a new post and return the assigned id
    async fn insert(&self, post: &NewPost) -> BlogResult<PostId>;

    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> BlogResult<Option<Post>>;

    /// Find post by ID with author and category names
    async fn find_view(&self, id: PostId) -> BlogResult<Option<PostView>>;

    /// Increment the view counter; returns false if the post is absent
    async fn increment_views(&self, id: PostId) -> BlogResult<bool>;

    /// List posts matching the filter, newest first
    async fn list(&self, filter: &PostFilter, limit: i64, offset: i64)
    -> BlogResult<Vec<PostView>>;

    /// Count posts matching the filter
    async fn count(&self, filter: &PostFilter) -> BlogResult<i64>;

    /// Replace the content of an existing post
    async fn update(&self, id: PostId, patch: &PostPatch) -> BlogResult<()>;

    /// Delete a post (and its comments, via cascade)
    async fn delete(&self, id: PostId) -> BlogResult<()>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Insert a new comment and return the assigned id
    async fn insert(&self, comment: &NewComment) -> BlogResult<CommentId>;

    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> BlogResult<Option<Comment>>;

    /// Comments on a post, oldest first, with commenter usernames
    async fn list_by_post(&self, post_id: PostId) -> BlogResult<Vec<CommentView>>;

    /// A user's comments, newest first, with post titles
    async fn list_by_user(
        &self,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> BlogResult<Vec<CommentWithPost>>;

    /// Count a user's comments
    async fn count_by_user(&self, user_id: UserId) -> BlogResult<i64>;

    /// Delete a comment
    async fn delete(&self, id: CommentId) -> BlogResult<()>;
}

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// All categories ordered by name
    async fn list_all(&self) -> BlogResult<Vec<Category>>;

    /// Find category by ID
    async fn find_by_id(&self, id: CategoryId) -> BlogResult<Option<Category>>;

    /// Find category by exact name
    async fn find_by_name(&self, name: &str) -> BlogResult<Option<Category>>;

    /// Return the id for a name, creating the category if absent
    async fn find_or_create_by_name(&self, name: &str) -> BlogResult<CategoryId>;
}
