//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use kernel::id::{CategoryId, CommentId, PostId, UserId};

use crate::domain::entity::{
    Category, Comment, CommentView, CommentWithPost, NewComment, NewPost, Post, PostFilter,
    PostPatch, PostView,
};
use crate::domain::repository::{CategoryRepository, CommentRepository, PostRepository};
use crate::error::BlogResult;

/// PostgreSQL-backed blog repository
///
/// One type carries all three repository traits; they share the pool.
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn insert(&self, post: &NewPost) -> BlogResult<PostId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (
                title,
                content,
                cover,
                tags,
                category_id,
                author_id
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.cover)
        .bind(post.tags.as_ref().map(Json))
        .bind(post.category_id.map(|c| c.as_i64()))
        .bind(post.author_id.as_i64())
        .fetch_one(&self.pool)
        .await?;

        Ok(PostId::from_i64(id))
    }

    async fn find_by_id(&self, id: PostId) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                content,
                cover,
                tags,
                views,
                category_id,
                author_id,
                created_at,
                updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn find_view(&self, id: PostId) -> BlogResult<Option<PostView>> {
        let row = sqlx::query_as::<_, PostViewRow>(
            r#"
            SELECT
                p.id,
                p.title,
                p.content,
                p.cover,
                p.tags,
                p.views,
                p.category_id,
                p.author_id,
                p.created_at,
                p.updated_at,
                u.username AS author_name,
                c.name AS category_name
            FROM posts p
            JOIN users u ON u.id = p.author_id
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_view()))
    }

    async fn increment_views(&self, id: PostId) -> BlogResult<bool> {
        // Single statement; the counter bump is atomic under concurrency
        let affected = sqlx::query("UPDATE posts SET views = views + 1 WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn list(
        &self,
        filter: &PostFilter,
        limit: i64,
        offset: i64,
    ) -> BlogResult<Vec<PostView>> {
        let rows = sqlx::query_as::<_, PostViewRow>(
            r#"
            SELECT
                p.id,
                p.title,
                p.content,
                p.cover,
                p.tags,
                p.views,
                p.category_id,
                p.author_id,
                p.created_at,
                p.updated_at,
                u.username AS author_name,
                c.name AS category_name
            FROM posts p
            JOIN users u ON u.id = p.author_id
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE ($1::bigint IS NULL OR p.category_id = $1)
              AND ($2::text IS NULL
                   OR p.title ILIKE '%' || $2 || '%'
                   OR p.content ILIKE '%' || $2 || '%')
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.category_id.map(|c| c.as_i64()))
        .bind(&filter.keyword)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_view()).collect())
    }

    async fn count(&self, filter: &PostFilter) -> BlogResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM posts p
            WHERE ($1::bigint IS NULL OR p.category_id = $1)
              AND ($2::text IS NULL
                   OR p.title ILIKE '%' || $2 || '%'
                   OR p.content ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(filter.category_id.map(|c| c.as_i64()))
        .bind(&filter.keyword)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn update(&self, id: PostId, patch: &PostPatch) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                content = $3,
                cover = $4,
                tags = $5,
                category_id = $6,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(&patch.title)
        .bind(&patch.content)
        .bind(&patch.cover)
        .bind(patch.tags.as_ref().map(Json))
        .bind(patch.category_id.map(|c| c.as_i64()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: PostId) -> BlogResult<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn insert(&self, comment: &NewComment) -> BlogResult<CommentId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (post_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(comment.post_id.as_i64())
        .bind(comment.user_id.as_i64())
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(CommentId::from_i64(id))
    }

    async fn find_by_id(&self, id: CommentId) -> BlogResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                id,
                post_id,
                user_id,
                content,
                created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_comment()))
    }

    async fn list_by_post(&self, post_id: PostId) -> BlogResult<Vec<CommentView>> {
        let rows = sqlx::query_as::<_, CommentViewRow>(
            r#"
            SELECT
                co.id,
                co.post_id,
                co.user_id,
                co.content,
                co.created_at,
                u.username
            FROM comments co
            JOIN users u ON u.id = co.user_id
            WHERE co.post_id = $1
            ORDER BY co.created_at ASC, co.id ASC
            "#,
        )
        .bind(post_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_view()).collect())
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> BlogResult<Vec<CommentWithPost>> {
        let rows = sqlx::query_as::<_, CommentWithPostRow>(
            r#"
            SELECT
                co.id,
                co.post_id,
                co.user_id,
                co.content,
                co.created_at,
                p.title AS post_title
            FROM comments co
            JOIN posts p ON p.id = co.post_id
            WHERE co.user_id = $1
            ORDER BY co.created_at DESC, co.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.as_i64())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_with_post()).collect())
    }

    async fn count_by_user(&self, user_id: UserId) -> BlogResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE user_id = $1")
                .bind(user_id.as_i64())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn delete(&self, id: CommentId) -> BlogResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgBlogRepository {
    async fn list_all(&self) -> BlogResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_category()).collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> BlogResult<Option<Category>> {
        let row =
            sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|r| r.into_category()))
    }

    async fn find_by_name(&self, name: &str) -> BlogResult<Option<Category>> {
        let row =
            sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|r| r.into_category()))
    }

    async fn find_or_create_by_name(&self, name: &str) -> BlogResult<CategoryId> {
        // DO UPDATE instead of DO NOTHING so RETURNING always yields the
        // row, whether it was inserted or already present
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(CategoryId::from_i64(id))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    cover: Option<String>,
    tags: Option<Json<Vec<String>>>,
    views: i64,
    category_id: Option<i64>,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::from_i64(self.id),
            title: self.title,
            content: self.content,
            cover: self.cover,
            tags: self.tags.map(|Json(tags)| tags),
            views: self.views,
            category_id: self.category_id.map(CategoryId::from_i64),
            author_id: UserId::from_i64(self.author_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostViewRow {
    id: i64,
    title: String,
    content: String,
    cover: Option<String>,
    tags: Option<Json<Vec<String>>>,
    views: i64,
    category_id: Option<i64>,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
    category_name: Option<String>,
}

impl PostViewRow {
    fn into_view(self) -> PostView {
        PostView {
            post: Post {
                id: PostId::from_i64(self.id),
                title: self.title,
                content: self.content,
                cover: self.cover,
                tags: self.tags.map(|Json(tags)| tags),
                views: self.views,
                category_id: self.category_id.map(CategoryId::from_i64),
                author_id: UserId::from_i64(self.author_id),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_name: self.author_name,
            category_name: self.category_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    user_id: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: CommentId::from_i64(self.id),
            post_id: PostId::from_i64(self.post_id),
            user_id: UserId::from_i64(self.user_id),
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentViewRow {
    id: i64,
    post_id: i64,
    user_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    username: String,
}

impl CommentViewRow {
    fn into_view(self) -> CommentView {
        CommentView {
            comment: Comment {
                id: CommentId::from_i64(self.id),
                post_id: PostId::from_i64(self.post_id),
                user_id: UserId::from_i64(self.user_id),
                content: self.content,
                created_at: self.created_at,
            },
            username: self.username,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentWithPostRow {
    id: i64,
    post_id: i64,
    user_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    post_title: String,
}

impl CommentWithPostRow {
    fn into_with_post(self) -> CommentWithPost {
        CommentWithPost {
            comment: Comment {
                id: CommentId::from_i64(self.id),
                post_id: PostId::from_i64(self.post_id),
                user_id: UserId::from_i64(self.user_id),
                content: self.content,
                created_at: self.created_at,
            },
            post_title: self.post_title,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            id: CategoryId::from_i64(self.id),
            name: self.name,
        }
    }
}
