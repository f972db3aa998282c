//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Multipart, Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::domain::entity::Identity;
use kernel::id::{CommentId, PostId};

use crate::application::category::{CategoryRef, ListCategoriesUseCase};
use crate::application::comments::{
    CreateCommentInput, CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase,
    MyCommentsUseCase,
};
use crate::application::config::BlogConfig;
use crate::application::posts::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsInput,
    ListPostsUseCase, UpdatePostInput, UpdatePostUseCase,
};
use crate::application::upload::{ImageUpload, UploadImageUseCase};
use crate::domain::repository::{CategoryRepository, CommentRepository, PostRepository};
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{
    CategoryDto, CommentDto, CreateCommentRequest, CreateCommentResponse, CreatePostRequest,
    CreatePostResponse, ListPostsQuery, ListPostsResponse, MyCommentDto, MyCommentsQuery,
    MyCommentsResponse, PostDto, UpdatePostRequest, UploadResponse,
};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<BlogConfig>,
}

// ============================================================================
// Posts
// ============================================================================

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<CreatePostRequest>,
) -> BlogResult<(StatusCode, Json<CreatePostResponse>)>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let input = CreatePostInput {
        title: req.title,
        content: req.content,
        cover: req.cover,
        tags: req.tags,
        category: req.category.map(CategoryRef::from),
    };

    let id = use_case.execute(&identity, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            post_id: id.as_i64(),
        }),
    ))
}

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<BlogAppState<R>>,
    Query(query): Query<ListPostsQuery>,
) -> BlogResult<Json<ListPostsResponse>>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());

    let input = ListPostsInput {
        page: query.page,
        page_size: query.page_size,
        category: query.category.as_deref().map(CategoryRef::parse),
        keyword: query.keyword,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(ListPostsResponse {
        total: output.total,
        page: output.page,
        page_size: output.page_size,
        posts: output.posts.into_iter().map(PostDto::from).collect(),
    }))
}

/// GET /api/posts/{id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<i64>,
) -> BlogResult<Json<PostDto>>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());

    let view = use_case.execute(PostId::from_i64(id)).await?;

    Ok(Json(PostDto::from(view)))
}

/// PUT /api/posts/{id}
pub async fn update_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    let input = UpdatePostInput {
        title: req.title,
        content: req.content,
        cover: req.cover,
        tags: req.tags,
        category: req.category.map(CategoryRef::from),
    };

    use_case
        .execute(&identity, PostId::from_i64(id), input)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/posts/{id}
pub async fn delete_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case.execute(&identity, PostId::from_i64(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Categories
// ============================================================================

/// GET /api/categories
pub async fn list_categories<R>(
    State(state): State<BlogAppState<R>>,
) -> BlogResult<Json<Vec<CategoryDto>>>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCategoriesUseCase::new(state.repo.clone());

    let categories = use_case.execute().await?;

    Ok(Json(categories.into_iter().map(CategoryDto::from).collect()))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /api/comments
pub async fn create_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<CreateCommentRequest>,
) -> BlogResult<(StatusCode, Json<CreateCommentResponse>)>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateCommentUseCase::new(state.repo.clone());

    let input = CreateCommentInput {
        post_id: PostId::from_i64(req.post_id),
        content: req.content,
    };

    let id = use_case.execute(&identity, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCommentResponse {
            comment_id: id.as_i64(),
        }),
    ))
}

/// GET /api/comments/{postId}
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    Path(post_id): Path<i64>,
) -> BlogResult<Json<Vec<CommentDto>>>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCommentsUseCase::new(state.repo.clone());

    let comments = use_case.execute(PostId::from_i64(post_id)).await?;

    Ok(Json(comments.into_iter().map(CommentDto::from).collect()))
}

/// GET /api/comments/my
pub async fn my_comments<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<MyCommentsQuery>,
) -> BlogResult<Json<MyCommentsResponse>>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = MyCommentsUseCase::new(state.repo.clone());

    let output = use_case.execute(&identity, query.page, query.limit).await?;

    Ok(Json(MyCommentsResponse {
        total: output.total,
        page: output.page,
        limit: output.limit,
        total_pages: output.total_pages,
        comments: output.comments.into_iter().map(MyCommentDto::from).collect(),
    }))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCommentUseCase::new(state.repo.clone());

    use_case.execute(&identity, CommentId::from_i64(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Upload
// ============================================================================

/// POST /api/upload/image
///
/// Expects a multipart body with a single `image` field.
pub async fn upload_image(
    State(config): State<Arc<BlogConfig>>,
    Extension(_identity): Extension<Identity>,
    mut multipart: Multipart,
) -> BlogResult<(StatusCode, Json<UploadResponse>)> {
    let use_case = UploadImageUseCase::new(config);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BlogError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().map(|n| n.to_string());
        let content_type = field.content_type().map(|c| c.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| BlogError::Validation(format!("Failed to read upload: {e}")))?;

        let stored = use_case
            .execute(ImageUpload {
                file_name,
                content_type,
                data: data.to_vec(),
            })
            .await?;

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                url: stored.url,
                file_name: stored.file_name,
            }),
        ));
    }

    Err(BlogError::Validation(
        "Multipart field 'image' is required".to_string(),
    ))
}
