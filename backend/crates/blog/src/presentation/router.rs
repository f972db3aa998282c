//! Blog Routers
//!
//! One router per resource area, meant to be nested by the binary under
//! `/api/posts`, `/api/categories`, `/api/comments` and `/api/upload`.
//! Protected routes go through the auth gateway from the auth crate.

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::presentation::middleware::{AuthGatewayState, require_auth};

use crate::application::config::BlogConfig;
use crate::domain::repository::{CategoryRepository, CommentRepository, PostRepository};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Slack over the upload limit for multipart framing overhead
const UPLOAD_BODY_LIMIT_SLACK: usize = 64 * 1024;

fn gateway(auth_config: &Arc<AuthConfig>) -> AuthGatewayState {
    AuthGatewayState::new(auth_config.clone())
}

/// Create the posts router with PostgreSQL repository
pub fn posts_router(
    repo: PgBlogRepository,
    blog_config: Arc<BlogConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router {
    posts_router_generic(repo, blog_config, auth_config)
}

/// Create a generic posts router for any repository implementation
pub fn posts_router_generic<R>(
    repo: R,
    blog_config: Arc<BlogConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
        config: blog_config,
    };

    let public = Router::new()
        .route("/", get(handlers::list_posts::<R>))
        .route("/{id}", get(handlers::get_post::<R>));

    let protected = Router::new()
        .route("/", post(handlers::create_post::<R>))
        .route(
            "/{id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            gateway(&auth_config),
            require_auth,
        ));

    public.merge(protected).with_state(state)
}

/// Create the categories router with PostgreSQL repository
pub fn categories_router(repo: PgBlogRepository, blog_config: Arc<BlogConfig>) -> Router {
    categories_router_generic(repo, blog_config)
}

/// Create a generic categories router for any repository implementation
pub fn categories_router_generic<R>(repo: R, blog_config: Arc<BlogConfig>) -> Router
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
        config: blog_config,
    };

    Router::new()
        .route("/", get(handlers::list_categories::<R>))
        .with_state(state)
}

/// Create the comments router with PostgreSQL repository
pub fn comments_router(
    repo: PgBlogRepository,
    blog_config: Arc<BlogConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router {
    comments_router_generic(repo, blog_config, auth_config)
}

/// Create a generic comments router for any repository implementation
///
/// `/my` is a literal route and wins over `/{id}`, so the caller's own
/// listing never collides with the per-post listing.
pub fn comments_router_generic<R>(
    repo: R,
    blog_config: Arc<BlogConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    R: PostRepository + CommentRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
        config: blog_config,
    };

    let public = Router::new().route("/{id}", get(handlers::list_comments::<R>));

    let protected = Router::new()
        .route("/", post(handlers::create_comment::<R>))
        .route("/my", get(handlers::my_comments::<R>))
        .route("/{id}", delete(handlers::delete_comment::<R>))
        .route_layer(axum::middleware::from_fn_with_state(
            gateway(&auth_config),
            require_auth,
        ));

    public.merge(protected).with_state(state)
}

/// Create the upload router
pub fn upload_router(blog_config: Arc<BlogConfig>, auth_config: Arc<AuthConfig>) -> Router {
    let body_limit = blog_config.max_upload_bytes + UPLOAD_BODY_LIMIT_SLACK;

    Router::new()
        .route("/image", post(handlers::upload_image))
        .route_layer(axum::middleware::from_fn_with_state(
            gateway(&auth_config),
            require_auth,
        ))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(blog_config)
}
