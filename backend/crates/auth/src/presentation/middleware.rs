//! Auth Gateway Middleware
//!
//! Verifies the `Authorization: Bearer` token on protected routes and
//! attaches the decoded `Identity` to request extensions. Verification
//! is pure computation over the configured secret; no store lookup.
//!
//! Status mapping:
//! - no credential at all        -> 401 Unauthorized
//! - bad signature or malformed  -> 403 Forbidden
//! - expired                     -> 403 Forbidden

use axum::body::Body;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::error::AuthError;

/// Gateway state for protected routes
#[derive(Clone)]
pub struct AuthGatewayState {
    pub config: Arc<AuthConfig>,
}

impl AuthGatewayState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_auth(
    axum::extract::State(state): axum::extract::State<AuthGatewayState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    // Token values are never logged, even on failure
    let token = match bearer_token(req.headers()) {
        Some(t) => t,
        None => return Err(AuthError::MissingCredential.into_response()),
    };

    let identity = TokenService::new(state.config.clone())
        .verify(&token)
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn bearer_token(headers: &header::HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
