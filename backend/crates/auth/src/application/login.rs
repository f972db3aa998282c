//! Login Use Case
//!
//! Verifies a username/password pair and issues a signed token. Every
//! failure mode (unknown username, wrong password) returns the same
//! `InvalidCredentials` error so responses do not reveal whether the
//! account exists.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Login use case input
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login use case output
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub token: String,
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<R: UserRepository> {
    repo: Arc<R>,
    tokens: TokenService,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens: TokenService::new(config),
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A malformed username cannot match any account; collapse it
        // into the same credential failure
        let username =
            UserName::new(input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;
        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.identity())?;

        tracing::info!(user_id = user.id.as_i64(), "User logged in");

        Ok(LoginOutput { token, user })
    }
}
