//! Register Use Case
//!
//! Creates a new account: validates the fields, checks uniqueness of
//! username and email, hashes the password and persists the user.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Register use case input
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

/// Register use case output
#[derive(Debug, Clone)]
pub struct RegisterOutput {
    pub user_id: i64,
    pub username: String,
    pub email: String,
}

/// Register use case
pub struct RegisterUseCase<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let username = UserName::new(input.username)?;
        let email = Email::new(input.email)?;

        // Uniqueness is checked before the expensive hash
        if self.repo.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken);
        }
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(format!("Password hashing failed: {e}")))?;

        let new_user = NewUser {
            username,
            email,
            password_hash,
            avatar: input.avatar,
        };
        let user_id = self.repo.create(&new_user).await?;

        tracing::info!(user_id = user_id.as_i64(), "User registered");

        Ok(RegisterOutput {
            user_id: user_id.as_i64(),
            username: new_user.username.as_str().to_string(),
            email: new_user.email.as_str().to_string(),
        })
    }
}
