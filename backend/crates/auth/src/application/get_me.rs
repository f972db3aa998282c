//! Get Me Use Case
//!
//! Loads the profile of the authenticated user.

use std::sync::Arc;

use crate::domain::entity::{Identity, User};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Get me use case
pub struct GetMeUseCase<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> GetMeUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the user behind a verified identity
    ///
    /// `UserNotFound` here means a token outlived its account row, which
    /// should not happen while accounts cannot be deleted.
    pub async fn execute(&self, identity: &Identity) -> AuthResult<User> {
        self.repo
            .find_by_id(identity.id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
