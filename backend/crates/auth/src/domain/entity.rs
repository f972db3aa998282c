//! User Entity and Identity
//!
//! `User` is the persisted account row. `Identity` is the authenticated
//! principal decoded from a verified token; it never carries credentials.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName};

/// User entity
///
/// The password hash is the only mutable credential field; everything
/// else is fixed at registration. Users are never deleted in-scope.
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub id: UserId,
    /// Username (unique, for login and display)
    pub username: UserName,
    /// Email (unique)
    pub email: Email,
    /// Argon2id PHC hash
    pub password_hash: HashedPassword,
    /// Optional avatar URL
    pub avatar: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// A user about to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub avatar: Option<String>,
}

/// The authenticated principal derived from a verified token
///
/// Attached to request extensions by the auth gateway. Ownership checks
/// compare `Identity::id` against the stored owner id, never the
/// username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
}

impl User {
    /// The identity this user authenticates as
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            username: self.username.as_str().to_string(),
        }
    }
}
