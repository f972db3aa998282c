//! Token Service
//!
//! Issues and verifies stateless signed tokens. A token is the URL-safe
//! base64 of a JSON claims payload, a dot, and the URL-safe base64 of an
//! HMAC-SHA256 signature over the encoded payload:
//!
//! ```text
//! base64url({"id":1,"username":"alice","iat":...,"exp":...}) . base64url(sig)
//! ```
//!
//! Verification order matters: the signature is checked over the encoded
//! payload before anything is decoded, then the claims are decoded, then
//! expiry is compared against the clock. A token that fails the signature
//! is `TokenInvalid`; one that passes but is past `exp` is `TokenExpired`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::application::config::AuthConfig;
use crate::domain::entity::Identity;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// The structured data encoded and signed inside a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id
    pub id: i64,
    /// Username at issue time (display only; authorization uses `id`)
    pub username: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Stateless token issue/verify service
///
/// Pure computation over the configured secret; no I/O, no stored
/// session state.
#[derive(Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a signed token for the given identity
    pub fn issue(&self, identity: &Identity) -> AuthResult<String> {
        self.issue_at(identity, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        identity: &Identity,
        now: DateTime<Utc>,
    ) -> AuthResult<String> {
        let iat = now.timestamp();
        let claims = TokenClaims {
            id: identity.id.as_i64(),
            username: identity.username.clone(),
            iat,
            exp: iat + self.config.token_ttl_secs(),
        };

        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("Claims serialization failed: {e}")))?;
        let payload_b64 = platform::crypto::to_base64url(&payload);

        let mut mac = HmacSha256::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            payload_b64,
            platform::crypto::to_base64url(&signature)
        ))
    }

    /// Verify a token and return the identity it encodes
    pub fn verify(&self, token: &str) -> AuthResult<Identity> {
        self.verify_at(token, Utc::now())
    }

    pub(crate) fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<Identity> {
        let Some((payload_b64, signature_b64)) = token.split_once('.') else {
            return Err(AuthError::TokenInvalid);
        };

        // Signature integrity first, over the still-encoded payload
        let signature = platform::crypto::from_base64url(signature_b64)
            .map_err(|_| AuthError::TokenInvalid)?;

        let mut mac = HmacSha256::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::TokenInvalid)?;

        // Only now decode the claims
        let payload =
            platform::crypto::from_base64url(payload_b64).map_err(|_| AuthError::TokenInvalid)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::TokenInvalid)?;

        // Expiry last
        if now.timestamp() >= claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Ok(Identity {
            id: claims.id.into(),
            username: claims.username,
        })
    }
}
