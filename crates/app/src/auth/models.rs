//! Token Models

use jiff::Timestamp;
use uuid::Uuid;

use crate::domain::users::records::UserUuid;

/// Owner and verifier of a token that is neither expired nor revoked.
#[derive(Debug, Clone)]
pub(crate) struct LiveToken {
    pub owner: UserUuid,
    pub verifier: String,
}

/// Stored token, without its secret.
#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub uuid: Uuid,
    pub owner: UserUuid,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// Whether a token still authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Active,
    Expired(Timestamp),
    Revoked(Timestamp),
}

impl TokenRecord {
    /// Status at `now`. Revocation wins over expiry.
    #[must_use]
    pub fn status(&self, now: Timestamp) -> TokenStatus {
        match (self.revoked_at, self.expires_at) {
            (Some(revoked_at), _) => TokenStatus::Revoked(revoked_at),
            (None, Some(expires_at)) if expires_at <= now => TokenStatus::Expired(expires_at),
            _ => TokenStatus::Active,
        }
    }
}

/// A freshly issued token. `token` is the only copy of the secret.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub record: TokenRecord,
}
