//! Auth Errors

use thiserror::Error;

/// Why a presented access token did not resolve to a user.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Unknown, malformed, expired or revoked. Callers cannot tell which.
    #[error("access token rejected")]
    Rejected,

    #[error("token storage failed")]
    Sql(#[from] sqlx::Error),
}
