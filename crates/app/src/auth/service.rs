//! Auth Service

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    auth::{
        AccessToken, AuthServiceError, IssuedToken, TokenRecord, repository::PgTokensRepository,
    },
    domain::users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgTokensRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgTokensRepository::new(pool),
        }
    }

    /// Issue a token for `owner`, optionally expiring at `expires_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Sql`] when the token cannot be stored.
    pub async fn issue_token(
        &self,
        owner: UserUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedToken, AuthServiceError> {
        let token = AccessToken::generate();

        let record = self
            .repository
            .create_token(token.uuid(), owner, &token.verifier(owner), expires_at)
            .await?;

        debug!(token_uuid = %record.uuid, owner = %owner, "issued access token");

        Ok(IssuedToken {
            token: token.reveal(),
            record,
        })
    }

    /// Every token `owner` was ever issued, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Sql`] when the query fails.
    pub async fn list_tokens(&self, owner: UserUuid) -> Result<Vec<TokenRecord>, AuthServiceError> {
        Ok(self.repository.list_tokens(owner).await?)
    }

    /// Revoke a token. Returns `false` when it was already revoked or never
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Sql`] when the update fails.
    pub async fn revoke_token(&self, uuid: Uuid) -> Result<bool, AuthServiceError> {
        Ok(self.repository.revoke_token(uuid).await?)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate(&self, presented: &str) -> Result<UserUuid, AuthServiceError> {
        let token = presented.parse::<AccessToken>().map_err(|error| {
            debug!(%error, "unparseable access token");

            AuthServiceError::Rejected
        })?;

        let live = self
            .repository
            .find_live_token(token.uuid())
            .await?
            .ok_or(AuthServiceError::Rejected)?;

        if !token.matches(live.owner, &live.verifier) {
            warn!(token_uuid = %token.uuid(), "access token secret mismatch");

            return Err(AuthServiceError::Rejected);
        }

        if let Err(error) = self.repository.touch_token(token.uuid()).await {
            debug!(%error, "failed to record access token use");
        }

        Ok(live.owner)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a presented access token to the user that owns it.
    async fn authenticate(&self, presented: &str) -> Result<UserUuid, AuthServiceError>;
}
