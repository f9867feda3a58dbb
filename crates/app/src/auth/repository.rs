//! Token Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    auth::{TokenRecord, models::LiveToken},
    domain::users::records::UserUuid,
};

const CREATE_TOKEN_SQL: &str = include_str!("sql/create_token.sql");
const FIND_LIVE_TOKEN_SQL: &str = include_str!("sql/find_live_token.sql");
const TOUCH_TOKEN_SQL: &str = include_str!("sql/touch_token.sql");
const REVOKE_TOKEN_SQL: &str = include_str!("sql/revoke_token.sql");
const LIST_TOKENS_SQL: &str = include_str!("sql/list_tokens.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgTokensRepository {
    pool: PgPool,
}

impl PgTokensRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_token(
        &self,
        uuid: Uuid,
        owner: UserUuid,
        verifier: &str,
        expires_at: Option<Timestamp>,
    ) -> Result<TokenRecord, sqlx::Error> {
        query_as::<Postgres, TokenRecord>(CREATE_TOKEN_SQL)
            .bind(uuid)
            .bind(owner.into_uuid())
            .bind(verifier)
            .bind(expires_at.map(SqlxTimestamp::from))
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_live_token(&self, uuid: Uuid) -> Result<Option<LiveToken>, sqlx::Error> {
        query_as::<Postgres, LiveToken>(FIND_LIVE_TOKEN_SQL)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn touch_token(&self, uuid: Uuid) -> Result<(), sqlx::Error> {
        query(TOUCH_TOKEN_SQL)
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map(|_| ())
    }

    pub(crate) async fn revoke_token(&self, uuid: Uuid) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, Uuid>(REVOKE_TOKEN_SQL)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map(|revoked| revoked.is_some())
    }

    pub(crate) async fn list_tokens(&self, owner: UserUuid) -> Result<Vec<TokenRecord>, sqlx::Error> {
        query_as::<Postgres, TokenRecord>(LIST_TOKENS_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&self.pool)
            .await
    }
}

fn timestamp(row: &PgRow, column: &str) -> sqlx::Result<Option<Timestamp>> {
    Ok(row
        .try_get::<Option<SqlxTimestamp>, _>(column)?
        .map(SqlxTimestamp::to_jiff))
}

impl<'r> FromRow<'r, PgRow> for LiveToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            owner: UserUuid::from_uuid(row.try_get("owner_uuid")?),
            verifier: row.try_get("verifier")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for TokenRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            owner: UserUuid::from_uuid(row.try_get("owner_uuid")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            last_used_at: timestamp(row, "last_used_at")?,
            expires_at: timestamp(row, "expires_at")?,
            revoked_at: timestamp(row, "revoked_at")?,
        })
    }
}
