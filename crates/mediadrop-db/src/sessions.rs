use chrono::{DateTime, Utc};
use mediadrop_core::models::User;
use mediadrop_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Repository for login sessions. Stores token digests, never raw tokens.
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(
        skip(self, token_digest),
        fields(db.table = "sessions", db.operation = "insert")
    )]
    pub async fn create(
        &self,
        token_digest: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (token_digest, user_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(token_digest)
        .bind(user_id)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Resolve a token digest to its user. Expired sessions resolve to None.
    #[tracing::instrument(
        skip(self, token_digest),
        fields(db.table = "sessions", db.operation = "select")
    )]
    pub async fn find_user(&self, token_digest: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<Postgres, User>(
            r#"
            SELECT u.*
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token_digest = $1 AND s.expires_at > now()
            "#,
        )
        .bind(token_digest)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(
        skip(self, token_digest),
        fields(db.table = "sessions", db.operation = "delete")
    )]
    pub async fn delete(&self, token_digest: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE token_digest = $1")
            .bind(token_digest)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove expired sessions. Returns the number of rows deleted.
    #[tracing::instrument(skip(self), fields(db.table = "sessions", db.operation = "delete"))]
    pub async fn delete_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
