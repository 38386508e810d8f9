use mediadrop_core::models::{User, UserRole};
use mediadrop_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Repository for user accounts.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user. `password_hash` must already be an argon2 hash.
    /// A duplicate email surfaces as `AppError::BadRequest`.
    #[tracing::instrument(
        skip(self, password_hash),
        fields(db.table = "users", db.operation = "insert")
    )]
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        let id = Uuid::new_v4();

        let row = sqlx::query_as::<Postgres, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::BadRequest("Email already registered".to_string());
                }
            }
            AppError::Database(e)
        })?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select"))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<Postgres, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select"))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<Postgres, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select"))]
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<Postgres, User>("SELECT * FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
