use mediadrop_core::models::{MediaRecord, NewMediaRecord, StandardMediaRecord};
use mediadrop_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Hard cap on items returned per collection, matching the gallery contract.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Repository for both media collections.
///
/// The custom collection is written by the upload endpoint and read
/// newest-first. The standard collection is read-only from this service
/// and listed in unspecified order.
#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one custom media record. Records are immutable after this.
    #[tracing::instrument(
        skip(self, record),
        fields(db.table = "custom_media", db.operation = "insert")
    )]
    pub async fn create_custom(&self, record: NewMediaRecord) -> Result<MediaRecord, AppError> {
        let id = Uuid::new_v4();

        let row: MediaRecord = sqlx::query_as::<Postgres, MediaRecord>(
            r#"
            INSERT INTO custom_media (
                id, filename, alt, url, mime_type, filesize, width, height, is_video
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&record.filename)
        .bind(&record.alt)
        .bind(&record.url)
        .bind(&record.mime_type)
        .bind(record.filesize)
        .bind(record.width)
        .bind(record.height)
        .bind(record.is_video)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// List custom media, newest first, capped at [`MAX_LIST_LIMIT`].
    #[tracing::instrument(
        skip(self),
        fields(db.table = "custom_media", db.operation = "select")
    )]
    pub async fn list_custom(&self, limit: i64) -> Result<Vec<MediaRecord>, AppError> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);
        let rows = sqlx::query_as::<Postgres, MediaRecord>(
            r#"
            SELECT * FROM custom_media
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// List standard media, capped at [`MAX_LIST_LIMIT`]. No ordering is
    /// applied; callers must not rely on the result order.
    #[tracing::instrument(skip(self), fields(db.table = "media", db.operation = "select"))]
    pub async fn list_standard(&self, limit: i64) -> Result<Vec<StandardMediaRecord>, AppError> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);
        let rows = sqlx::query_as::<Postgres, StandardMediaRecord>(
            r#"
            SELECT * FROM media
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
