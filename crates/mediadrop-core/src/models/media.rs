use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// A record in the custom media collection, created by the upload endpoint.
///
/// Immutable after creation. `width` and `height` are always 0: no image
/// introspection is performed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct MediaRecord {
    pub id: Uuid,
    /// Original filename as supplied by the uploader.
    pub filename: String,
    pub alt: String,
    /// Public URL of the stored file, e.g. "/uploads/{uuid}.{ext}".
    pub url: String,
    pub mime_type: String,
    pub filesize: i64,
    pub width: i32,
    pub height: i32,
    pub is_video: bool,
    pub created_at: DateTime<Utc>,
}

/// A record in the standard media collection. Same shape as [`MediaRecord`]
/// minus the video flag; written outside this service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct StandardMediaRecord {
    pub id: Uuid,
    pub filename: String,
    pub alt: String,
    pub url: String,
    pub mime_type: String,
    pub filesize: i64,
    pub width: i32,
    pub height: i32,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new custom media record; id and timestamp are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewMediaRecord {
    pub filename: String,
    pub alt: String,
    pub url: String,
    pub mime_type: String,
    pub filesize: i64,
    pub width: i32,
    pub height: i32,
    pub is_video: bool,
}

/// Unified gallery entry. `is_video` is only present for records from the
/// custom collection; standard records never carry the flag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GalleryItem {
    pub id: Uuid,
    pub filename: String,
    pub alt: String,
    pub url: String,
    pub mime_type: String,
    pub filesize: i64,
    pub width: i32,
    pub height: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_video: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl From<MediaRecord> for GalleryItem {
    fn from(record: MediaRecord) -> Self {
        GalleryItem {
            id: record.id,
            filename: record.filename,
            alt: record.alt,
            url: record.url,
            mime_type: record.mime_type,
            filesize: record.filesize,
            width: record.width,
            height: record.height,
            is_video: Some(record.is_video),
            created_at: record.created_at,
        }
    }
}

impl From<StandardMediaRecord> for GalleryItem {
    fn from(record: StandardMediaRecord) -> Self {
        GalleryItem {
            id: record.id,
            filename: record.filename,
            alt: record.alt,
            url: record.url,
            mime_type: record.mime_type,
            filesize: record.filesize,
            width: record.width,
            height: record.height,
            is_video: None,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_record() -> MediaRecord {
        MediaRecord {
            id: Uuid::new_v4(),
            filename: "clip.mp4".to_string(),
            alt: "clip".to_string(),
            url: "/uploads/abc.mp4".to_string(),
            mime_type: "video/mp4".to_string(),
            filesize: 42,
            width: 0,
            height: 0,
            is_video: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn gallery_item_keeps_video_flag_for_custom_records() {
        let item = GalleryItem::from(custom_record());
        assert_eq!(item.is_video, Some(true));
    }

    #[test]
    fn gallery_item_has_no_video_flag_for_standard_records() {
        let record = StandardMediaRecord {
            id: Uuid::new_v4(),
            filename: "photo.jpg".to_string(),
            alt: "photo".to_string(),
            url: "/uploads/def.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            filesize: 7,
            width: 0,
            height: 0,
            created_at: Utc::now(),
        };
        let item = GalleryItem::from(record);
        assert_eq!(item.is_video, None);

        let json = serde_json::to_value(&item).expect("serialize");
        assert!(json.get("is_video").is_none());
    }
}
