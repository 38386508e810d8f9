use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use mediadrop_core::models::{GalleryItem, MediaRecord, StandardMediaRecord};
use mediadrop_db::media::MAX_LIST_LIMIT;

use crate::auth::models::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Merge the two collections for display: custom records first in their
/// fetch order, then standard records in theirs. This is a fixed display
/// policy, not a timestamp sort; standard records are never interleaved
/// with custom ones.
fn merge_gallery(
    custom: Vec<MediaRecord>,
    standard: Vec<StandardMediaRecord>,
) -> Vec<GalleryItem> {
    custom
        .into_iter()
        .map(GalleryItem::from)
        .chain(standard.into_iter().map(GalleryItem::from))
        .collect()
}

/// Fetch the full gallery: both collections, fetched concurrently and
/// capped at 100 items each, merged custom-first.
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = "gallery",
    responses(
        (status = 200, description = "Merged media list", body = [GalleryItem]),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %current_user.id, operation = "gallery"))]
pub async fn get_gallery(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
) -> Result<impl IntoResponse, HttpAppError> {
    let (custom, standard) = tokio::try_join!(
        state.media_repository.list_custom(MAX_LIST_LIMIT),
        state.media_repository.list_standard(MAX_LIST_LIMIT),
    )?;

    let items = merge_gallery(custom, standard);
    tracing::debug!(count = items.len(), "Gallery assembled");

    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn custom(alt: &str) -> MediaRecord {
        MediaRecord {
            id: Uuid::new_v4(),
            filename: format!("{}.png", alt),
            alt: alt.to_string(),
            url: format!("/uploads/{}.png", alt),
            mime_type: "image/png".to_string(),
            filesize: 1,
            width: 0,
            height: 0,
            is_video: false,
            created_at: Utc::now(),
        }
    }

    fn standard(alt: &str) -> StandardMediaRecord {
        StandardMediaRecord {
            id: Uuid::new_v4(),
            filename: format!("{}.png", alt),
            alt: alt.to_string(),
            url: format!("/uploads/{}.png", alt),
            mime_type: "image/png".to_string(),
            filesize: 1,
            width: 0,
            height: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn merge_puts_custom_first_and_preserves_fetch_order() {
        let merged = merge_gallery(
            vec![custom("c1"), custom("c2"), custom("c3")],
            vec![standard("s1"), standard("s2")],
        );
        let alts: Vec<&str> = merged.iter().map(|m| m.alt.as_str()).collect();
        assert_eq!(alts, vec!["c1", "c2", "c3", "s1", "s2"]);
        assert_eq!(merged.len(), 5);
    }

    #[test]
    fn merge_handles_empty_sources() {
        assert!(merge_gallery(vec![], vec![]).is_empty());

        let merged = merge_gallery(vec![], vec![standard("s1")]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].is_video, None);
    }
}
