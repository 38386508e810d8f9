use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use mediadrop_core::models::{MediaRecord, StandardMediaRecord};
use mediadrop_db::media::MAX_LIST_LIMIT;
use serde::Deserialize;

use crate::auth::models::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    limit: Option<i64>,
}

impl ListQuery {
    fn limit(&self) -> i64 {
        self.limit.unwrap_or(MAX_LIST_LIMIT)
    }
}

/// List custom media, newest first.
#[utoipa::path(
    get,
    path = "/api/custom-media",
    tag = "media",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum items, capped at 100")
    ),
    responses(
        (status = 200, description = "Custom media list", body = [MediaRecord]),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %current_user.id))]
pub async fn list_custom_media(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.media_repository.list_custom(query.limit()).await?;
    Ok(Json(records))
}

/// List standard media. Result order is unspecified.
#[utoipa::path(
    get,
    path = "/api/media",
    tag = "media",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum items, capped at 100")
    ),
    responses(
        (status = 200, description = "Standard media list", body = [StandardMediaRecord]),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %current_user.id))]
pub async fn list_standard_media(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.media_repository.list_standard(query.limit()).await?;
    Ok(Json(records))
}
