use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ShareResponse {
    /// Public URL of this deployment, for link sharing and QR rendering.
    pub url: String,
}

/// Return the public URL of the app. QR image generation is left to the
/// caller.
#[utoipa::path(
    get,
    path = "/api/share",
    tag = "share",
    responses(
        (status = 200, description = "Share link info", body = ShareResponse)
    )
)]
pub async fn share_info(State(state): State<Arc<AppState>>) -> Json<ShareResponse> {
    Json(ShareResponse {
        url: state.config.public_base_url.clone(),
    })
}
