use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mediadrop_core::models::{MediaRecord, NewMediaRecord};
use mediadrop_core::{classify_media, derive_alt_text, policy, split_extension, AppError};
use uuid::Uuid;

use crate::auth::models::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

struct UploadedFile {
    filename: String,
    content_type: String,
    data: Vec<u8>,
}

/// Upload one file.
///
/// Accepts a multipart body with a required `file` field and an optional
/// `alt` field. The file is written under a generated `{uuid}.{ext}` name
/// and one custom media record is created for it. The stored file is not
/// rolled back if the record insert fails.
///
/// # Errors
/// - `AppError::BadRequest` - no file present in the request
/// - `AppError::Storage` / `AppError::Database` - write or insert failure
#[utoipa::path(
    post,
    path = "/api/uploads",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File uploaded", body = MediaRecord),
        (status = 400, description = "No file provided", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(user_id = %current_user.id, operation = "upload_media")
)]
pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    if !policy::evaluate(
        current_user.role,
        current_user.id,
        policy::Action::Create,
        policy::Resource::CustomMedia,
    )
    .is_allowed()
    {
        return Err(AppError::Forbidden("Uploads not permitted".to_string()).into());
    }

    let mut file: Option<UploadedFile> = None;
    let mut alt: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file: {}", e)))?
                    .to_vec();
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    data,
                });
            }
            Some("alt") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read alt: {}", e)))?;
                alt = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    let (_, extension) = split_extension(&file.filename);
    let storage_key = format!("{}.{}", Uuid::new_v4(), extension);
    let filesize = file.data.len() as i64;

    let url = state
        .storage
        .upload(&storage_key, file.data)
        .await
        .map_err(HttpAppError::from)?;

    let alt = alt
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| derive_alt_text(&file.filename));

    let kind = classify_media(&file.content_type, &file.filename);

    // Width and height stay 0: no image introspection is performed.
    let record = state
        .media_repository
        .create_custom(NewMediaRecord {
            filename: file.filename,
            alt,
            url,
            mime_type: file.content_type,
            filesize,
            width: 0,
            height: 0,
            is_video: kind.is_video(),
        })
        .await?;

    tracing::info!(
        media_id = %record.id,
        filesize = record.filesize,
        is_video = record.is_video,
        "Media uploaded"
    );

    Ok((StatusCode::CREATED, Json(record)))
}
