use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mediadrop_core::models::{UserResponse, UserRole};
use mediadrop_core::policy::{evaluate, Action, Resource};
use mediadrop_core::AppError;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::models::CurrentUser;
use crate::auth::password::hash_password;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to the regular user role when omitted.
    pub role: Option<UserRole>,
}

fn require(decision: mediadrop_core::policy::Decision) -> Result<(), HttpAppError> {
    if decision.is_allowed() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Not permitted".to_string()).into())
    }
}

/// Create a user account. Admin only.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request or duplicate email", body = ErrorResponse),
        (status = 403, description = "Not permitted", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, body), fields(user_id = %current_user.id, operation = "create_user"))]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    require(evaluate(
        current_user.role,
        current_user.id,
        Action::Create,
        Resource::User(None),
    ))?;

    if body.password.is_empty() {
        return Err(AppError::InvalidInput("Password must not be empty".to_string()).into());
    }

    let password_hash = hash_password(&body.password)?;
    let role = body.role.unwrap_or(UserRole::User);

    let user = state
        .user_repository
        .create(&body.name, &body.email, &password_hash, role)
        .await?;

    tracing::info!(created_user_id = %user.id, role = %user.role, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// List all user accounts. Admin only.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "User list", body = [UserResponse]),
        (status = 403, description = "Not permitted", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %current_user.id))]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
) -> Result<impl IntoResponse, HttpAppError> {
    require(evaluate(
        current_user.role,
        current_user.id,
        Action::Read,
        Resource::User(None),
    ))?;

    let users = state.user_repository.list().await?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

/// Fetch one user account: admins may fetch anyone, users only themselves.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 403, description = "Not permitted", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %current_user.id))]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    require(evaluate(
        current_user.role,
        current_user.id,
        Action::Read,
        Resource::User(Some(id)),
    ))?;

    let user = state
        .user_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}
