use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::Utc;
use mediadrop_core::models::UserResponse;
use mediadrop_core::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::models::{CurrentUser, SessionToken};
use crate::auth::password::verify_password;
use crate::auth::session;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
}

fn set_cookie_response(body: Response, cookie: &str) -> Result<Response, HttpAppError> {
    let mut response = body;
    let value = HeaderValue::from_str(cookie)
        .map_err(|e| AppError::Internal(format!("Invalid cookie header: {}", e)))?;
    response.headers_mut().insert(header::SET_COOKIE, value);
    Ok(response)
}

/// Log in with email and password. Sets the session cookie and returns the
/// user, including its role so clients can branch on it.
///
/// Unknown email and wrong password are indistinguishable to the caller.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, body), fields(operation = "login"))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Response, HttpAppError> {
    let user = state
        .user_repository
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    if !verify_password(&body.password, &user.password_hash) {
        return Err(AppError::Unauthorized("Invalid email or password".to_string()).into());
    }

    let token = session::generate_token();
    let ttl_hours = state.config.session_ttl_hours;
    let expires_at = Utc::now() + chrono::Duration::hours(ttl_hours);

    state
        .session_repository
        .create(&session::digest_token(&token), user.id, expires_at)
        .await?;

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

    let cookie = session::session_cookie(&token, ttl_hours * 3600);
    let body = Json(LoginResponse { user: user.into() }).into_response();
    set_cookie_response(body, &cookie)
}

/// Log out: invalidate the session the request arrived on and clear the cookie.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, token), fields(user_id = %current_user.id, operation = "logout"))]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Extension(token): Extension<SessionToken>,
) -> Result<Response, HttpAppError> {
    state
        .session_repository
        .delete(&session::digest_token(&token.0))
        .await?;

    tracing::info!(user_id = %current_user.id, "User logged out");

    let body = Json(serde_json::json!({ "success": true })).into_response();
    set_cookie_response(body, &session::clear_session_cookie())
}

/// Return the authenticated user for the current session.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
pub async fn me(current_user: CurrentUser) -> Json<UserResponse> {
    Json(current_user.into())
}
