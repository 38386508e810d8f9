use crate::auth::models::{CurrentUser, SessionToken};
use crate::auth::session;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use mediadrop_core::AppError;
use std::sync::Arc;

/// Resolve the session cookie to a user and store it in request extensions.
///
/// Requests without a valid session never reach protected handlers; the
/// missing-cookie case is rejected before any database access.
pub async fn session_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match session::token_from_headers(request.headers()) {
        Some(token) => token,
        None => {
            return HttpAppError(AppError::Unauthorized("Not logged in".to_string()))
                .into_response();
        }
    };

    let digest = session::digest_token(&token);
    match state.session_repository.find_user(&digest).await {
        Ok(Some(user)) => {
            tracing::debug!(user_id = %user.id, "Session resolved");
            request.extensions_mut().insert(CurrentUser::from(user));
            request.extensions_mut().insert(SessionToken(token));
            next.run(request).await
        }
        Ok(None) => HttpAppError(AppError::Unauthorized(
            "Session expired or invalid".to_string(),
        ))
        .into_response(),
        Err(e) => HttpAppError::from(e).into_response(),
    }
}
