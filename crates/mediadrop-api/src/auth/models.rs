use crate::error::ErrorResponse;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::Json;
use chrono::{DateTime, Utc};
use mediadrop_core::models::{User, UserResponse, UserRole};
use uuid::Uuid;

/// Authenticated user for the current request, resolved by the session
/// middleware and stored in request extensions. Handlers receive it as an
/// extractor, so there is no global session state.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        CurrentUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<CurrentUser> for UserResponse {
    fn from(user: CurrentUser) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Raw session token for the current request, kept alongside [`CurrentUser`]
/// so logout can invalidate the session it arrived on.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

// Implement FromRequestParts for CurrentUser to work with Multipart.
// Extension cannot be used with Multipart, so we extract directly from request parts.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse {
                        error: "Missing authenticated user".to_string(),
                        details: None,
                        error_type: None,
                        code: "UNAUTHORIZED".to_string(),
                        recoverable: false,
                        suggested_action: Some("Log in and retry".to_string()),
                    }),
                )
            })
    }
}
