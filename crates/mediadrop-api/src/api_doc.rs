//! OpenAPI documentation, served at /api/openapi.json and browsable at /docs.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use mediadrop_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediadrop API",
        version = "0.1.0",
        description = "Self-hosted media sharing: authenticated uploads, a merged gallery over two media collections, and share links. All endpoints live under /api/."
    ),
    paths(
        handlers::upload::upload_media,
        handlers::gallery::get_gallery,
        handlers::media_list::list_custom_media,
        handlers::media_list::list_standard_media,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::me,
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::share::share_info,
    ),
    components(schemas(
        models::MediaRecord,
        models::StandardMediaRecord,
        models::GalleryItem,
        models::UserResponse,
        models::UserRole,
        handlers::auth::LoginRequest,
        handlers::auth::LoginResponse,
        handlers::users::CreateUserRequest,
        handlers::share::ShareResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "uploads", description = "File upload"),
        (name = "gallery", description = "Merged media gallery"),
        (name = "media", description = "Per-collection listings"),
        (name = "auth", description = "Session authentication"),
        (name = "users", description = "User management"),
        (name = "share", description = "App sharing")
    )
)]
pub struct ApiDoc;
