//! Route configuration and setup.

use crate::api_doc::ApiDoc;
use crate::auth::middleware::session_auth_middleware;
use crate::constants::{API_PREFIX, UPLOADS_PATH};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use mediadrop_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            &format!("{}/share", API_PREFIX),
            get(handlers::share::share_info),
        )
        .route(
            &format!("{}/auth/login", API_PREFIX),
            post(handlers::auth::login),
        );

    let protected_routes = Router::new()
        .route(
            &format!("{}/uploads", API_PREFIX),
            post(handlers::upload::upload_media),
        )
        .route(
            &format!("{}/gallery", API_PREFIX),
            get(handlers::gallery::get_gallery),
        )
        .route(
            &format!("{}/custom-media", API_PREFIX),
            get(handlers::media_list::list_custom_media),
        )
        .route(
            &format!("{}/media", API_PREFIX),
            get(handlers::media_list::list_standard_media),
        )
        .route(
            &format!("{}/users", API_PREFIX),
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route(
            &format!("{}/users/{{id}}", API_PREFIX),
            get(handlers::users::get_user),
        )
        .route(
            &format!("{}/auth/logout", API_PREFIX),
            post(handlers::auth::logout),
        )
        .route(&format!("{}/auth/me", API_PREFIX), get(handlers::auth::me))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session_auth_middleware,
        ));

    let app = public_routes
        .merge(protected_routes)
        .route(
            &format!("{}/openapi.json", API_PREFIX),
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new(format!("{}/openapi.json", API_PREFIX))
                .path("/docs")
                .into(),
        )
        .nest_service(UPLOADS_PATH, ServeDir::new(&config.upload_dir))
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    if config.cors_origins.is_empty() {
        // Same-origin deployment default: no credentials across origins.
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
