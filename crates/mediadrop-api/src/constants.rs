//! API-wide constants.

/// Prefix for all JSON API routes.
pub const API_PREFIX: &str = "/api";

/// Name of the session cookie set on login.
pub const SESSION_COOKIE: &str = "mediadrop_session";

/// URL path the upload directory is served under.
pub const UPLOADS_PATH: &str = "/uploads";
