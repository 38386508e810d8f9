//! Mediadrop Database Library
//!
//! Postgres repositories for media records, users, and sessions. SQL
//! migrations live in the workspace `migrations/` directory and are
//! embedded via [`migrator`] so the API server can apply them on startup.

pub mod media;
pub mod sessions;
pub mod users;

pub use media::MediaRepository;
pub use sessions::SessionRepository;
pub use users::UserRepository;

/// Embedded migrator for the workspace migrations directory.
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("../../migrations")
}
