//! Application setup and initialization
//!
//! All initialization logic lives here instead of main.rs so integration
//! tests can build the same router against their own state.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::Result;
use mediadrop_core::Config;
use mediadrop_db::{MediaRepository, SessionRepository, UserRepository};
use mediadrop_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let pool = database::setup_database(&config).await?;

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.upload_dir.clone(), config.uploads_base_url())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to initialize storage: {}", e))?,
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        pool: pool.clone(),
        media_repository: MediaRepository::new(pool.clone()),
        user_repository: UserRepository::new(pool.clone()),
        session_repository: SessionRepository::new(pool),
        storage,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
