//! Application state.
//!
//! One state struct shared across handlers via `State<Arc<AppState>>`;
//! the service is small enough that sub-state extraction would add noise.

use mediadrop_core::Config;
use mediadrop_db::{MediaRepository, SessionRepository, UserRepository};
use mediadrop_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub media_repository: MediaRepository,
    pub user_repository: UserRepository,
    pub session_repository: SessionRepository,
    pub storage: Arc<dyn Storage>,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
