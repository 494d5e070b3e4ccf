//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database handle
//! is a pool, the cache and ports sit behind `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    cache::AppCache,
    config::Config,
    integration::{notifier::Notifier, translator::Translator},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Response cache (in-process or redis).
    pub cache: AppCache,

    /// Push notification port.
    pub notifier: Arc<dyn Notifier>,

    /// Translation port; `None` when no API key is configured.
    pub translator: Option<Arc<dyn Translator>>,

    /// Keys for the auth middleware and defaults used by services.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cache` - Response cache handle
    /// - `notifier` - Push notification port
    /// - `translator` - Optional translation port
    /// - `config` - Loaded configuration
    pub fn new(
        db: DatabaseConnection,
        cache: AppCache,
        notifier: Arc<dyn Notifier>,
        translator: Option<Arc<dyn Translator>>,
        config: Config,
    ) -> Self {
        Self {
            db,
            cache,
            notifier,
            translator,
            config: Arc::new(config),
        }
    }
}
