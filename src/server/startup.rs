use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    cache::{AppCache, RedisStore},
    config::Config,
    error::AppError,
    integration::{
        notifier::{HttpNotifier, LogNotifier, Notifier},
        translator::{OpenAiTranslator, Translator},
    },
};

/// Initialises `tracing` output filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before any handler touches it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the cache: redis when `REDIS_URL` is set, in-process otherwise.
pub async fn connect_cache(config: &Config) -> Result<AppCache, AppError> {
    match &config.redis_url {
        Some(url) => {
            let store = RedisStore::connect(url).await?;
            tracing::info!("Using redis cache");
            Ok(AppCache::new(Arc::new(store)))
        }
        None => {
            tracing::info!("Using in-process cache");
            Ok(AppCache::memory())
        }
    }
}

/// Creates the HTTP client used by the push and translation wrappers.
///
/// Redirects are disabled so requests only reach the configured hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Push gateway wrapper, or a logging stand-in when no endpoint is configured.
pub fn setup_notifier(config: &Config, client: reqwest::Client) -> Arc<dyn Notifier> {
    match &config.push_endpoint {
        Some(endpoint) => Arc::new(HttpNotifier::new(
            client,
            endpoint.clone(),
            config.push_server_key.clone(),
        )),
        None => {
            tracing::warn!("PUSH_ENDPOINT not set, notifications will only be logged");
            Arc::new(LogNotifier)
        }
    }
}

pub fn setup_translator(config: &Config, client: reqwest::Client) -> Option<Arc<dyn Translator>> {
    let api_key = config.translation_api_key.clone()?;

    Some(Arc::new(OpenAiTranslator::new(
        client,
        config.translation_endpoint.clone(),
        api_key,
        config.translation_model.clone(),
    )))
}
