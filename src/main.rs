mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, scheduler::cache_purge, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cache = startup::connect_cache(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let notifier = startup::setup_notifier(&config, http_client.clone());
    let translator = startup::setup_translator(&config, http_client);
    if translator.is_none() {
        tracing::warn!("TRANSLATION_API_KEY not set, translation endpoints will answer 503");
    }

    // Kept alive for the lifetime of the server.
    let _scheduler = cache_purge::start_scheduler(cache.clone()).await?;

    let bind_address = config.bind_address;
    let state = AppState::new(db, cache, notifier, translator, config);
    let app = server::router::router(state);

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", bind_address, e)))?;

    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
