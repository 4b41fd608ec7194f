mod analysis;
mod config;
mod errors;
mod extraction;
mod generation;
mod llm_client;
mod models;
mod routes;
mod settings;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::providers::{LlmProvider, ProviderTable};
use crate::llm_client::ProviderRouter;
use crate::routes::build_router;
use crate::settings::memory::MemorySettingsStore;
use crate::settings::redis_store::RedisSettingsStore;
use crate::settings::{save_api_key, SettingsStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EngageIQ API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize settings store
    let settings = build_settings_store(&config).await?;

    // Initialize provider router
    let table = ProviderTable::standard();
    let router = ProviderRouter::new(table, config.endpoints(), config.llm_timeout())?;
    info!(
        "Provider router initialized (default tier: {}, timeout: {}s)",
        config.default_tier, config.llm_timeout_secs
    );

    // Build app state
    let state = AppState {
        router,
        settings,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // extension content scripts call from the feed origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis when `REDIS_URL` is set, else in-memory. Keys from the environment
/// are saved into whichever store is picked.
async fn build_settings_store(config: &Config) -> Result<Arc<dyn SettingsStore>> {
    let store: Arc<dyn SettingsStore> = match &config.redis_url {
        Some(url) => {
            let store = RedisSettingsStore::connect(url).await?;
            info!("Settings store: redis");
            Arc::new(store)
        }
        None => {
            info!("Settings store: in-memory");
            Arc::new(MemorySettingsStore::default())
        }
    };

    let seeds = [
        (LlmProvider::OpenAi, &config.openai_api_key),
        (LlmProvider::Anthropic, &config.anthropic_api_key),
    ];
    for (provider, key) in seeds {
        if let Some(key) = key {
            save_api_key(store.as_ref(), provider, key.clone()).await?;
            info!("Seeded {} API key from environment", provider.display_name());
        }
    }

    Ok(store)
}
