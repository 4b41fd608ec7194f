//! Settings collaborator: async key-value store holding API keys, the
//! selected tier and UI preferences.
//!
//! The pipeline only reads `apiKeys` and `selectedTier`; persistence is the
//! store's business. `AppState` carries an `Arc<dyn SettingsStore>`, picked at
//! startup from config.

pub mod handlers;
pub mod memory;
pub mod redis_store;

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::providers::LlmProvider;
use crate::models::settings::{Settings, SettingsKey};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored value for '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads the requested top-level keys. Absent keys stay `None`.
    async fn get(&self, keys: &[SettingsKey]) -> Result<Settings, SettingsError>;

    /// Overwrites every top-level key present in `partial`.
    async fn set(&self, partial: Settings) -> Result<(), SettingsError>;

    /// Stores one provider key in a single store operation. Keys for other
    /// providers are untouched, even under concurrent writers.
    async fn set_api_key(&self, provider: LlmProvider, key: String) -> Result<(), SettingsError>;
}

/// Key for one provider, if configured.
pub async fn api_key(
    store: &dyn SettingsStore,
    provider: LlmProvider,
) -> Result<Option<String>, SettingsError> {
    let settings = store.get(&[SettingsKey::ApiKeys]).await?;
    Ok(settings.api_keys().get(provider).map(str::to_string))
}

/// Saves one provider key, keeping any keys already stored for other providers.
pub async fn save_api_key(
    store: &dyn SettingsStore,
    provider: LlmProvider,
    key: String,
) -> Result<(), SettingsError> {
    store.set_api_key(provider, key).await
}
