use std::collections::HashMap;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::llm_client::providers::LlmProvider;
use crate::models::settings::{ApiKeys, Settings, SettingsKey};
use crate::settings::{SettingsError, SettingsStore};

const KEY_PREFIX: &str = "engageiq:settings:";

/// Redis-backed store: a hash for API keys, one JSON string for each other
/// top-level settings key.
#[derive(Clone)]
pub struct RedisSettingsStore {
    conn: MultiplexedConnection,
}

impl RedisSettingsStore {
    pub async fn connect(redis_url: &str) -> Result<Self, SettingsError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Redis settings store connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl SettingsStore for RedisSettingsStore {
    async fn get(&self, keys: &[SettingsKey]) -> Result<Settings, SettingsError> {
        let mut conn = self.conn.clone();
        let mut settings = Settings::default();

        for &key in keys {
            if key == SettingsKey::ApiKeys {
                let fields: HashMap<String, String> = conn.hgetall(redis_key(key)).await?;
                if !fields.is_empty() {
                    settings.api_keys = Some(api_keys_from_fields(&fields));
                }
                continue;
            }

            let raw: Option<String> = conn.get(redis_key(key)).await?;
            let Some(raw) = raw else {
                continue;
            };
            match key {
                SettingsKey::SelectedTier => settings.selected_tier = Some(decode(key, &raw)?),
                SettingsKey::Preferences => settings.preferences = Some(decode(key, &raw)?),
                SettingsKey::ApiKeys => {}
            }
        }

        Ok(settings)
    }

    async fn set(&self, partial: Settings) -> Result<(), SettingsError> {
        let mut pipe = redis::pipe();
        pipe.atomic();

        if let Some(api_keys) = &partial.api_keys {
            let hash = redis_key(SettingsKey::ApiKeys);
            pipe.del(&hash).ignore();
            for provider in LlmProvider::ALL {
                if let Some(key) = api_keys.get(provider) {
                    pipe.hset(&hash, provider.as_str(), key).ignore();
                }
            }
        }
        if let Some(tier) = &partial.selected_tier {
            pipe.set(redis_key(SettingsKey::SelectedTier), serde_json::to_string(tier)?)
                .ignore();
        }
        if let Some(preferences) = &partial.preferences {
            pipe.set(
                redis_key(SettingsKey::Preferences),
                serde_json::to_string(preferences)?,
            )
            .ignore();
        }

        let mut conn = self.conn.clone();
        pipe.query_async::<_, ()>(&mut conn).await?;
        Ok(())
    }

    async fn set_api_key(&self, provider: LlmProvider, key: String) -> Result<(), SettingsError> {
        let mut conn = self.conn.clone();
        conn.hset::<_, _, _, ()>(redis_key(SettingsKey::ApiKeys), provider.as_str(), key)
            .await?;
        Ok(())
    }
}

/// API keys live in a hash, one field per provider, so a single-key save is
/// one `HSET`.
fn api_keys_from_fields(fields: &HashMap<String, String>) -> ApiKeys {
    let mut api_keys = ApiKeys::default();
    for provider in LlmProvider::ALL {
        if let Some(key) = fields.get(provider.as_str()) {
            api_keys.set(provider, key.clone());
        }
    }
    api_keys
}

fn redis_key(key: SettingsKey) -> String {
    format!("{KEY_PREFIX}{}", key.as_str())
}

fn decode<T: DeserializeOwned>(key: SettingsKey, raw: &str) -> Result<T, SettingsError> {
    serde_json::from_str(raw).map_err(|source| SettingsError::Corrupt {
        key: key.as_str(),
        source,
    })
}
