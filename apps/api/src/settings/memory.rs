use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::llm_client::providers::LlmProvider;
use crate::models::settings::{ApiKeys, Settings, SettingsKey};
use crate::settings::{SettingsError, SettingsStore};

/// Process-local store. Used when no Redis URL is configured, and in tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    inner: RwLock<Settings>,
}

impl MemorySettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, keys: &[SettingsKey]) -> Result<Settings, SettingsError> {
        Ok(self.inner.read().await.select(keys))
    }

    async fn set(&self, partial: Settings) -> Result<(), SettingsError> {
        self.inner.write().await.merge(partial);
        Ok(())
    }

    async fn set_api_key(&self, provider: LlmProvider, key: String) -> Result<(), SettingsError> {
        let mut settings = self.inner.write().await;
        settings
            .api_keys
            .get_or_insert_with(ApiKeys::default)
            .set(provider, key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::Preferences;

    #[tokio::test]
    async fn test_set_then_get_round_trips_selected_keys() {
        let store = MemorySettingsStore::default();
        store
            .set(Settings {
                selected_tier: Some("premium".to_string()),
                preferences: Some(Preferences {
                    auto_insert: Some(false),
                    default_tone: None,
                }),
                ..Default::default()
            })
            .await
            .unwrap();

        let all = store.get(&SettingsKey::ALL).await.unwrap();
        assert_eq!(all.selected_tier.as_deref(), Some("premium"));
        assert!(all.api_keys.is_none());

        let tier_only = store.get(&[SettingsKey::SelectedTier]).await.unwrap();
        assert!(tier_only.preferences.is_none());
    }

    #[tokio::test]
    async fn test_partial_set_leaves_other_keys() {
        let store = MemorySettingsStore::new(Settings {
            selected_tier: Some("budget".to_string()),
            ..Default::default()
        });
        store
            .set(Settings {
                preferences: Some(Preferences::default()),
                ..Default::default()
            })
            .await
            .unwrap();

        let all = store.get(&SettingsKey::ALL).await.unwrap();
        assert_eq!(all.selected_tier.as_deref(), Some("budget"));
        assert!(all.preferences.is_some());
    }

    #[tokio::test]
    async fn test_set_api_key_merges_under_one_guard() {
        let store = MemorySettingsStore::new(Settings {
            api_keys: Some(ApiKeys {
                openai: Some("sk-openai".to_string()),
                anthropic: None,
            }),
            selected_tier: Some("budget".to_string()),
            ..Default::default()
        });
        store
            .set_api_key(LlmProvider::Anthropic, "sk-ant".to_string())
            .await
            .unwrap();

        let all = store.get(&SettingsKey::ALL).await.unwrap();
        assert_eq!(all.api_keys().openai.as_deref(), Some("sk-openai"));
        assert_eq!(all.api_keys().anthropic.as_deref(), Some("sk-ant"));
        assert_eq!(all.selected_tier.as_deref(), Some("budget"));
    }
}
