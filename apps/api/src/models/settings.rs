use serde::{Deserialize, Serialize};

use crate::llm_client::providers::LlmProvider;
use crate::models::comments::CommentTone;

/// User settings as held by the settings collaborator.
///
/// Every top-level field is optional: `set` with a partial value overwrites
/// only the fields that are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<ApiKeys>,
    /// Kept as the raw stored string; an unknown value surfaces as a
    /// configuration error at dispatch time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anthropic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_insert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tone: Option<CommentTone>,
}

/// Top-level keys understood by the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
    ApiKeys,
    SelectedTier,
    Preferences,
}

impl SettingsKey {
    pub const ALL: [SettingsKey; 3] = [
        SettingsKey::ApiKeys,
        SettingsKey::SelectedTier,
        SettingsKey::Preferences,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsKey::ApiKeys => "apiKeys",
            SettingsKey::SelectedTier => "selectedTier",
            SettingsKey::Preferences => "preferences",
        }
    }
}

impl ApiKeys {
    /// Returns the key for `provider`, treating an empty string as absent.
    pub fn get(&self, provider: LlmProvider) -> Option<&str> {
        let key = match provider {
            LlmProvider::OpenAi => self.openai.as_deref(),
            LlmProvider::Anthropic => self.anthropic.as_deref(),
        };
        key.filter(|k| !k.trim().is_empty())
    }

    pub fn set(&mut self, provider: LlmProvider, key: String) {
        match provider {
            LlmProvider::OpenAi => self.openai = Some(key),
            LlmProvider::Anthropic => self.anthropic = Some(key),
        }
    }

    /// Providers that currently have a usable key.
    pub fn configured(&self) -> Vec<LlmProvider> {
        LlmProvider::ALL
            .into_iter()
            .filter(|p| self.get(*p).is_some())
            .collect()
    }
}

impl Settings {
    /// Overwrites every top-level field present in `partial`.
    pub fn merge(&mut self, partial: Settings) {
        if partial.api_keys.is_some() {
            self.api_keys = partial.api_keys;
        }
        if partial.selected_tier.is_some() {
            self.selected_tier = partial.selected_tier;
        }
        if partial.preferences.is_some() {
            self.preferences = partial.preferences;
        }
    }

    /// Copy holding only the requested keys.
    pub fn select(&self, keys: &[SettingsKey]) -> Settings {
        let mut out = Settings::default();
        for key in keys {
            match key {
                SettingsKey::ApiKeys => out.api_keys = self.api_keys.clone(),
                SettingsKey::SelectedTier => out.selected_tier = self.selected_tier.clone(),
                SettingsKey::Preferences => out.preferences = self.preferences.clone(),
            }
        }
        out
    }

    pub fn api_keys(&self) -> ApiKeys {
        self.api_keys.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_wire_format() {
        let json = r#"{
            "apiKeys": {"openai": "sk-test"},
            "selectedTier": "budget",
            "preferences": {"autoInsert": true, "defaultTone": "casual"}
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.selected_tier.as_deref(), Some("budget"));
        assert_eq!(settings.api_keys().get(LlmProvider::OpenAi), Some("sk-test"));
        assert_eq!(settings.api_keys().get(LlmProvider::Anthropic), None);
        let prefs = settings.preferences.unwrap();
        assert_eq!(prefs.auto_insert, Some(true));
        assert_eq!(prefs.default_tone, Some(CommentTone::Casual));
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let keys = ApiKeys {
            openai: Some("  ".to_string()),
            anthropic: Some("sk-ant".to_string()),
        };
        assert_eq!(keys.get(LlmProvider::OpenAi), None);
        assert_eq!(keys.configured(), vec![LlmProvider::Anthropic]);
    }

    #[test]
    fn test_merge_overwrites_only_present_fields() {
        let mut settings = Settings {
            api_keys: Some(ApiKeys {
                openai: Some("sk-1".to_string()),
                anthropic: None,
            }),
            selected_tier: Some("budget".to_string()),
            preferences: None,
        };
        settings.merge(Settings {
            selected_tier: Some("premium".to_string()),
            ..Default::default()
        });
        assert_eq!(settings.selected_tier.as_deref(), Some("premium"));
        assert_eq!(settings.api_keys().get(LlmProvider::OpenAi), Some("sk-1"));
    }

    #[test]
    fn test_select_returns_requested_keys_only() {
        let settings = Settings {
            api_keys: Some(ApiKeys::default()),
            selected_tier: Some("standard".to_string()),
            preferences: Some(Preferences::default()),
        };
        let picked = settings.select(&[SettingsKey::SelectedTier]);
        assert_eq!(picked.selected_tier.as_deref(), Some("standard"));
        assert!(picked.api_keys.is_none());
        assert!(picked.preferences.is_none());
    }
}
