//! Axum route handlers for the settings API.
//!
//! Responses report which providers have keys; raw keys are never echoed.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::providers::{LlmProvider, Tier};
use crate::models::settings::{Preferences, Settings, SettingsKey};
use crate::settings::{api_key, save_api_key};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub status: &'static str,
    pub configured_providers: Vec<LlmProvider>,
    /// Stored tier, or the server default when none is stored.
    pub selected_tier: String,
    pub preferences: Preferences,
}

#[derive(Debug, Deserialize)]
pub struct SaveApiKeyRequest {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct ApiKeyStatus {
    pub provider: LlmProvider,
    pub configured: bool,
}

/// GET /api/v1/settings
pub async fn handle_get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsView>, AppError> {
    current_view(&state).await.map(Json)
}

/// PUT /api/v1/settings
///
/// Merges the top-level keys present in the body into the stored settings.
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Json(partial): Json<Settings>,
) -> Result<Json<SettingsView>, AppError> {
    if let Some(tier) = &partial.selected_tier {
        tier.parse::<Tier>().map_err(AppError::Validation)?;
    }

    state.settings.set(partial).await?;
    info!("Settings updated");

    current_view(&state).await.map(Json)
}

/// GET /api/v1/settings/api-keys/:provider
pub async fn handle_get_api_key_status(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Result<Json<ApiKeyStatus>, AppError> {
    let provider = parse_provider(&provider)?;
    let configured = api_key(state.settings.as_ref(), provider).await?.is_some();
    Ok(Json(ApiKeyStatus {
        provider,
        configured,
    }))
}

/// PUT /api/v1/settings/api-keys/:provider
///
/// Saves one provider key without touching the other provider's key.
pub async fn handle_save_api_key(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Json(request): Json<SaveApiKeyRequest>,
) -> Result<Json<SettingsView>, AppError> {
    let provider = parse_provider(&provider)?;
    let key = request.key.trim();
    if key.is_empty() {
        return Err(AppError::Validation("key cannot be empty".to_string()));
    }

    save_api_key(state.settings.as_ref(), provider, key.to_string()).await?;
    info!("Saved {} API key", provider.display_name());

    current_view(&state).await.map(Json)
}

fn parse_provider(raw: &str) -> Result<LlmProvider, AppError> {
    raw.parse::<LlmProvider>().map_err(AppError::Validation)
}

async fn current_view(state: &AppState) -> Result<SettingsView, AppError> {
    let stored = state.settings.get(&SettingsKey::ALL).await?;
    Ok(SettingsView {
        status: "success",
        configured_providers: stored.api_keys().configured(),
        selected_tier: stored
            .selected_tier
            .unwrap_or_else(|| state.config.default_tier.as_str().to_string()),
        preferences: stored.preferences.unwrap_or_default(),
    })
}
