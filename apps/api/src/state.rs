use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ProviderRouter;
use crate::settings::SettingsStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub router: ProviderRouter,
    /// Memory or Redis backed, picked at startup from `REDIS_URL`.
    pub settings: Arc<dyn SettingsStore>,
    pub config: Config,
}
