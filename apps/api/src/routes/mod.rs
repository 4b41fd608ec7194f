pub mod health;
pub mod messages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::generation::handlers as generation;
use crate::settings::handlers as settings;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Post analysis
        .route("/api/v1/posts/analyze", post(analysis::handle_analyze))
        // Comment generation
        .route(
            "/api/v1/comments/generate",
            post(generation::handle_generate),
        )
        // Extension message envelope
        .route("/api/v1/messages", post(messages::handle_message))
        // Settings
        .route(
            "/api/v1/settings",
            get(settings::handle_get_settings).put(settings::handle_update_settings),
        )
        .route(
            "/api/v1/settings/api-keys/:provider",
            get(settings::handle_get_api_key_status).put(settings::handle_save_api_key),
        )
        .with_state(state)
}
