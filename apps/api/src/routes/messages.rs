//! Typed message envelope for the browser extension.
//!
//! The extension's content script posts `{type, data}` messages; each type
//! maps onto one of the HTTP handlers and answers with the same body.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::analysis::handlers::{analyze, AnalyzeRequest};
use crate::errors::AppError;
use crate::generation::generator::GenerateRequest;
use crate::generation::handlers::generate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtensionMessage {
    AnalyzePost(AnalyzeRequest),
    GenerateComments(GenerateRequest),
}

/// POST /api/v1/messages
pub async fn handle_message(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let message: ExtensionMessage = serde_json::from_value(raw)
        .map_err(|e| AppError::Validation(format!("Unsupported message: {e}")))?;

    let body = match message {
        ExtensionMessage::AnalyzePost(request) => serde_json::to_value(analyze(request)?),
        ExtensionMessage::GenerateComments(request) => {
            serde_json::to_value(generate(&state, request).await?)
        }
    }
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(body))
}
