//! Axum route handlers for the comment generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{generate_comments, GenerateRequest, GenerationResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub result: GenerationResult,
}

/// POST /api/v1/comments/generate
///
/// Generates reply variants for an extracted post. `analysis` is optional;
/// `tone` narrows the request to a single variant.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    generate(&state, request).await.map(Json)
}

/// Shared by the HTTP route and the message envelope.
pub async fn generate(
    state: &AppState,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    if request.post.content.trim().is_empty() {
        return Err(AppError::Validation(
            "post.content cannot be empty".to_string(),
        ));
    }

    let result = generate_comments(
        &state.router,
        state.settings.as_ref(),
        state.config.default_tier,
        request,
    )
    .await?;

    Ok(GenerateResponse {
        status: "success",
        result,
    })
}
