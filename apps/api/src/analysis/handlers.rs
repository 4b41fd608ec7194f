//! Axum route handlers for the post analysis API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::analyze_post;
use crate::errors::AppError;
use crate::extraction::extract_post_from_html;
use crate::models::analysis::Analysis;
use crate::models::post::Post;

/// Either a raw post container fragment or an already-extracted record.
/// `post` wins when both are sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub post: Option<Post>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    pub post: Post,
    pub analysis: Analysis,
}

/// POST /api/v1/posts/analyze
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    analyze(request).map(Json)
}

/// Shared by the HTTP route and the message envelope.
pub fn analyze(request: AnalyzeRequest) -> Result<AnalyzeResponse, AppError> {
    let post = match (request.post, request.html) {
        (Some(post), _) => post,
        (None, Some(html)) if !html.trim().is_empty() => extract_post_from_html(&html),
        _ => {
            return Err(AppError::Validation(
                "Provide either html or post".to_string(),
            ))
        }
    };

    if post.is_empty() {
        debug!("Analyzing a post with no extracted fields");
    }

    let analysis = analyze_post(&post);

    Ok(AnalyzeResponse {
        status: "success",
        post,
        analysis,
    })
}
