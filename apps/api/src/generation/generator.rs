//! Comment generation pipeline.
//!
//! Flow: read settings → pick tier → build prompt → dispatch through the
//! provider router → parse labelled sections → tag the result.
//!
//! Exactly one vendor call per request. Failures from the router are returned
//! as-is so the caller can tell a missing key from a rejected request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyze_post;
use crate::errors::AppError;
use crate::generation::prompt_builder::build_prompt;
use crate::generation::response_parser::parse_comment_variants;
use crate::llm_client::providers::{LlmProvider, Tier};
use crate::llm_client::ProviderRouter;
use crate::models::analysis::Analysis;
use crate::models::comments::{CommentSet, CommentTone, CommentVariant};
use crate::models::post::Post;
use crate::models::settings::SettingsKey;
use crate::settings::SettingsStore;

/// Request body for comment generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub post: Post,
    /// Computed from `post` when the caller has not analyzed it yet.
    #[serde(default)]
    pub analysis: Option<Analysis>,
    /// Restricts generation to one variant.
    #[serde(default)]
    pub tone: Option<CommentTone>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub generation_id: Uuid,
    pub tier: Tier,
    pub provider: LlmProvider,
    pub model: String,
    pub comments: CommentSet,
    pub variants: Vec<CommentVariant>,
    /// Variant the UI should preselect.
    pub preferred_tone: CommentTone,
    pub generated_at: DateTime<Utc>,
}

pub async fn generate_comments(
    router: &ProviderRouter,
    settings: &dyn SettingsStore,
    default_tier: Tier,
    request: GenerateRequest,
) -> Result<GenerationResult, AppError> {
    let stored = settings.get(&SettingsKey::ALL).await?;
    let tier = stored
        .selected_tier
        .clone()
        .unwrap_or_else(|| default_tier.as_str().to_string());

    let analysis = request
        .analysis
        .unwrap_or_else(|| analyze_post(&request.post));

    let prompt = build_prompt(&request.post, &analysis, request.tone);
    let completion = router.dispatch(&tier, &stored.api_keys(), &prompt).await?;

    let mut comments = parse_comment_variants(&completion.text);
    if let Some(tone) = request.tone {
        comments = only_tone(comments, tone);
    }
    if comments.is_empty() {
        warn!(
            "Completion from {} had no labelled sections ({} chars)",
            completion.provider,
            completion.text.len()
        );
    }

    let preferred_tone = request
        .tone
        .or_else(|| stored.preferences.as_ref().and_then(|p| p.default_tone))
        .unwrap_or_default();

    let variants = comments.variants();
    info!(
        "Generated {} comment variant(s): tier={} provider={} model={}",
        variants.len(),
        completion.tier,
        completion.provider,
        completion.model
    );

    Ok(GenerationResult {
        generation_id: Uuid::new_v4(),
        tier: completion.tier,
        provider: completion.provider,
        model: completion.model,
        comments,
        variants,
        preferred_tone,
        generated_at: Utc::now(),
    })
}

/// Drops sections the model produced for tones that were not requested.
fn only_tone(comments: CommentSet, tone: CommentTone) -> CommentSet {
    let mut only = CommentSet::default();
    let text = comments.get(tone).to_string();
    match tone {
        CommentTone::Professional => only.professional = text,
        CommentTone::Casual => only.casual = text,
        CommentTone::Bold => only.bold = text,
    }
    only
}
