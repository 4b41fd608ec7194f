/// LLM Client: routes a generation prompt to the vendor configured for a tier.
///
/// ARCHITECTURAL RULE: No other module may call a vendor API directly.
/// All LLM interactions MUST go through `ProviderRouter`.
///
/// One request per call: no retry, backoff or streaming. Failures surface to
/// the caller unchanged.
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::settings::ApiKeys;

pub mod anthropic;
pub mod openai;
pub mod prompts;
pub mod providers;

use providers::{LlmProvider, ProviderConfig, ProviderTable, Tier};

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("No provider configuration for tier '{0}'")]
    Configuration(String),

    #[error("{} API key not configured", .0.display_name())]
    MissingCredential(LlmProvider),

    #[error("{} API error: {status_text}", .provider.display_name())]
    Provider {
        provider: LlmProvider,
        status: u16,
        status_text: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Vendor endpoint URLs. Overridable so tests and proxies can stand in.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub openai: String,
    pub anthropic: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            openai: openai::DEFAULT_API_URL.to_string(),
            anthropic: anthropic::DEFAULT_API_URL.to_string(),
        }
    }
}

/// Completion text normalized at the router boundary, independent of which
/// vendor produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub tier: Tier,
    pub provider: LlmProvider,
    pub model: String,
    pub text: String,
}

/// The single LLM entry point. Cheap to clone.
#[derive(Clone)]
pub struct ProviderRouter {
    client: Client,
    table: Arc<ProviderTable>,
    endpoints: Arc<Endpoints>,
}

impl ProviderRouter {
    pub fn new(table: ProviderTable, endpoints: Endpoints, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            table: Arc::new(table),
            endpoints: Arc::new(endpoints),
        })
    }

    /// Maps a raw tier name to its provider config.
    pub fn resolve(&self, tier: &str) -> Result<(Tier, &ProviderConfig), LlmError> {
        self.table
            .lookup(tier)
            .ok_or_else(|| LlmError::Configuration(tier.to_string()))
    }

    /// Resolves the tier, checks the credential and sends exactly one request.
    pub async fn dispatch(
        &self,
        tier: &str,
        credentials: &ApiKeys,
        prompt: &str,
    ) -> Result<Completion, LlmError> {
        let (tier, config) = self.resolve(tier)?;
        let api_key = credentials
            .get(config.provider)
            .ok_or(LlmError::MissingCredential(config.provider))?;

        info!(
            "Dispatching prompt: tier={} provider={} model={}",
            tier, config.provider, config.model
        );

        let text = match config.provider {
            LlmProvider::OpenAi => self.call_openai(&config.model, api_key, prompt).await?,
            LlmProvider::Anthropic => self.call_anthropic(&config.model, api_key, prompt).await?,
        };

        let text = text.unwrap_or_else(|| {
            warn!(
                "{} response carried no completion text; treating as empty",
                config.provider.display_name()
            );
            String::new()
        });

        debug!("Completion received: {} chars", text.len());

        Ok(Completion {
            tier,
            provider: config.provider,
            model: config.model.clone(),
            text,
        })
    }

    async fn call_openai(
        &self,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<Option<String>, LlmError> {
        let response = self
            .client
            .post(&self.endpoints.openai)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&openai::ChatRequest::new(model, prompt))
            .send()
            .await?;

        let response = check_status(LlmProvider::OpenAi, response).await?;
        let body: openai::ChatResponse = response.json().await?;
        Ok(body.into_text())
    }

    async fn call_anthropic(
        &self,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<Option<String>, LlmError> {
        let response = self
            .client
            .post(&self.endpoints.anthropic)
            .header("x-api-key", api_key)
            .header("anthropic-version", anthropic::ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&anthropic::MessagesRequest::new(model, prompt))
            .send()
            .await?;

        let response = check_status(LlmProvider::Anthropic, response).await?;
        let body: anthropic::MessagesResponse = response.json().await?;
        Ok(body.into_text())
    }
}

/// Turns a non-success status into `LlmError::Provider`, keeping the status text.
async fn check_status(
    provider: LlmProvider,
    response: reqwest::Response,
) -> Result<reqwest::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(
        "{} API returned {}: {}",
        provider.display_name(),
        status,
        body.chars().take(300).collect::<String>()
    );

    Err(LlmError::Provider {
        provider,
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}
