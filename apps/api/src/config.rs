use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::llm_client::providers::Tier;
use crate::llm_client::{anthropic, openai, Endpoints};

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on malformed values.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Selects the Redis settings store when set, else settings live in memory.
    pub redis_url: Option<String>,
    pub openai_api_url: String,
    pub anthropic_api_url: String,
    pub llm_timeout_secs: u64,
    /// Seed keys written to the settings store at startup.
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    /// Used when the settings store has no selected tier.
    pub default_tier: Tier,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            redis_url: optional("REDIS_URL"),
            openai_api_url: optional("OPENAI_API_URL")
                .unwrap_or_else(|| openai::DEFAULT_API_URL.to_string()),
            anthropic_api_url: optional("ANTHROPIC_API_URL")
                .unwrap_or_else(|| anthropic::DEFAULT_API_URL.to_string()),
            llm_timeout_secs: optional("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            openai_api_key: optional("OPENAI_API_KEY"),
            anthropic_api_key: optional("ANTHROPIC_API_KEY"),
            default_tier: optional("DEFAULT_TIER")
                .unwrap_or_else(|| Tier::Standard.as_str().to_string())
                .parse::<Tier>()
                .map_err(|e| anyhow!("DEFAULT_TIER: {e}"))?,
        })
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            openai: self.openai_api_url.clone(),
            anthropic: self.anthropic_api_url.clone(),
        }
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
}
