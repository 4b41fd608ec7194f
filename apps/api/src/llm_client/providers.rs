//! Tier → (vendor, model) table.
//!
//! The table is plain data handed to `ProviderRouter::new`; swapping a model
//! or vendor never touches dispatch code.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// LLM vendor. Each has its own request and response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "anthropic")]
    Anthropic,
}

impl LlmProvider {
    pub const ALL: [LlmProvider; 2] = [LlmProvider::OpenAi, LlmProvider::Anthropic];

    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "openai",
            LlmProvider::Anthropic => "anthropic",
        }
    }

    /// Vendor name for user-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "OpenAI",
            LlmProvider::Anthropic => "Anthropic",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(LlmProvider::OpenAi),
            "anthropic" => Ok(LlmProvider::Anthropic),
            other => Err(format!("unknown provider '{other}'")),
        }
    }
}

/// Named service level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Budget,
    Standard,
    Premium,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Budget => "budget",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(Tier::Budget),
            "standard" => Ok(Tier::Standard),
            "premium" => Ok(Tier::Premium),
            other => Err(format!("unknown tier '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider: LlmProvider,
    pub model: String,
}

impl ProviderConfig {
    pub fn new(provider: LlmProvider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

/// Immutable tier lookup handed to the router at construction time.
#[derive(Debug, Clone, Default)]
pub struct ProviderTable {
    tiers: HashMap<Tier, ProviderConfig>,
}

impl ProviderTable {
    pub fn new(entries: impl IntoIterator<Item = (Tier, ProviderConfig)>) -> Self {
        Self {
            tiers: entries.into_iter().collect(),
        }
    }

    /// The production table.
    pub fn standard() -> Self {
        Self::new([
            (
                Tier::Budget,
                ProviderConfig::new(LlmProvider::OpenAi, "gpt-3.5-turbo"),
            ),
            (
                Tier::Standard,
                ProviderConfig::new(LlmProvider::OpenAi, "gpt-4-turbo"),
            ),
            (
                Tier::Premium,
                ProviderConfig::new(LlmProvider::Anthropic, "claude-3-opus"),
            ),
        ])
    }

    /// Resolves a raw tier name. `None` for names outside the enumeration and
    /// for tiers this table has no entry for.
    pub fn lookup(&self, tier: &str) -> Option<(Tier, &ProviderConfig)> {
        let tier = tier.parse::<Tier>().ok()?;
        self.tiers.get(&tier).map(|config| (tier, config))
    }
}
