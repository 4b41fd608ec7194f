use serde::{Deserialize, Serialize};

/// A normalized feed post, produced once per extraction call.
///
/// Every field has an empty/zero fallback: extraction never fails, it just
/// yields less data when the markup is missing pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub content: String,
    pub author: Author,
    pub metadata: PostMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    /// Headline with the relative timestamp and trailing badges removed.
    pub designation: String,
}

/// Engagement counts as displayed in the social counts bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMetadata {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

impl Post {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.author.name.is_empty()
    }
}
