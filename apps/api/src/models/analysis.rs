use serde::{Deserialize, Serialize};

/// Broad intent of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    #[default]
    ThoughtLeadership,
    Announcement,
    Opinion,
    Question,
    Celebration,
}

/// Emotional register of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostTone {
    Celebratory,
    Serious,
    Controversial,
    Supportive,
    #[default]
    Professional,
}

/// Role of the author, inferred from their headline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorRole {
    Founder,
    Engineer,
    Recruiter,
    Marketer,
    Vc,
    #[default]
    Professional,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::ThoughtLeadership => "thought_leadership",
            PostType::Announcement => "announcement",
            PostType::Opinion => "opinion",
            PostType::Question => "question",
            PostType::Celebration => "celebration",
        }
    }
}

impl PostTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostTone::Celebratory => "celebratory",
            PostTone::Serious => "serious",
            PostTone::Controversial => "controversial",
            PostTone::Supportive => "supportive",
            PostTone::Professional => "professional",
        }
    }
}

impl AuthorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorRole::Founder => "founder",
            AuthorRole::Engineer => "engineer",
            AuthorRole::Recruiter => "recruiter",
            AuthorRole::Marketer => "marketer",
            AuthorRole::Vc => "vc",
            AuthorRole::Professional => "professional",
        }
    }
}

/// Classification tags derived from a `Post`. No identity of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub tone: PostTone,
    pub author_role: AuthorRole,
    /// Sentence carrying an explicit call-to-action, if one was detected.
    pub cta: Option<String>,
}
