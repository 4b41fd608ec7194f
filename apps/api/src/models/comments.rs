use std::fmt;

use serde::{Deserialize, Serialize};

/// Style of a generated reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentTone {
    #[default]
    Professional,
    Casual,
    Bold,
}

impl CommentTone {
    /// Canonical order of the sections in a model completion.
    pub const ALL: [CommentTone; 3] = [
        CommentTone::Professional,
        CommentTone::Casual,
        CommentTone::Bold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentTone::Professional => "professional",
            CommentTone::Casual => "casual",
            CommentTone::Bold => "bold",
        }
    }
}

impl fmt::Display for CommentTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three reply variants parsed out of one completion.
///
/// All three fields are always present; a section the model left out is an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSet {
    pub professional: String,
    pub casual: String,
    pub bold: String,
}

/// A single reply tagged with its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentVariant {
    pub text: String,
    pub tone: CommentTone,
}

impl CommentSet {
    pub fn get(&self, tone: CommentTone) -> &str {
        match tone {
            CommentTone::Professional => &self.professional,
            CommentTone::Casual => &self.casual,
            CommentTone::Bold => &self.bold,
        }
    }

    /// Non-empty variants in canonical order.
    pub fn variants(&self) -> Vec<CommentVariant> {
        CommentTone::ALL
            .iter()
            .filter(|tone| !self.get(**tone).is_empty())
            .map(|&tone| CommentVariant {
                text: self.get(tone).to_string(),
                tone,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.professional.is_empty() && self.casual.is_empty() && self.bold.is_empty()
    }
}
