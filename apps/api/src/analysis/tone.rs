use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::{compile_rules, first_match};
use crate::models::analysis::PostTone;

// Strong signals first: a post that is both celebratory and controversial
// reads as controversial.
const TONE_CUES: &[(PostTone, &str)] = &[
    (
        PostTone::Controversial,
        r"(?i)\b(unpopular opinion|hot take|controversial|disagree|overrated|myth|nobody talks about|stop (doing|saying|pretending))\b",
    ),
    (
        PostTone::Serious,
        r"(?i)\b(laid off|layoffs?|passed away|grief|lost (my|our)|struggl\w*|burnout|mental health|difficult|hard (truth|lesson)|crisis)\b",
    ),
    (
        PostTone::Celebratory,
        r"(?i)\b(thrilled|excited|proud|celebrat\w*|congrat\w*|milestone|achiev\w*|award\w*)\b|🎉|🥳|🏆",
    ),
    (
        PostTone::Supportive,
        r"(?i)\b(grateful|thank(s| you)|shout-?out|support(ing|ive)?|rooting for|kudos|appreciat\w*|here to help)\b|🙏",
    ),
];

/// Classifies the emotional register of a post. Neutral posts are
/// `Professional`.
pub fn detect_tone(content: &str) -> PostTone {
    static RULES: OnceLock<Vec<(PostTone, Regex)>> = OnceLock::new();
    let rules = RULES.get_or_init(|| compile_rules(TONE_CUES));

    first_match(rules, content).unwrap_or(PostTone::Professional)
}
