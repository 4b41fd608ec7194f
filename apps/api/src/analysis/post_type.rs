use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::{compile_rules, first_match};
use crate::models::analysis::PostType;

// Priority order: a "thrilled to announce" post is a celebration, a launch
// post that ends on a question is still an announcement.
const POST_TYPE_CUES: &[(PostType, &str)] = &[
    (
        PostType::Celebration,
        r"(?i)\b(thrilled|excited to share|proud to|honou?red|celebrat\w*|congrat\w*|milestone|anniversary|promoted|new (role|position|job))\b|🎉|🥳",
    ),
    (
        PostType::Announcement,
        r"(?i)\b(announc\w*|introducing|launch\w*|now (live|available)|we('re| are) hiring|just (released|shipped)|joined|joining)\b|🚀",
    ),
    (
        PostType::Question,
        r"(?i)\?\s*$|\b(what do you think|what are your thoughts|how do you|has anyone|any (advice|recommendations|tips)|curious to hear)\b",
    ),
    (
        PostType::Opinion,
        r"(?i)\b(unpopular opinion|hot take|i (strongly )?(think|believe|feel)|in my (opinion|view)|imo|overrated|underrated|controversial)\b",
    ),
];

/// Classifies the intent of a post. Anything without a cue is thought
/// leadership.
pub fn detect_post_type(content: &str) -> PostType {
    static RULES: OnceLock<Vec<(PostType, Regex)>> = OnceLock::new();
    let rules = RULES.get_or_init(|| compile_rules(POST_TYPE_CUES));

    first_match(rules, content).unwrap_or(PostType::ThoughtLeadership)
}
