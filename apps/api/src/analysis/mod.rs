//! Post classification: derives `Analysis` tags from a `Post` by pattern
//! matching. Pure and total: every classifier falls back to a default value.

pub mod author_role;
pub mod cta;
pub mod handlers;
pub mod post_type;
pub mod tone;

use regex::Regex;

use crate::models::analysis::Analysis;
use crate::models::post::Post;

pub fn analyze_post(post: &Post) -> Analysis {
    Analysis {
        post_type: post_type::detect_post_type(&post.content),
        tone: tone::detect_tone(&post.content),
        author_role: author_role::detect_author_role(&post.author.designation),
        cta: cta::detect_cta(&post.content),
    }
}

/// Compiles a priority-ordered `(tag, pattern)` table.
fn compile_rules<T: Copy>(rules: &[(T, &str)]) -> Vec<(T, Regex)> {
    rules
        .iter()
        .map(|(tag, pattern)| (*tag, Regex::new(pattern).unwrap()))
        .collect()
}

/// Tag of the first rule whose pattern matches `text`.
fn first_match<T: Copy>(rules: &[(T, Regex)], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(tag, _)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{AuthorRole, PostTone, PostType};
    use crate::models::post::{Author, PostMetadata};

    fn post(content: &str, designation: &str) -> Post {
        Post {
            content: content.to_string(),
            author: Author {
                name: "Jane Smith".to_string(),
                designation: designation.to_string(),
            },
            metadata: PostMetadata::default(),
        }
    }

    #[test]
    fn test_analyze_launch_post() {
        let analysis = analyze_post(&post(
            "We're launching our new analytics dashboard today! Sign up for early access at the link below.",
            "Founder & CEO at TechCorp",
        ));
        assert_eq!(analysis.post_type, PostType::Announcement);
        assert_eq!(analysis.author_role, AuthorRole::Founder);
        assert_eq!(
            analysis.cta.as_deref(),
            Some("Sign up for early access at the link below.")
        );
    }

    #[test]
    fn test_analyze_empty_post_uses_defaults() {
        let analysis = analyze_post(&Post::default());
        assert_eq!(analysis.post_type, PostType::ThoughtLeadership);
        assert_eq!(analysis.tone, PostTone::Professional);
        assert_eq!(analysis.author_role, AuthorRole::Professional);
        assert_eq!(analysis.cta, None);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let p = post(
            "Unpopular opinion: standups are overrated. What do you think?",
            "Senior Software Engineer at Google",
        );
        assert_eq!(analyze_post(&p), analyze_post(&p));
        assert_eq!(analyze_post(&p).tone, PostTone::Controversial);
    }

    #[test]
    fn test_first_match_respects_order() {
        let rules = compile_rules(&[(1, "(?i)alpha"), (2, "(?i)alp")]);
        assert_eq!(first_match(&rules, "ALPHA"), Some(1));
        assert_eq!(first_match(&rules, "alp"), Some(2));
        assert_eq!(first_match(&rules, "beta"), None);
    }
}
