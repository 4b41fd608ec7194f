use crate::generation::prompts::{
    section_label, section_placeholder, ALL_VARIANTS_TASK, COMMENT_PROMPT_TEMPLATE,
    SINGLE_VARIANT_TASK,
};
use crate::models::analysis::Analysis;
use crate::models::comments::CommentTone;
use crate::models::post::Post;

/// Renders the generation prompt.
///
/// With `tone == None` the model is asked for all three labelled variants in
/// one completion; with a tone, only that variant's section is requested.
pub fn build_prompt(post: &Post, analysis: &Analysis, tone: Option<CommentTone>) -> String {
    let (task, format) = match tone {
        None => (
            ALL_VARIANTS_TASK.to_string(),
            CommentTone::ALL
                .iter()
                .map(|&t| format_section(t))
                .collect::<Vec<_>>()
                .join("\n\n"),
        ),
        Some(t) => (
            SINGLE_VARIANT_TASK.replace("{tone}", t.as_str()),
            format_section(t),
        ),
    };

    fill_template(
        COMMENT_PROMPT_TEMPLATE,
        &[
            ("post_type", analysis.post_type.as_str()),
            ("author_role", analysis.author_role.as_str()),
            ("post_tone", analysis.tone.as_str()),
            ("cta", analysis.cta.as_deref().unwrap_or("none")),
            ("content", post.content.as_str()),
            ("task", task.as_str()),
            ("format", format.as_str()),
        ],
    )
}

/// Single pass over `template`: substituted values are never scanned again,
/// so braces in post text or the CTA come through verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let hit = values.iter().find(|(name, _)| {
            tail.strip_prefix(*name)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

fn format_section(tone: CommentTone) -> String {
    format!("{}\n{}", section_label(tone), section_placeholder(tone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{AuthorRole, PostTone, PostType};

    fn sample() -> (Post, Analysis) {
        let post = Post {
            content: "Test post content".to_string(),
            ..Default::default()
        };
        let analysis = Analysis {
            post_type: PostType::ThoughtLeadership,
            tone: PostTone::Serious,
            author_role: AuthorRole::Founder,
            cta: None,
        };
        (post, analysis)
    }

    #[test]
    fn test_prompt_embeds_context() {
        let (post, analysis) = sample();
        let prompt = build_prompt(&post, &analysis, None);
        assert!(prompt.contains("Post Type: thought_leadership"));
        assert!(prompt.contains("Author Role: founder"));
        assert!(prompt.contains("Post Tone: serious"));
        assert!(prompt.contains("Detected CTA: none"));
        assert!(prompt.contains("Post Content: Test post content"));
    }

    #[test]
    fn test_prompt_requests_all_three_labels_in_order() {
        let (post, analysis) = sample();
        let prompt = build_prompt(&post, &analysis, None);
        let professional = prompt.find("[PROFESSIONAL]").unwrap();
        let casual = prompt.find("[CASUAL]").unwrap();
        let bold = prompt.find("[BOLD]").unwrap();
        assert!(professional < casual && casual < bold);
        assert!(prompt.contains("Generate 3 comment variations"));
    }

    #[test]
    fn test_prompt_carries_style_rules() {
        let (post, analysis) = sample();
        let prompt = build_prompt(&post, &analysis, None);
        for rule in [
            "Match the post's energy",
            "Add genuine value",
            "2-4 sentences max",
            "\"great post!\"",
            "Sound human, not AI",
            "meaningfully different",
        ] {
            assert!(prompt.contains(rule), "missing rule: {rule}");
        }
    }

    #[test]
    fn test_single_tone_prompt_requests_one_section() {
        let (post, analysis) = sample();
        let prompt = build_prompt(&post, &analysis, Some(CommentTone::Casual));
        assert!(prompt.contains("Generate a casual comment"));
        assert!(prompt.contains("[CASUAL]"));
        assert!(!prompt.contains("[PROFESSIONAL]"));
        assert!(!prompt.contains("[BOLD]"));
    }

    #[test]
    fn test_cta_is_embedded() {
        let (post, mut analysis) = sample();
        analysis.cta = Some("Sign up below.".to_string());
        let prompt = build_prompt(&post, &analysis, None);
        assert!(prompt.contains("Detected CTA: Sign up below."));
    }

    #[test]
    fn test_placeholders_in_content_are_not_expanded() {
        let (mut post, analysis) = sample();
        post.content = "Template test {task} {post_type}".to_string();
        let prompt = build_prompt(&post, &analysis, None);
        assert!(prompt.contains("Post Content: Template test {task} {post_type}"));
    }

    #[test]
    fn test_placeholders_in_cta_are_not_expanded() {
        let (mut post, mut analysis) = sample();
        post.content = "SECRET BODY".to_string();
        analysis.cta = Some("Reply with {content} and {format}!".to_string());
        let prompt = build_prompt(&post, &analysis, None);
        assert!(prompt.contains("Detected CTA: Reply with {content} and {format}!"));
        assert_eq!(prompt.matches("SECRET BODY").count(), 1);
    }

    #[test]
    fn test_fill_template_leaves_unknown_braces() {
        assert_eq!(
            fill_template("{a} {b} {", &[("a", "{b}")]),
            "{b} {b} {"
        );
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let (post, analysis) = sample();
        assert_eq!(
            build_prompt(&post, &analysis, Some(CommentTone::Bold)),
            build_prompt(&post, &analysis, Some(CommentTone::Bold))
        );
    }
}
