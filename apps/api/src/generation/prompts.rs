// Prompt constants for comment generation.
// The section labels are a wire contract with `response_parser`: both sides
// read them from here.

use crate::models::comments::CommentTone;

pub const PROFESSIONAL_LABEL: &str = "[PROFESSIONAL]";
pub const CASUAL_LABEL: &str = "[CASUAL]";
pub const BOLD_LABEL: &str = "[BOLD]";

pub fn section_label(tone: CommentTone) -> &'static str {
    match tone {
        CommentTone::Professional => PROFESSIONAL_LABEL,
        CommentTone::Casual => CASUAL_LABEL,
        CommentTone::Bold => BOLD_LABEL,
    }
}

/// Placeholder body shown under each label in the format block.
pub fn section_placeholder(tone: CommentTone) -> &'static str {
    match tone {
        CommentTone::Professional => "Your professional comment here",
        CommentTone::Casual => "Your casual comment here",
        CommentTone::Bold => "Your bold/opinionated comment here",
    }
}

pub const ALL_VARIANTS_TASK: &str = "Generate 3 comment variations for this LinkedIn post.";

/// Single-variant task. Replace `{tone}` before use.
pub const SINGLE_VARIANT_TASK: &str = "Generate a {tone} comment for this LinkedIn post.";

/// Comment generation prompt.
/// Placeholders: {post_type}, {author_role}, {post_tone}, {cta}, {content},
/// {task}, {format}. Filled in one pass by `prompt_builder`.
pub const COMMENT_PROMPT_TEMPLATE: &str = r#"Context:
- Post Type: {post_type}
- Author Role: {author_role}
- Post Tone: {post_tone}
- Detected CTA: {cta}
- Post Content: {content}

Task: {task}

Format your response EXACTLY as follows:
{format}

Rules:
- Match the post's energy
- Add genuine value
- 2-4 sentences max
- No generic phrases ("great post!", "thanks for sharing")
- Sound human, not AI
- Each comment should be meaningfully different in tone"#;
