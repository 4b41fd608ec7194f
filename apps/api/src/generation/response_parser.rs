//! Splits a free-text completion into the three labelled variants.
//!
//! Sections are assumed to appear in canonical order. Each label's body runs
//! to the label that follows it in that order, or to the end of the text when
//! that label does not come after it. Other labels inside a body are kept as
//! text. The first occurrence of a label is the one used. Missing sections are
//! empty strings.

use crate::generation::prompts::{BOLD_LABEL, CASUAL_LABEL, PROFESSIONAL_LABEL};
use crate::models::comments::CommentSet;

pub fn parse_comment_variants(completion: &str) -> CommentSet {
    CommentSet {
        professional: section(completion, PROFESSIONAL_LABEL, Some(CASUAL_LABEL)),
        casual: section(completion, CASUAL_LABEL, Some(BOLD_LABEL)),
        bold: section(completion, BOLD_LABEL, None),
    }
}

/// Trimmed text between `label` and the first `terminator` after it.
fn section(text: &str, label: &str, terminator: Option<&str>) -> String {
    let Some(start) = text.find(label) else {
        return String::new();
    };
    let body = &text[start + label.len()..];
    let end = terminator
        .and_then(|t| body.find(t))
        .unwrap_or(body.len());
    body[..end].trim().to_string()
}
