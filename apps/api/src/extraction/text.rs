//! Text normalization for scraped feed markup.

use std::sync::OnceLock;

use regex::Regex;

/// Suffixes left behind by the feed's truncation toggle, longest first.
const TRUNCATION_SUFFIXES: &[&str] = &["…see more", "...see more", "see more", "see less"];

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes post body text: collapse whitespace, drop the truncation
/// toggle suffix, trim.
pub fn clean_text(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let mut body = collapsed.as_str();
    for suffix in TRUNCATION_SUFFIXES {
        if let Some(stripped) = body.strip_suffix(suffix) {
            body = stripped;
            break;
        }
    }
    body.trim().to_string()
}

/// Strips the relative timestamp, bullet-separated badges and pipe-delimited
/// tail from an author headline. Order matters: the timestamp prefix must go
/// before everything after the first bullet is dropped.
pub fn clean_designation(designation: &str) -> String {
    static TIME_PREFIX: OnceLock<Regex> = OnceLock::new();
    static BULLET_TAIL: OnceLock<Regex> = OnceLock::new();
    static PIPE_TAIL: OnceLock<Regex> = OnceLock::new();

    let time_prefix = TIME_PREFIX.get_or_init(|| Regex::new(r"^\d+[wdhms]\s*•\s*").unwrap());
    let bullet_tail = BULLET_TAIL.get_or_init(|| Regex::new(r"(?s)•.*$").unwrap());
    let pipe_tail = PIPE_TAIL.get_or_init(|| Regex::new(r"(?s)\s*\|\s*.*$").unwrap());

    let step = time_prefix.replace(designation, "");
    let step = bullet_tail.replace(&step, "");
    let step = pipe_tail.replace(&step, "");
    step.trim().to_string()
}

/// Parses a displayed engagement count such as `"1,234"`, `"15.3K"` or
/// `"25 comments"`. Anything without a number is 0.
pub fn parse_count(raw: &str) -> u64 {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER.get_or_init(|| Regex::new(r"\d*\.?\d+").unwrap());

    let cleaned = raw.trim().replace(',', "");
    let Some(found) = number.find(&cleaned) else {
        return 0;
    };
    let Ok(value) = found.as_str().parse::<f64>() else {
        return 0;
    };

    let scaled = if cleaned.contains('K') {
        value * 1_000.0
    } else if cleaned.contains('M') {
        value * 1_000_000.0
    } else {
        value
    };

    scaled.round() as u64
}
