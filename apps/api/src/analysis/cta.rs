use std::sync::OnceLock;

use regex::Regex;

const CTA_CUES: &str = r"(?i)\b(comment below|let me know|drop (a|your)|share your|tell me|dm me|message me|reach out|sign up|register|apply (now|here|today)|link in (the )?(comments|bio)|check (it )?out|learn more|join (us|me)|follow (me|us|along)|repost|subscribe|book a|grab your|what do you think)\b";

/// Returns the first sentence that asks the reader to do something, or
/// `None` when the post makes no explicit call-to-action.
pub fn detect_cta(content: &str) -> Option<String> {
    static SENTENCE: OnceLock<Regex> = OnceLock::new();
    static CUES: OnceLock<Regex> = OnceLock::new();
    let sentence = SENTENCE.get_or_init(|| Regex::new(r"[^.!?\n]+[.!?]*").unwrap());
    let cues = CUES.get_or_init(|| Regex::new(CTA_CUES).unwrap());

    sentence
        .find_iter(content)
        .map(|m| m.as_str().trim())
        .find(|s| !s.is_empty() && cues.is_match(s))
        .map(str::to_string)
}
