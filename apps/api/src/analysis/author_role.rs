use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::{compile_rules, first_match};
use crate::models::analysis::AuthorRole;

/// Checked top to bottom; a headline like "Founder & Engineer" must land on
/// founder. Plain substring matches, so "SWEs" is an engineer and "CHRO" a
/// recruiter.
const ROLE_PATTERNS: &[(AuthorRole, &str)] = &[
    (AuthorRole::Founder, r"(?i)founder|co-founder|ceo|entrepreneur"),
    (AuthorRole::Engineer, r"(?i)engineer|developer|swe|software"),
    (AuthorRole::Recruiter, r"(?i)recruiter|talent|hr|hiring"),
    (AuthorRole::Marketer, r"(?i)marketing|growth|content|brand"),
    (AuthorRole::Vc, r"(?i)investor|vc|venture|partner"),
];

/// Maps an author headline to a role. Always returns a value; anything
/// unmatched (including an empty headline) is `Professional`.
pub fn detect_author_role(designation: &str) -> AuthorRole {
    static RULES: OnceLock<Vec<(AuthorRole, Regex)>> = OnceLock::new();
    let rules = RULES.get_or_init(|| compile_rules(ROLE_PATTERNS));

    first_match(rules, designation).unwrap_or(AuthorRole::Professional)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_founder() {
        assert_eq!(detect_author_role("Founder & CEO at TechCorp"), AuthorRole::Founder);
        assert_eq!(detect_author_role("CO-FOUNDER at StartupXYZ"), AuthorRole::Founder);
        assert_eq!(detect_author_role("CEO | Builder"), AuthorRole::Founder);
        assert_eq!(detect_author_role("Serial entrepreneur"), AuthorRole::Founder);
    }

    #[test]
    fn test_founder_wins_over_engineer() {
        assert_eq!(detect_author_role("Founder & Engineer"), AuthorRole::Founder);
    }

    #[test]
    fn test_engineer() {
        assert_eq!(
            detect_author_role("Senior Software Engineer at Google"),
            AuthorRole::Engineer
        );
        assert_eq!(detect_author_role("SWE @ Meta"), AuthorRole::Engineer);
        assert_eq!(detect_author_role("Frontend developer"), AuthorRole::Engineer);
    }

    #[test]
    fn test_recruiter() {
        assert_eq!(detect_author_role("Technical Recruiter at Meta"), AuthorRole::Recruiter);
        assert_eq!(detect_author_role("HR Business Partner"), AuthorRole::Recruiter);
        assert_eq!(detect_author_role("Talent Acquisition Lead"), AuthorRole::Recruiter);
    }

    #[test]
    fn test_marketer() {
        assert_eq!(
            detect_author_role("Head of Growth Marketing at Stripe"),
            AuthorRole::Marketer
        );
        assert_eq!(detect_author_role("Brand strategist"), AuthorRole::Marketer);
    }

    #[test]
    fn test_vc() {
        assert_eq!(detect_author_role("Partner at Sequoia Capital"), AuthorRole::Vc);
        assert_eq!(detect_author_role("Angel investor"), AuthorRole::Vc);
        assert_eq!(detect_author_role("VC @ a16z"), AuthorRole::Vc);
    }

    #[test]
    fn test_defaults_to_professional() {
        assert_eq!(
            detect_author_role("Sales Manager at RandomCorp"),
            AuthorRole::Professional
        );
        assert_eq!(detect_author_role(""), AuthorRole::Professional);
    }

    #[test]
    fn test_acronyms_match_as_substrings() {
        assert_eq!(detect_author_role("SWEs at Meta"), AuthorRole::Engineer);
        assert_eq!(detect_author_role("HRBP at Acme"), AuthorRole::Recruiter);
        assert_eq!(detect_author_role("CHRO at Acme"), AuthorRole::Recruiter);
        assert_eq!(detect_author_role("Investing in VCs"), AuthorRole::Vc);
        assert_eq!(detect_author_role("Director at Anthropic"), AuthorRole::Recruiter);
    }
}
