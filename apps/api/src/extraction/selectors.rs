//! Ordered selector tables for the feed markup.
//!
//! Lists are evaluated first-match-wins; add new markup variants here rather
//! than in the traversal code.

/// Post containers inside a feed page.
pub const POST_CONTAINER_SELECTORS: &[&str] = &[
    r#"[data-urn*="urn:li:activity"]"#,
    ".feed-shared-update-v2",
];

pub const CONTENT_SELECTORS: &[&str] = &[
    ".feed-shared-update-v2__description",
    ".feed-shared-text",
    ".feed-shared-inline-show-more-text",
    r#"[data-test-id="main-feed-activity-card__commentary"]"#,
];

pub const ACTOR_CONTAINER: &str = ".feed-shared-actor";

pub const NAME_SELECTORS: &[&str] = &[
    ".feed-shared-actor__name",
    ".feed-shared-actor__title",
    r#"[data-test-id="actor-name"]"#,
];

pub const DESIGNATION_SELECTORS: &[&str] = &[
    ".feed-shared-actor__description",
    ".feed-shared-actor__sub-description",
    r#"[data-test-id="actor-sub-description"]"#,
];

pub const SOCIAL_COUNTS_CONTAINER: &str = ".social-details-social-counts";
pub const REACTIONS_COUNT: &str = ".social-details-social-counts__reactions-count";
pub const COMMENTS_COUNT: &str = ".social-details-social-counts__comments";
pub const SHARES_COUNT: &str = ".social-details-social-counts__item--with-social-proof";

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_all_selectors_parse() {
        let lists: [&[&str]; 4] = [
            POST_CONTAINER_SELECTORS,
            CONTENT_SELECTORS,
            NAME_SELECTORS,
            DESIGNATION_SELECTORS,
        ];
        for selector in lists.iter().flat_map(|l| l.iter()).chain(
            [
                ACTOR_CONTAINER,
                SOCIAL_COUNTS_CONTAINER,
                REACTIONS_COUNT,
                COMMENTS_COUNT,
                SHARES_COUNT,
            ]
            .iter(),
        ) {
            assert!(
                Selector::parse(selector).is_ok(),
                "selector failed to parse: {selector}"
            );
        }
    }
}
