use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::extraction::selectors::{
    ACTOR_CONTAINER, COMMENTS_COUNT, CONTENT_SELECTORS, DESIGNATION_SELECTORS, NAME_SELECTORS,
    POST_CONTAINER_SELECTORS, REACTIONS_COUNT, SHARES_COUNT, SOCIAL_COUNTS_CONTAINER,
};
use crate::extraction::text::{clean_designation, clean_text, collapse_whitespace, parse_count};
use crate::models::post::{Author, Post, PostMetadata};

/// Extracts a `Post` from one post container element.
pub fn extract_post(container: ElementRef<'_>) -> Post {
    let post = Post {
        content: extract_content(container),
        author: extract_author(container),
        metadata: extract_metadata(container),
    };

    debug!(
        "Extracted post: {} chars, author={:?}, likes={}",
        post.content.len(),
        post.author.name,
        post.metadata.likes
    );

    post
}

/// Extracts every post container found in an HTML fragment.
///
/// Falls back to treating the whole fragment as one container when none of
/// the known container selectors match.
pub fn extract_posts(html: &str) -> Vec<Post> {
    let document = Html::parse_fragment(html);

    for selector_str in POST_CONTAINER_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        let posts: Vec<Post> = document.select(&selector).map(extract_post).collect();
        if !posts.is_empty() {
            return posts;
        }
    }

    vec![extract_post(document.root_element())]
}

/// First post in the fragment, or an all-empty `Post`.
pub fn extract_post_from_html(html: &str) -> Post {
    extract_posts(html).into_iter().next().unwrap_or_default()
}

fn extract_content(container: ElementRef<'_>) -> String {
    first_text(container, CONTENT_SELECTORS)
        .map(|text| clean_text(&text))
        .unwrap_or_default()
}

fn extract_author(container: ElementRef<'_>) -> Author {
    let Some(actor) = select_first(container, ACTOR_CONTAINER) else {
        return Author::default();
    };

    let name = first_text(actor, NAME_SELECTORS)
        .map(|name| collapse_whitespace(&name))
        .unwrap_or_default();
    let designation = first_text(actor, DESIGNATION_SELECTORS)
        .map(|designation| clean_designation(&designation))
        .unwrap_or_default();

    Author { name, designation }
}

fn extract_metadata(container: ElementRef<'_>) -> PostMetadata {
    let Some(counts) = select_first(container, SOCIAL_COUNTS_CONTAINER) else {
        return PostMetadata::default();
    };

    let count = |selector: &str| {
        select_first(counts, selector)
            .map(|el| parse_count(&element_text(el)))
            .unwrap_or(0)
    };

    PostMetadata {
        likes: count(REACTIONS_COUNT),
        comments: count(COMMENTS_COUNT),
        shares: count(SHARES_COUNT),
    }
}

/// Walks `selectors` in order and returns the first matching element whose
/// trimmed text is non-empty.
fn first_text(scope: ElementRef<'_>, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|selector_str| {
        let text = element_text(select_first(scope, selector_str)?);
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn select_first<'a>(scope: ElementRef<'a>, selector_str: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector_str).ok()?;
    scope.select(&selector).next()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
