//! Post extraction: turns one post container's markup into a `Post`.
//!
//! Everything here is total: missing markup resolves to empty strings and
//! zero counts, never an error. Each call re-reads the markup it is given.

pub mod extractor;
pub mod selectors;
pub mod text;

pub use extractor::extract_post_from_html;
