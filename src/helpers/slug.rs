//! Slug derivation

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Derive a URL slug from a title
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-`, then strips leading and trailing hyphens.
///
/// # Examples
/// ```ignore
/// slugify("AI & Society: A Framework!") // -> "ai-society-a-framework"
/// ```
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Slug taken from the source when present and non-empty, else derived
pub fn slug_or_derive(source_slug: Option<&str>, title: &str) -> String {
    match source_slug {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(title),
    }
}
