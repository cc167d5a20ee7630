//! Template search.

use super::{Category, Template};
use std::cmp::Ordering;

/// Find templates matching `query`, optionally restricted to one category.
///
/// Matching is a case-insensitive substring test against the title and the
/// plain-text projection of the content; an empty query matches everything.
/// Results are ordered most recently used first, never-used templates last,
/// ties broken by title.
pub fn search<'a>(
    templates: &'a [Template],
    query: &str,
    category: Option<Category>,
) -> Vec<&'a Template> {
    let needle = query.trim().to_lowercase();

    let mut matches: Vec<&Template> = templates
        .iter()
        .filter(|t| category.is_none_or(|c| t.category == c))
        .filter(|t| {
            needle.is_empty()
                || t.title.to_lowercase().contains(&needle)
                || t.plain_text().to_lowercase().contains(&needle)
        })
        .collect();

    matches.sort_by(|a, b| match (a.last_used, b.last_used) {
        (Some(x), Some(y)) if x != y => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    });

    matches
}
