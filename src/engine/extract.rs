//! Placeholder extraction.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A placeholder is `{`, one or more non-brace characters, then `}`.
pub(super) static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("Invalid placeholder regex"));

/// Extract the distinct placeholder names from template content.
///
/// Names are returned in order of first appearance. Names are not trimmed or
/// validated: `{ }` yields a placeholder named `" "`. Content with no complete
/// `{...}` pair yields an empty vector.
pub fn extract_placeholders(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for name in PLACEHOLDER_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        if seen.insert(name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Placeholder names present in `before` that no longer appear in `after`.
///
/// Used to flag rewrites that dropped placeholders. Order follows `before`.
pub fn missing_placeholders(before: &str, after: &str) -> Vec<String> {
    let remaining: HashSet<String> = extract_placeholders(after).into_iter().collect();
    extract_placeholders(before)
        .into_iter()
        .filter(|name| !remaining.contains(name))
        .collect()
}
