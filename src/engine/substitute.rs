//! Placeholder substitution and value escaping.

use super::VariableMap;
use super::extract::PLACEHOLDER_REGEX;
use regex::Captures;

/// Fill placeholders in `content` with values from `values`.
///
/// Every `{name}` occurrence whose name maps to a non-empty value is replaced
/// by that value, escaped with [`escape_markup`]. A name with no entry, or an
/// empty entry, keeps its literal `{name}` text so unfilled placeholders stay
/// visible in the preview.
///
/// The scan is a single pass: text inserted from a value is never rescanned,
/// so a value that itself contains `{other}` is inserted verbatim.
pub fn substitute(content: &str, values: &VariableMap) -> String {
    PLACEHOLDER_REGEX
        .replace_all(content, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) if !value.is_empty() => escape_markup(value),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholder names in `content` that `values` would leave unfilled.
pub fn unfilled_placeholders(content: &str, values: &VariableMap) -> Vec<String> {
    super::extract_placeholders(content)
        .into_iter()
        .filter(|name| values.get(name).is_none_or(|value| value.is_empty()))
        .collect()
}

/// Escape `&`, `<` and `>` so text can be inserted into markup.
///
/// Ampersands are escaped first so the entities produced for `<` and `>` are
/// not escaped a second time.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
