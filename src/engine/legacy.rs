//! Migration of content authored before markup support.

use regex::Regex;
use std::sync::LazyLock;

/// Anything shaped like an opening, closing, or self-closing tag.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").expect("Invalid tag regex"));

/// Whether `content` contains at least one markup tag.
pub fn contains_markup(content: &str) -> bool {
    TAG_REGEX.is_match(content)
}

/// Convert plain-text newlines into `<br>` tags for tag-free content.
///
/// Content that already contains markup is returned unchanged, even when it
/// also contains raw newlines. `\r\n` counts as a single newline.
pub fn normalize_legacy_content(content: &str) -> String {
    if contains_markup(content) || !content.contains('\n') {
        return content.to_string();
    }

    content.replace("\r\n", "\n").replace('\n', "<br>")
}
