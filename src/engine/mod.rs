//! Placeholder engine for template content.
//!
//! Template content is markup text (a small tag vocabulary: bold, italic,
//! underline, line breaks, unordered lists, generic containers) carrying
//! named placeholders:
//!
//! ```text
//! <b>Hi {client_name}</b>,<br>your policy {policy_number} renews on {due_date}.
//! ```
//!
//! This module provides:
//!
//! - **Extraction**: the distinct placeholder names, in first-appearance order
//! - **Substitution**: filling placeholders with escaped user values
//! - **Plain text**: a tag-stripped projection for search and clipboard fallback
//! - **Legacy normalization**: converting pre-markup content to markup line breaks
//!
//! Placeholders only ever appear in text nodes, never inside tag syntax, so a
//! brace-delimited scan over the raw text is sufficient; there is no markup
//! parser here. Every function is pure and total: no input string produces an
//! error, and unbalanced braces simply pass through as literal text.

mod extract;
mod legacy;
mod plain_text;
mod substitute;


use std::collections::HashMap;

/// Placeholder name to user-supplied value.
pub type VariableMap = HashMap<String, String>;

pub use extract::{extract_placeholders, missing_placeholders};
pub use legacy::{contains_markup, normalize_legacy_content};
pub use plain_text::to_plain_text;
pub use substitute::{escape_markup, substitute, unfilled_placeholders};

/// Helper to create a variable map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> VariableMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
