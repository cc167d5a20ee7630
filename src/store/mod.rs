//! Template persistence for quickreply.
//!
//! The template collection is stored as one JSON document under a fixed
//! storage key (`templates.json` in the data directory by default). Commands
//! receive a [`TemplateRepository`] rather than touching the file directly.
//!
//! # Document Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "templates": [ { "id": "...", "title": "...", "content": "...", ... } ]
//! }
//! ```
//!
//! A bare JSON array of templates is the legacy (version 0) layout. It is
//! still read, and its content is passed through legacy normalization so
//! plain-text line breaks render in markup previews.

mod defaults;
mod json;
#[cfg(test)]
mod memory;

use crate::error::Result;
use crate::template::Template;

pub use defaults::default_templates;
pub use json::{CURRENT_VERSION, JsonFileStore, StoredCollection};
#[cfg(test)]
pub use memory::MemoryStore;

/// Durable template collection with load-or-default semantics.
pub trait TemplateRepository {
    /// Load every template.
    ///
    /// Never fails: when nothing is stored, or the stored data cannot be read,
    /// the built-in default set is returned instead.
    fn load_all(&self) -> Vec<Template>;

    /// Load every template for modification.
    ///
    /// Like [`load_all`](Self::load_all) when nothing is stored, but stored
    /// data that cannot be read is an error, so a write-back never replaces
    /// it with the defaults.
    fn try_load_all(&self) -> Result<Vec<Template>> {
        Ok(self.load_all())
    }

    /// Replace the stored collection, reporting failure to the caller.
    fn try_save_all(&self, templates: &[Template]) -> Result<()>;

    /// Replace the stored collection, best effort.
    ///
    /// Failures are logged and swallowed.
    fn save_all(&self, templates: &[Template]) {
        if let Err(e) = self.try_save_all(templates) {
            tracing::warn!(error = %e, "failed to save templates");
        }
    }
}

/// Find a template by exact id, or by a unique id prefix.
pub fn find_index(templates: &[Template], id: &str) -> Option<usize> {
    if let Some(pos) = templates.iter().position(|t| t.id == id) {
        return Some(pos);
    }

    let mut prefixed = templates
        .iter()
        .enumerate()
        .filter(|(_, t)| !id.is_empty() && t.id.starts_with(id));
    match (prefixed.next(), prefixed.next()) {
        (Some((pos, _)), None) => Some(pos),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Category;

    fn named(id: &str) -> Template {
        Template {
            id: id.to_string(),
            title: id.to_uppercase(),
            content: "x".to_string(),
            category: Category::Other,
            last_used: None,
        }
    }

    #[test]
    fn test_find_index_exact_match_wins() {
        let templates = vec![named("abc"), named("abcdef")];
        assert_eq!(find_index(&templates, "abc"), Some(0));
        assert_eq!(find_index(&templates, "abcdef"), Some(1));
    }

    #[test]
    fn test_find_index_unique_prefix() {
        let templates = vec![named("3f0c9a8e-1111"), named("7d2b-2222")];
        assert_eq!(find_index(&templates, "3f0c"), Some(0));
        assert_eq!(find_index(&templates, "7d"), Some(1));
    }

    #[test]
    fn test_find_index_ambiguous_or_missing() {
        let templates = vec![named("abc-1"), named("abc-2")];
        assert_eq!(find_index(&templates, "abc"), None);
        assert_eq!(find_index(&templates, "zzz"), None);
        assert_eq!(find_index(&templates, ""), None);
    }

    #[test]
    fn test_save_all_swallows_failures() {
        let store = MemoryStore::failing();
        store.save_all(&[named("a")]);
        assert!(store.saved().is_none());
    }
}
