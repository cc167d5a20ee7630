//! Template model for quickreply.
//!
//! A template is a reusable message body plus metadata. Content is markup
//! carrying `{placeholder}` tokens; see [`crate::engine`] for how content is
//! read. Templates are owned by the store; the engine never mutates them.
//!
//! # Stored Form
//!
//! ```text
//! {
//!   "id": "3f0c9a8e-...",
//!   "title": "Renewal reminder",
//!   "content": "Hi {client_name},<br>your policy renews on <b>{due_date}</b>.",
//!   "category": "renewal",
//!   "last_used": "2026-01-13T10:00:00Z"
//! }
//! ```

mod category;
mod draft;
mod search;
mod timestamp;


use crate::engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use category::Category;
pub use draft::TemplateDraft;
pub use search::search;

/// A stored message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Opaque unique identifier.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Markup content containing zero or more placeholders.
    pub content: String,

    /// Category from the fixed set.
    #[serde(default)]
    pub category: Category,

    /// When the template was last used. Never moves backwards.
    #[serde(
        default,
        alias = "lastUsed",
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_used: Option<DateTime<Utc>>,
}

impl Template {
    /// Generate a fresh template identifier.
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Distinct placeholder names in first-appearance order.
    pub fn placeholders(&self) -> Vec<String> {
        engine::extract_placeholders(&self.content)
    }

    /// Plain-text projection of the content.
    pub fn plain_text(&self) -> String {
        engine::to_plain_text(&self.content)
    }

    /// Record a successful use at `now`.
    ///
    /// Returns `false` and leaves the timestamp alone if `now` is earlier than
    /// the recorded value.
    pub fn touch(&mut self, now: DateTime<Utc>) -> bool {
        match self.last_used {
            Some(previous) if previous > now => false,
            _ => {
                self.last_used = Some(now);
                true
            }
        }
    }

    /// Convert pre-markup content in place. Returns whether anything changed.
    pub fn normalize_legacy(&mut self) -> bool {
        let normalized = engine::normalize_legacy_content(&self.content);
        if normalized == self.content {
            return false;
        }
        self.content = normalized;
        true
    }
}
