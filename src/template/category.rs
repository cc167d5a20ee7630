//! Template categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of template categories.
///
/// Unknown category strings in stored data deserialize to [`Category::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// First contact and introductions.
    Greeting,
    /// Checking back after a conversation.
    FollowUp,
    /// Sending or explaining a quote.
    Quote,
    /// Policy renewal reminders.
    Renewal,
    /// Claims status and paperwork.
    Claims,
    /// Anything else.
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: &'static [Category] = &[
        Category::Greeting,
        Category::FollowUp,
        Category::Quote,
        Category::Renewal,
        Category::Claims,
        Category::Other,
    ];

    /// Stable identifier, as stored and accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::FollowUp => "follow_up",
            Category::Quote => "quote",
            Category::Renewal => "renewal",
            Category::Claims => "claims",
            Category::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Greeting => "Greeting",
            Category::FollowUp => "Follow-up",
            Category::Quote => "Quote",
            Category::Renewal => "Renewal",
            Category::Claims => "Claims",
            Category::Other => "Other",
        }
    }

    /// Style token used when rendering the category badge.
    pub fn style(self) -> &'static str {
        match self {
            Category::Greeting => "green",
            Category::FollowUp => "blue",
            Category::Quote => "magenta",
            Category::Renewal => "yellow",
            Category::Claims => "red",
            Category::Other => "gray",
        }
    }

    /// Parse a category from its key or label, ignoring case.
    ///
    /// Hyphens and underscores are interchangeable (`follow-up` works).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let raw = s.trim().to_lowercase();
        let key = raw.replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == key || c.label().to_lowercase() == raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
