//! Compose session: the active template and the values typed for it.
//!
//! The variable map belongs to whichever template is active. Switching to a
//! different template clears it; re-activating the same template (for
//! example after its content was edited) keeps what was already typed.

use crate::clipboard::ClipboardPayload;
use crate::engine::{self, VariableMap};
use crate::template::Template;

#[derive(Debug, Default)]
pub struct ComposeSession {
    active: Option<Template>,
    values: VariableMap,
}

impl ComposeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `template` the active one.
    pub fn activate(&mut self, template: &Template) {
        let switching = self.active.as_ref().is_none_or(|t| t.id != template.id);
        if switching {
            tracing::debug!(template = %template.id, "activating template, clearing values");
            self.values.clear();
        }
        self.active = Some(template.clone());
    }

    pub fn active(&self) -> Option<&Template> {
        self.active.as_ref()
    }

    pub fn values(&self) -> &VariableMap {
        &self.values
    }

    /// Record a value. Returns whether `name` is a placeholder of the active template.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        let known = self.placeholders().contains(&name);
        self.values.insert(name, value.into());
        known
    }

    /// Placeholders of the active template, in first-appearance order.
    pub fn placeholders(&self) -> Vec<String> {
        self.active
            .as_ref()
            .map(Template::placeholders)
            .unwrap_or_default()
    }

    /// Placeholders still shown literally in the preview.
    pub fn unfilled(&self) -> Vec<String> {
        self.active
            .as_ref()
            .map(|t| engine::unfilled_placeholders(&t.content, &self.values))
            .unwrap_or_default()
    }

    /// The active template's content with current values substituted.
    pub fn preview(&self) -> Option<String> {
        self.active
            .as_ref()
            .map(|t| engine::substitute(&t.content, &self.values))
    }

    /// Clipboard payload for the current preview.
    pub fn payload(&self) -> Option<ClipboardPayload> {
        self.preview().map(ClipboardPayload::from_markup)
    }
}
