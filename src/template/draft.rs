//! Validated construction and editing of templates.

use super::{Category, Template};
use crate::engine;
use crate::error::{AppError, Result};

/// User-entered template fields awaiting validation.
///
/// A draft is only turned into (or applied to) a template when both the title
/// and the content are non-blank. A rejected draft mutates nothing, so the
/// caller can keep the in-progress edit and let the user correct it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
}

impl TemplateDraft {
    /// Start a draft from an existing template.
    pub fn from_template(template: &Template) -> Self {
        Self {
            title: template.title.clone(),
            content: template.content.clone(),
            category: template.category,
        }
    }

    /// Check that the draft can be saved.
    ///
    /// Content counts as blank when its plain-text projection is only
    /// whitespace, so `<p><br></p>` is rejected too.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "template title is required".to_string(),
            ));
        }

        if engine::to_plain_text(&self.content).trim().is_empty() {
            return Err(AppError::ValidationError(
                "template content is required".to_string(),
            ));
        }

        Ok(())
    }

    /// Build a new template with a fresh identifier.
    pub fn into_template(self) -> Result<Template> {
        self.validate()?;
        Ok(Template {
            id: Template::new_id(),
            title: self.title.trim().to_string(),
            content: self.content,
            category: self.category,
            last_used: None,
        })
    }

    /// Overwrite an existing template's editable fields.
    ///
    /// The identifier and last-used timestamp are kept.
    pub fn apply_to(self, template: &mut Template) -> Result<()> {
        self.validate()?;
        template.title = self.title.trim().to_string();
        template.content = self.content;
        template.category = self.category;
        Ok(())
    }
}
