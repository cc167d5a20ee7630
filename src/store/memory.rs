//! In-memory repository for tests.

use super::{TemplateRepository, default_templates};
use crate::error::{AppError, Result};
use crate::template::Template;
use std::sync::Mutex;

/// Repository backed by a vector, optionally refusing every save.
#[derive(Debug, Default)]
pub struct MemoryStore {
    templates: Mutex<Option<Vec<Template>>>,
    fail_saves: bool,
}

impl MemoryStore {
    /// A store that already holds `templates`.
    pub fn with(templates: Vec<Template>) -> Self {
        Self {
            templates: Mutex::new(Some(templates)),
            fail_saves: false,
        }
    }

    /// An empty store whose saves always fail.
    pub fn failing() -> Self {
        Self {
            templates: Mutex::new(None),
            fail_saves: true,
        }
    }

    /// What was last saved (or seeded), if anything.
    pub fn saved(&self) -> Option<Vec<Template>> {
        self.templates
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

impl TemplateRepository for MemoryStore {
    fn load_all(&self) -> Vec<Template> {
        self.saved().unwrap_or_else(default_templates)
    }

    fn try_save_all(&self, templates: &[Template]) -> Result<()> {
        if self.fail_saves {
            return Err(AppError::StorageError("memory store is read-only".to_string()));
        }
        *self
            .templates
            .lock()
            .unwrap_or_else(|poison| poison.into_inner()) = Some(templates.to_vec());
        Ok(())
    }
}
