//! JSON file repository.

use super::{TemplateRepository, default_templates};
use crate::error::{AppError, Result};
use crate::fs::atomic_write_file;
use crate::template::Template;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version written by this build.
pub const CURRENT_VERSION: u32 = 1;

/// A parsed template document and the layout version it was stored with.
#[derive(Debug, Clone)]
pub struct StoredCollection {
    /// 0 for the legacy bare-array layout.
    pub version: u32,
    pub templates: Vec<Template>,
}

impl StoredCollection {
    /// Whether the document predates the versioned layout.
    pub fn is_legacy(&self) -> bool {
        self.version == 0
    }

    /// Templates in current form; legacy content gets its line breaks converted.
    pub fn into_current(self) -> Vec<Template> {
        let legacy = self.is_legacy();
        let mut templates = self.templates;
        if legacy {
            let converted = templates
                .iter_mut()
                .map(Template::normalize_legacy)
                .filter(|&changed| changed)
                .count();
            tracing::info!(converted, "normalized legacy template content");
        }
        templates
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Envelope { version: u32, templates: Vec<Template> },
    Legacy(Vec<Template>),
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    templates: &'a [Template],
}

/// Templates stored as one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored document as-is.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    pub fn read(&self) -> Result<Option<StoredCollection>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::StorageError(format!(
                "failed to read template store '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Self::parse(&content).map(Some)
    }

    /// Parse a stored document.
    pub fn parse(json: &str) -> Result<StoredCollection> {
        let document: StoredDocument = serde_json::from_str(json).map_err(|e| {
            AppError::StorageError(format!("template store is not valid: {}", e))
        })?;

        let collection = match document {
            StoredDocument::Envelope { version, templates } => StoredCollection { version, templates },
            StoredDocument::Legacy(templates) => StoredCollection {
                version: 0,
                templates,
            },
        };

        if collection.version > CURRENT_VERSION {
            return Err(AppError::StorageError(format!(
                "template store version {} is newer than supported version {}",
                collection.version, CURRENT_VERSION
            )));
        }

        Ok(collection)
    }

    /// Serialize templates in the current versioned layout.
    pub fn render(templates: &[Template]) -> Result<String> {
        let envelope = EnvelopeRef {
            version: CURRENT_VERSION,
            templates,
        };
        serde_json::to_string_pretty(&envelope).map_err(|e| {
            AppError::StorageError(format!("failed to serialize templates: {}", e))
        })
    }
}

impl TemplateRepository for JsonFileStore {
    fn load_all(&self) -> Vec<Template> {
        match self.read() {
            Ok(Some(collection)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    version = collection.version,
                    count = collection.templates.len(),
                    "loaded templates"
                );
                collection.into_current()
            }
            Ok(None) => {
                tracing::info!(path = %self.path.display(), "no stored templates, using defaults");
                default_templates()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "template store unreadable, using defaults"
                );
                default_templates()
            }
        }
    }

    fn try_load_all(&self) -> Result<Vec<Template>> {
        match self.read() {
            Ok(Some(collection)) => Ok(collection.into_current()),
            Ok(None) => Ok(default_templates()),
            Err(AppError::StorageError(msg)) => Err(AppError::StorageError(format!(
                "{}\nFix: repair '{}' or run `quickreply reset --yes` to start over.",
                msg,
                self.path.display()
            ))),
            Err(e) => Err(e),
        }
    }

    fn try_save_all(&self, templates: &[Template]) -> Result<()> {
        let json = Self::render(templates)?;
        atomic_write_file(&self.path, &format!("{}\n", json))?;
        tracing::debug!(path = %self.path.display(), count = templates.len(), "saved templates");
        Ok(())
    }
}
