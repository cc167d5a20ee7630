//! Config loading, validation, and serialization.

use super::model::Config;
use super::types::AssistantProvider;
use crate::error::{AppError, Result};
use std::path::{Component, Path};

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AppError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            AppError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `store_file` must be a non-empty relative path that stays inside the data directory
    /// - `assistant.timeout_seconds` must be positive
    /// - the `http` provider needs an http(s) endpoint, a model, and a key variable name
    /// - the `command` provider needs a non-empty command
    /// - a custom `prompt_template` must render with the rewrite variables
    pub fn validate(&self) -> Result<()> {
        let store = Path::new(&self.store_file);
        if self.store_file.trim().is_empty()
            || store.is_absolute()
            || store
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AppError::ConfigError(format!(
                "config validation failed: store_file must be a relative path inside the data directory (found '{}')",
                self.store_file
            )));
        }

        let assistant = &self.assistant;
        if assistant.timeout_seconds == 0 {
            return Err(AppError::ConfigError(
                "config validation failed: assistant.timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        match assistant.provider {
            AssistantProvider::Http => {
                if !(assistant.endpoint.starts_with("https://")
                    || assistant.endpoint.starts_with("http://"))
                {
                    return Err(AppError::ConfigError(format!(
                        "config validation failed: assistant.endpoint must be an http(s) URL (found '{}')",
                        assistant.endpoint
                    )));
                }
                if assistant.model.trim().is_empty() {
                    return Err(AppError::ConfigError(
                        "config validation failed: assistant.model must be set".to_string(),
                    ));
                }
                if assistant.api_key_env.trim().is_empty() {
                    return Err(AppError::ConfigError(
                        "config validation failed: assistant.api_key_env must be set".to_string(),
                    ));
                }
            }
            AssistantProvider::Command => {
                let missing = assistant
                    .command
                    .as_deref()
                    .is_none_or(|c| c.trim().is_empty());
                if missing {
                    return Err(AppError::ConfigError(
                        "config validation failed: assistant.command is required when provider is 'command'"
                            .to_string(),
                    ));
                }
            }
        }

        if let Some(template) = &assistant.prompt_template {
            crate::assistant::prompt::check_prompt_template(template).map_err(|e| {
                AppError::ConfigError(format!(
                    "config validation failed: assistant.prompt_template: {}",
                    e
                ))
            })?;
        }

        Ok(())
    }
}
