//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for quickreply.
///
/// This struct represents the contents of `config.yaml` in the data directory.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File name of the template collection, relative to the data directory.
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Content assistant settings.
    pub assistant: AssistantConfig,

    /// Clipboard tool overrides.
    pub clipboard: ClipboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            assistant: AssistantConfig::default(),
            clipboard: ClipboardConfig::default(),
        }
    }
}
