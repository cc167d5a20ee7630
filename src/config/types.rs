//! Configuration sections, enums, and default values.

use serde::{Deserialize, Serialize};

/// Which backend performs content rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssistantProvider {
    /// OpenAI-compatible chat-completions endpoint (default).
    #[default]
    Http,
    /// A local command reading the prompt on stdin.
    Command,
}

/// Content assistant settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Backend used for rewrites.
    pub provider: AssistantProvider,

    /// Chat-completions URL for the `http` provider.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name sent to the `http` provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key for the `http` provider.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Command line for the `command` provider (shell-words parsed; no shell).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Maximum time to wait for a rewrite.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Custom rewrite prompt. Variables: `{content}`, `{instruction}`,
    /// `{placeholders}`; write `{{`/`}}` for literal braces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: AssistantProvider::default(),
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            command: None,
            timeout_seconds: default_timeout_seconds(),
            prompt_template: None,
        }
    }
}

/// Clipboard tool overrides.
///
/// When unset, rich text goes to the native clipboard and plain text to a
/// platform tool detected at copy time (`wl-copy`, `xclip`, `pbcopy`, or `clip`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Command that reads HTML on stdin and offers it as rich text. The plain
    /// text is passed in `QUICKREPLY_PLAIN_TEXT`. Unset uses the native clipboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_command: Option<String>,

    /// Command that reads plain text on stdin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_command: Option<String>,
}

pub(crate) fn default_store_file() -> String {
    "templates.json".to_string()
}
pub(crate) fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}
pub(crate) fn default_model() -> String {
    "gpt-4o-mini".to_string()
}
pub(crate) fn default_api_key_env() -> String {
    "QUICKREPLY_API_KEY".to_string()
}
pub(crate) fn default_timeout_seconds() -> u64 {
    60
}
