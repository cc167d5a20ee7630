//! Content assistant: AI-assisted rewriting of template content.
//!
//! A rewrite sends the template's markup and a free-text instruction to a
//! provider and returns the provider's markup. Two providers exist:
//!
//! - `http`: an OpenAI-compatible chat-completions endpoint
//! - `command`: a local command that reads the prompt on stdin
//!
//! The result is checked for dropped placeholders, but only advisorily: the
//! caller decides whether to keep a rewrite that lost some.

pub mod command;
pub mod http;
pub mod prompt;

use crate::config::{AssistantConfig, AssistantProvider};
use crate::engine;
use crate::error::{AppError, Result};

pub use command::CommandAssistant;
pub use http::HttpAssistant;

/// Something that can rewrite template content.
pub trait ContentAssistant {
    /// Rewrite `content` according to `instruction`, returning new markup.
    fn rewrite(&self, content: &str, instruction: &str) -> impl Future<Output = Result<String>> + Send;
}

/// The provider selected in config.
#[derive(Debug)]
pub enum Assistant {
    Http(HttpAssistant),
    Command(CommandAssistant),
}

impl Assistant {
    /// Build the configured provider.
    ///
    /// Fails with a configuration error when the provider cannot be used
    /// (for example, the HTTP API key is not set), before any request is made.
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        match config.provider {
            AssistantProvider::Http => HttpAssistant::from_config(config).map(Assistant::Http),
            AssistantProvider::Command => {
                CommandAssistant::from_config(config).map(Assistant::Command)
            }
        }
    }
}

impl ContentAssistant for Assistant {
    async fn rewrite(&self, content: &str, instruction: &str) -> Result<String> {
        match self {
            Assistant::Http(assistant) => assistant.rewrite(content, instruction).await,
            Assistant::Command(assistant) => assistant.rewrite(content, instruction).await,
        }
    }
}

/// A completed rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Rewritten markup.
    pub content: String,
    /// Placeholders of the original that the rewrite no longer contains.
    pub missing_placeholders: Vec<String>,
}

/// Rewrite `content` and check the result for dropped placeholders.
pub async fn rewrite_content<A: ContentAssistant>(
    assistant: &A,
    content: &str,
    instruction: &str,
) -> Result<RewriteOutcome> {
    if instruction.trim().is_empty() {
        return Err(AppError::UserError(
            "a rewrite instruction is required".to_string(),
        ));
    }

    let rewritten = assistant.rewrite(content, instruction).await?;
    let missing = engine::missing_placeholders(content, &rewritten);
    if !missing.is_empty() {
        tracing::warn!(missing = ?missing, "rewrite dropped placeholders");
    }

    Ok(RewriteOutcome {
        content: rewritten,
        missing_placeholders: missing,
    })
}

/// Normalize a provider reply: strip a surrounding code fence and whitespace.
///
/// An empty reply is an error.
pub(crate) fn clean_reply(raw: &str) -> Result<String> {
    let reply = strip_code_fences(raw);
    if reply.is_empty() {
        return Err(AppError::AssistantError(
            "provider returned an empty reply".to_string(),
        ));
    }
    Ok(reply.to_string())
}

fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    // The opening fence line may carry a language tag.
    match inner.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => inner.trim(),
    }
}
