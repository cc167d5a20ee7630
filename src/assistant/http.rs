//! OpenAI-compatible chat-completions provider.

use super::{ContentAssistant, clean_reply, prompt};
use crate::config::AssistantConfig;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest slice of an error body quoted back to the user.
const ERROR_BODY_LIMIT: usize = 300;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Debug)]
pub struct HttpAssistant {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    prompt_template: Option<String>,
}

impl HttpAssistant {
    /// Build from config, reading the API key from the configured variable.
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError(format!(
                    "no API key for the content assistant\nFix: set {} or switch assistant.provider to 'command' in config.yaml.",
                    config.api_key_env
                ))
            })?;
        Self::new(config, api_key)
    }

    pub fn new(config: &AssistantConfig, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::AssistantError(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(config, api_key, client))
    }

    pub(crate) fn with_client(config: &AssistantConfig, api_key: String, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            prompt_template: config.prompt_template.clone(),
        }
    }
}

impl ContentAssistant for HttpAssistant {
    async fn rewrite(&self, content: &str, instruction: &str) -> Result<String> {
        let prompt = prompt::build_rewrite_prompt(self.prompt_template.as_deref(), content, instruction)?;
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: 0.3,
        };

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "sending rewrite request");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::AssistantError(format!("request to {} failed: {}", self.endpoint, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AssistantError(format!(
                "provider returned {}: {}",
                status,
                truncate(body.trim(), ERROR_BODY_LIMIT)
            )));
        }

        let reply: ChatResponse = response.json().await.map_err(|e| {
            AppError::AssistantError(format!("provider reply could not be read: {}", e))
        })?;

        extract_reply(reply)
    }
}

fn extract_reply(reply: ChatResponse) -> Result<String> {
    let content = reply
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::AssistantError("provider reply has no message".to_string()))?;
    clean_reply(&content)
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
