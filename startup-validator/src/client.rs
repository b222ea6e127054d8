//! Completion service boundary.
//!
//! [`CompletionClient`] is the single seam between the analysis workflow and the
//! remote model: one prompt in, the first choice's text out. [`GroqClient`] talks
//! to Groq's OpenAI-compatible `chat/completions` endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response contained no choices")]
    NoChoices,

    #[error("first choice has no message content")]
    NoContent,

    /// Raised by test doubles and alternative backends
    #[error("{0}")]
    Other(String),
}

/// Single-turn text completion
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as one user message to `model` and return the first
    /// choice's message text verbatim.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatMessageResponse {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Take the first choice's text, untouched
    pub(crate) fn into_first_text(self) -> Result<String, CompletionError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::NoChoices)?;
        choice.message.content.ok_or(CompletionError::NoContent)
    }
}

/// Build the single-user-message request body
pub(crate) fn single_turn_request<'a>(model: &'a str, prompt: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
    }
}

/// Groq chat-completions client
pub struct GroqClient {
    api_key: String,
    api_base: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        let body = single_turn_request(model, prompt);

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, body });
        }

        let parsed: ChatResponse = res.json().await?;
        parsed.into_first_text()
    }
}
