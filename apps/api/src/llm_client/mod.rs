/// Completion client — the single point of entry for remote chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// The chat service talks to it only through the `CompletionBackend` trait so
/// the local responder can stand in whenever it is unavailable.
///
/// One request per call. There is no retry loop: a failed attempt is reported
/// immediately and the caller falls back to the local answer.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::chat::history::ConversationTurn;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Every variant means "completion unavailable" to the chat service.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Completion returned empty content")]
    EmptyContent,
}

/// A remote model that can answer a chat turn.
///
/// Carried in `AppState` as `Option<Arc<dyn CompletionBackend>>`; `None` when no
/// credential is configured.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        history: &[ConversationTurn],
        user_message: &str,
    ) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Text of the first choice, if it has any non-blank content.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// OpenAI-compatible chat completions over HTTPS.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl CompletionClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Result<Self, CompletionError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            api_url,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// System prompt first, then the history window, then the new user message.
fn build_messages<'a>(
    system: &'a str,
    history: &'a [ConversationTurn],
    user_message: &'a str,
) -> Vec<ChatMessage<'a>> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage {
        role: "system",
        content: system,
    });
    messages.extend(history.iter().map(|turn| ChatMessage {
        role: turn.role.as_str(),
        content: &turn.content,
    }));
    messages.push(ChatMessage {
        role: "user",
        content: user_message,
    });
    messages
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(
        &self,
        system: &str,
        history: &[ConversationTurn],
        user_message: &str,
    ) -> Result<String, CompletionError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: build_messages(system, history, user_message),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        parsed
            .text()
            .map(str::to_string)
            .ok_or(CompletionError::EmptyContent)
    }
}
