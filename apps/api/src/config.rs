use anyhow::{Context, Result};

use crate::chat::history::DEFAULT_HISTORY_WINDOW;
use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL};

/// Value shipped in the sample config; treated the same as no key at all.
const PLACEHOLDER_API_KEY: &str = "your-openai-api-key";

/// Application configuration loaded from environment variables.
/// Nothing is required: without a completion key the chat answers locally,
/// without a relay URL the contact endpoint reports itself unavailable.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub completion_api_key: Option<String>,
    pub completion_api_url: String,
    pub completion_model: String,
    pub history_window: usize,
    pub contact_relay_url: Option<String>,
    pub fact_base_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            completion_api_key: usable_api_key(optional_env("OPENAI_API_KEY")),
            completion_api_url: optional_env("COMPLETION_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            completion_model: optional_env("COMPLETION_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            history_window: optional_env("CHAT_HISTORY_WINDOW")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("CHAT_HISTORY_WINDOW must be a non-negative integer")?
                .unwrap_or(DEFAULT_HISTORY_WINDOW),
            contact_relay_url: optional_env("CONTACT_RELAY_URL"),
            fact_base_path: optional_env("FACT_BASE_PATH"),
        })
    }
}

/// Unset and blank variables both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Drops the sample placeholder so it never reaches the completion API.
fn usable_api_key(key: Option<String>) -> Option<String> {
    key.filter(|k| k != PLACEHOLDER_API_KEY)
}
