use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_AI_TIMEOUT_SECS: u64 = 20;

/// Application configuration loaded from environment variables.
/// Nothing is required; AI drafting is off without an API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub ai_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            ai_timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let ai_timeout_secs = match lookup("AI_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("AI_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_AI_TIMEOUT_SECS,
        };
        anyhow::ensure!(ai_timeout_secs > 0, "AI_TIMEOUT_SECS must be greater than zero");

        Ok(Config {
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            ai_timeout: Duration::from_secs(ai_timeout_secs),
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
