use anyhow::{Context, Result};

/// Default chat model used when CHEF_MODEL env var is not set
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub model: String,
}

impl Config {
    /// Load configuration from .env file and environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let openrouter_api_key =
            std::env::var("OPENROUTER_API_KEY").context("OPENROUTER_API_KEY not set")?;

        let model = std::env::var("CHEF_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            openrouter_api_key,
            model,
        })
    }

    /// Whether the API key is present in the environment at all
    ///
    /// Used by the web UI to decide between the chat input and a
    /// persistent warning before any handler runs.
    #[must_use]
    pub fn credential_present() -> bool {
        dotenvy::dotenv().ok();
        std::env::var("OPENROUTER_API_KEY").is_ok_and(|key| !key.is_empty())
    }
}
