//! Remote text-generation seam
//!
//! The original app churned through several wrappers around the same remote
//! call. Here there is exactly one narrow interface, [`Generator`], with the
//! OpenRouter chat-completions client as the swappable implementation behind
//! it. The credential is threaded explicitly through the client constructor;
//! nothing touches process environment state during a call.

use crate::http::get_client;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};

/// Default OpenRouter chat completions endpoint
const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Temperature for LLM sampling
const LLM_TEMPERATURE: f32 = 0.7;

/// Maximum tokens for a recipe response
const MAX_RESPONSE_TOKENS: u32 = 1200;

/// One synchronous prompt-in, text-out exchange with a remote model
#[async_trait]
pub trait Generator: Send + Sync {
    /// Submit a prompt and return the model's reply verbatim
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Request payload for the OpenRouter chat completions API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new chat request with a single user message
    pub fn new(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(content)],
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the temperature for sampling
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set the maximum number of tokens in the response
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }
}

/// A message in the chat conversation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Response from the OpenRouter chat completions API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Get the content of the first choice, if available
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }

    /// Get the content of the first choice, or an error if not available
    pub fn content_or_err(&self) -> Result<&str> {
        self.content()
            .context("No response content from API (empty choices)")
    }
}

/// A single response choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message content in a response choice
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// OpenRouter-backed [`Generator`]
///
/// Holds the API key and model name for its lifetime; the key travels only
/// in the Authorization header of each request.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenRouterClient {
    /// Create a client for the given credential and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: OPENROUTER_API_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests use a local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send a chat completion request and return the parsed response
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let client = get_client();

        let response = client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to OpenRouter API")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenRouter API error {}: {}", status, text);
        }

        response
            .json()
            .await
            .context("Failed to parse OpenRouter API response")
    }
}

#[async_trait]
impl Generator for OpenRouterClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let start = Instant::now();

        let request = ChatRequest::new(&self.model, prompt)
            .temperature(LLM_TEMPERATURE)
            .max_tokens(MAX_RESPONSE_TOKENS);

        let result = self.chat_completion(&request).await;
        let duration_ms = start.elapsed().as_millis();

        match result {
            Ok(response) => {
                let content = response.content_or_err()?.to_string();
                info!(
                    model = %self.model,
                    duration_ms = %duration_ms,
                    "LLM call completed"
                );
                Ok(content)
            }
            Err(e) => {
                warn!(
                    model = %self.model,
                    duration_ms = %duration_ms,
                    "LLM API error"
                );
                Err(e)
            }
        }
    }
}
