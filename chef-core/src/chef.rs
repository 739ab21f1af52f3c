//! Recipe request handler
//!
//! One utterance in, one chat turn out. The handler is total: whatever the
//! remote call does, the caller gets a string back and the session stays
//! usable for the next attempt.

use crate::generate::{Generator, OpenRouterClient};
use anyhow::Result;
use std::time::Instant;
use tracing::{error, info};

pub use crate::models::FAILURE_MESSAGE;

/// Maximum allowed dish request length to prevent abuse
const MAX_UTTERANCE_LENGTH: usize = 1000;

/// Build the single recipe instruction for a requested dish
///
/// Output stays opaque markdown; nothing downstream parses it.
#[must_use]
pub fn build_recipe_prompt(dish: &str) -> String {
    format!(
        "Create a detailed recipe for preparing {dish}. \
         The recipe should include: an introduction to the dish, \
         a list of ingredients with quantities (e.g., 2 cups, 100g), \
         step-by-step preparation instructions, cooking time, difficulty level, \
         and any special tips or variations. \
         Ensure the instructions are very clear and easy for a home cook to follow. \
         Format the output nicely, using markdown for headings and lists where appropriate."
    )
}

/// Validate the utterance and run one generation
async fn recipe_completion<G: Generator + ?Sized>(generator: &G, utterance: &str) -> Result<String> {
    let dish = utterance.trim();
    if dish.is_empty() {
        anyhow::bail!("Dish request cannot be empty");
    }
    if dish.len() > MAX_UTTERANCE_LENGTH {
        anyhow::bail!(
            "Dish request too long: {} characters (max {})",
            dish.len(),
            MAX_UTTERANCE_LENGTH
        );
    }

    let prompt = build_recipe_prompt(dish);
    generator.generate(&prompt).await
}

/// Handle one chat turn against any [`Generator`]
///
/// Returns the model's reply verbatim on success, [`FAILURE_MESSAGE`] on any
/// fault. Errors never cross this boundary.
pub async fn handle_with<G: Generator + ?Sized>(generator: &G, utterance: &str) -> String {
    let start = Instant::now();

    match recipe_completion(generator, utterance).await {
        Ok(text) => {
            info!(
                dish = %utterance.trim(),
                duration_ms = %start.elapsed().as_millis(),
                "Recipe turn completed"
            );
            text
        }
        Err(e) => {
            error!(
                dish = %utterance.trim(),
                error = ?e,
                duration_ms = %start.elapsed().as_millis(),
                "Recipe turn failed"
            );
            FAILURE_MESSAGE.to_string()
        }
    }
}

/// Handle one chat turn with the OpenRouter backend
///
/// The credential is passed straight into the client; no ambient
/// environment state is touched.
pub async fn handle(utterance: &str, credential: &str, model: &str) -> String {
    let client = OpenRouterClient::new(credential, model);
    handle_with(&client, utterance).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl Generator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            anyhow::bail!("connection refused")
        }
    }

    #[test]
    fn test_prompt_embeds_dish() {
        let prompt = build_recipe_prompt("Jollof Rice");
        assert!(prompt.contains("Jollof Rice"));
        assert!(prompt.contains("step-by-step"));
        assert!(prompt.contains("markdown"));
    }

    #[tokio::test]
    async fn test_success_returns_reply_verbatim() {
        let generator = FixedGenerator("## Jollof Rice\n\nA beloved West African dish...");
        let reply = handle_with(&generator, "Jollof Rice").await;
        assert_eq!(reply, "## Jollof Rice\n\nA beloved West African dish...");
    }

    #[tokio::test]
    async fn test_failure_returns_fixed_sentence() {
        let reply = handle_with(&FailingGenerator, "Jollof Rice").await;
        assert_eq!(reply, FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_empty_utterance_is_a_failed_turn() {
        let generator = FixedGenerator("unused");
        let reply = handle_with(&generator, "   ").await;
        assert_eq!(reply, FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_oversized_utterance_is_a_failed_turn() {
        let generator = FixedGenerator("unused");
        let long_dish = "x".repeat(MAX_UTTERANCE_LENGTH + 1);
        let reply = handle_with(&generator, &long_dish).await;
        assert_eq!(reply, FAILURE_MESSAGE);
    }
}
