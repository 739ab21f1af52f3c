//! Integration tests for the recipe request handler
//!
//! HTTP-level cases run against a local mock server. The live-API case is
//! ignored by default; run with:
//! cargo test -p chef-core --test recipe_handler -- --ignored --nocapture

use chef_core::chef::{self, FAILURE_MESSAGE};
use chef_core::generate::{Generator, OpenRouterClient};

fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": { "role": "assistant", "content": content }
        }],
        "usage": { "prompt_tokens": 50, "completion_tokens": 400, "total_tokens": 450 }
    })
    .to_string()
}

#[tokio::test]
async fn handler_returns_mock_reply_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let reply = "## Spaghetti Carbonara\n\n### Ingredients\n- 200g spaghetti";

    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(reply))
        .create_async()
        .await;

    let client =
        OpenRouterClient::new("test-key", "google/gemini-2.0-flash-001").with_base_url(server.url());

    let result = chef::handle_with(&client, "Spaghetti Carbonara").await;
    assert_eq!(result, reply);

    mock.assert_async().await;
}

#[tokio::test]
async fn handler_converts_provider_error_to_fixed_sentence() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid API key"}}"#)
        .create_async()
        .await;

    let client = OpenRouterClient::new("bad-key", "google/gemini-2.0-flash-001")
        .with_base_url(server.url());

    let result = chef::handle_with(&client, "Jollof Rice").await;
    assert_eq!(result, FAILURE_MESSAGE);

    mock.assert_async().await;
}

#[tokio::test]
async fn handler_converts_malformed_payload_to_fixed_sentence() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let client =
        OpenRouterClient::new("test-key", "google/gemini-2.0-flash-001").with_base_url(server.url());

    let result = chef::handle_with(&client, "Jollof Rice").await;
    assert_eq!(result, FAILURE_MESSAGE);
}

#[tokio::test]
async fn handler_converts_empty_choices_to_fixed_sentence() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let client =
        OpenRouterClient::new("test-key", "google/gemini-2.0-flash-001").with_base_url(server.url());

    let result = chef::handle_with(&client, "Jollof Rice").await;
    assert_eq!(result, FAILURE_MESSAGE);
}

// Credential travels only in the request header; the handler must not need
// or touch OPENROUTER_API_KEY in the process environment.
#[tokio::test]
async fn credential_is_threaded_explicitly_not_via_environment() {
    let ambient_key = std::env::var("OPENROUTER_API_KEY").ok();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer explicit-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("A fine recipe."))
        .create_async()
        .await;

    let client = OpenRouterClient::new("explicit-key", "google/gemini-2.0-flash-001")
        .with_base_url(server.url());

    let result = chef::handle_with(&client, "Pancakes").await;
    assert_eq!(result, "A fine recipe.");
    // The ambient slot is exactly as it was before the call
    assert_eq!(std::env::var("OPENROUTER_API_KEY").ok(), ambient_key);

    mock.assert_async().await;
}

#[tokio::test]
#[ignore = "requires OPENROUTER_API_KEY and network access"]
async fn live_recipe_request() {
    let config = chef_core::Config::from_env().expect("OPENROUTER_API_KEY must be set");
    let client = OpenRouterClient::new(&config.openrouter_api_key, &config.model);

    let result = client
        .generate(&chef::build_recipe_prompt("Jollof Rice"))
        .await
        .expect("live call failed");

    println!("--- live reply ---\n{result}");
    assert!(!result.trim().is_empty());
}
