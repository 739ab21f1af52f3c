//! Shared HTTP client utilities
//!
//! This module provides a shared, lazily-initialized HTTP client for all API calls.
//! Using a single client allows connection pooling and avoids resource duplication.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Default HTTP timeout for API requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Global HTTP client for API calls (60s timeout)
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
///
/// This client has a 60-second timeout, suitable for chat completions.
/// Recipe generation is a single blocking request/response, so one pooled
/// client covers every outbound call.
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("chef-rs/1.0")
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}
