use chef_core::{FAILURE_MESSAGE, chef};

/// Run one recipe turn for the web layer
///
/// Total like the core handler: a missing config at request time is logged
/// and degrades to the fixed failure sentence.
pub async fn recipe_turn(dish: &str) -> String {
    match super::config::get() {
        Ok(config) => chef::handle(dish, &config.openrouter_api_key, &config.model).await,
        Err(e) => {
            tracing::error!(error = ?e, "Recipe turn refused: configuration unavailable");
            FAILURE_MESSAGE.to_string()
        }
    }
}

/// Whether the provider credential is configured at all
pub fn credential_configured() -> bool {
    chef_core::Config::credential_present()
}
