// Models are always available
pub mod models;

// Server-only modules
#[cfg(feature = "server")]
pub mod chef;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod generate;
#[cfg(feature = "server")]
pub mod http;

// Re-export commonly used types
pub use models::{FAILURE_MESSAGE, Role, SEED_GREETING, Transcript, Turn};

#[cfg(feature = "server")]
pub use config::Config;
#[cfg(feature = "server")]
pub use generate::{Generator, OpenRouterClient};
