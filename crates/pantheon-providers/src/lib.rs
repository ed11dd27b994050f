//! pantheon-providers: LLM provider integrations.
//!
//! Implements the `LlmProvider` trait for OpenAI-compatible endpoints and
//! Ollama, plus a retry wrapper, a mock for tests, and TOML configuration.

pub mod config;
pub mod error;
mod http;
pub mod mock;
pub mod ollama;
pub mod openai;
pub mod retry;

pub use config::{
    build_provider, create_provider, load_config, load_config_from, PantheonConfig,
    ProviderConfig, ServerConfig,
};
pub use error::ProviderError;
pub use retry::RetryingProvider;
