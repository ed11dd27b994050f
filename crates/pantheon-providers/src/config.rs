//! Configuration loading and provider factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pantheon_core::engine::QuizEngineConfig;
use pantheon_core::traits::LlmProvider;

use crate::ollama::OllamaProvider;
use crate::openai::OpenAiProvider;
use crate::retry::RetryingProvider;

/// Configuration for a single LLM provider.
///
/// Debug output masks API keys.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    OpenAI {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        org_id: Option<String>,
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
    Ollama {
        #[serde(default = "default_ollama_url")]
        base_url: String,
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::OpenAI {
                api_key: _,
                base_url,
                org_id,
                timeout_secs,
            } => f
                .debug_struct("OpenAI")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .field("org_id", org_id)
                .field("timeout_secs", timeout_secs)
                .finish(),
            ProviderConfig::Ollama {
                base_url,
                timeout_secs,
            } => f
                .debug_struct("Ollama")
                .field("base_url", base_url)
                .field("timeout_secs", timeout_secs)
                .finish(),
        }
    }
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Top-level pantheon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantheonConfig {
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Provider used for generation.
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Model passed to the provider.
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Max retries on transient provider errors.
    #[serde(default = "default_retries")]
    pub max_retries: u32,
    /// Initial delay between retries in milliseconds.
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_provider() -> String {
    "openai".to_string()
}
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}
fn default_temperature() -> f64 {
    0.7
}
fn default_max_tokens() -> u32 {
    2048
}
fn default_retries() -> u32 {
    3
}
fn default_retry_delay() -> u64 {
    1000
}

impl Default for PantheonConfig {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider(),
            default_model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            max_retries: default_retries(),
            retry_delay_ms: default_retry_delay(),
            server: ServerConfig::default(),
        }
    }
}

impl PantheonConfig {
    /// Engine settings derived from this configuration.
    pub fn engine_config(&self) -> QuizEngineConfig {
        QuizEngineConfig {
            model: self.default_model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            system_prompt_override: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
/// Unset variables resolve to the empty string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
    }
    result
}

fn resolve_provider_config(config: &ProviderConfig) -> ProviderConfig {
    match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            org_id,
            timeout_secs,
        } => ProviderConfig::OpenAI {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_deref().map(resolve_env_vars),
            org_id: org_id.as_deref().map(resolve_env_vars),
            timeout_secs: *timeout_secs,
        },
        ProviderConfig::Ollama {
            base_url,
            timeout_secs,
        } => ProviderConfig::Ollama {
            base_url: resolve_env_vars(base_url),
            timeout_secs: *timeout_secs,
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `pantheon.toml` in the current directory
/// 2. `~/.config/pantheon/config.toml`
///
/// `PANTHEON_OPENAI_KEY` overrides the key of the `openai` provider,
/// creating that provider if it is not configured.
pub fn load_config() -> Result<PantheonConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<PantheonConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("pantheon.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<PantheonConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => PantheonConfig::default(),
    };

    if let Ok(key) = std::env::var("PANTHEON_OPENAI_KEY") {
        apply_openai_key(&mut config, key);
    }

    config.providers = config
        .providers
        .iter()
        .map(|(k, v)| (k.clone(), resolve_provider_config(v)))
        .collect();

    Ok(config)
}

fn apply_openai_key(config: &mut PantheonConfig, key: String) {
    let entry = config
        .providers
        .entry("openai".into())
        .or_insert(ProviderConfig::OpenAI {
            api_key: String::new(),
            base_url: None,
            org_id: None,
            timeout_secs: None,
        });
    if let ProviderConfig::OpenAI { api_key, .. } = entry {
        *api_key = key;
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pantheon"))
}

/// Create a provider instance from its configuration.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn LlmProvider>> {
    match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            org_id,
            timeout_secs,
        } => Ok(Box::new(OpenAiProvider::with_timeout(
            api_key,
            base_url.clone(),
            org_id.clone(),
            timeout_secs.unwrap_or(crate::openai::DEFAULT_TIMEOUT_SECS),
        )?)),
        ProviderConfig::Ollama {
            base_url,
            timeout_secs,
        } => Ok(Box::new(OllamaProvider::with_timeout(
            base_url,
            timeout_secs.unwrap_or(crate::ollama::DEFAULT_TIMEOUT_SECS),
        )?)),
    }
}

/// Build the named provider (or the default one), wrapped with retries.
pub fn build_provider(config: &PantheonConfig, name: Option<&str>) -> Result<Arc<dyn LlmProvider>> {
    let name = name.unwrap_or(config.default_provider.as_str());
    let Some(provider_config) = config.providers.get(name) else {
        anyhow::bail!(
            "provider '{}' not found in config. Available: {:?}. Run `pantheon init` to create a config file.",
            name,
            config.providers.keys().collect::<Vec<_>>()
        );
    };

    let provider: Arc<dyn LlmProvider> = Arc::from(create_provider(provider_config)?);
    Ok(Arc::new(RetryingProvider::new(
        provider,
        config.max_retries,
        Duration::from_millis(config.retry_delay_ms),
    )))
}
