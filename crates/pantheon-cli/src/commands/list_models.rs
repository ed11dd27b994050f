//! The `pantheon list-models` command.

use std::path::PathBuf;

use anyhow::Result;

use pantheon_core::traits::ModelInfo;
use pantheon_providers::config::ProviderConfig;
use pantheon_providers::create_provider;
use pantheon_providers::ollama::OllamaProvider;

pub async fn execute(provider_filter: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path.as_deref())?;

    let mut names: Vec<&String> = config.providers.keys().collect();
    names.sort();

    let mut found_any = false;

    for name in names {
        if provider_filter.as_ref().is_some_and(|filter| filter != name) {
            continue;
        }

        let provider_config = &config.providers[name];
        let models = match provider_config {
            // Ollama only knows its models at runtime.
            ProviderConfig::Ollama { base_url, .. } => {
                match OllamaProvider::new(base_url)?.list_models_async().await {
                    Ok(models) => models,
                    Err(e) => {
                        eprintln!("Provider {name}: {e:#}");
                        continue;
                    }
                }
            }
            ProviderConfig::OpenAI { .. } => create_provider(provider_config)?.available_models(),
        };

        if !models.is_empty() {
            found_any = true;
            print_models(name, &models);
        }
    }

    if !found_any {
        println!("No providers configured. Run `pantheon init` to create a config file.");
    }

    Ok(())
}

fn print_models(provider: &str, models: &[ModelInfo]) {
    println!("Provider: {provider}");
    for model in models {
        if model.max_context > 0 {
            println!(
                "  {} ({}, {}K context)",
                model.id,
                model.name,
                model.max_context / 1000
            );
        } else {
            println!("  {}", model.id);
        }
    }
    println!();
}
