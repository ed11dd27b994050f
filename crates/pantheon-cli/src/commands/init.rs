//! The `pantheon init` command.

use std::path::Path;

use anyhow::{Context, Result};

const CONFIG_FILE: &str = "pantheon.toml";

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)
        .with_context(|| format!("failed to write {CONFIG_FILE}"))?;
    println!("Created {CONFIG_FILE}");

    println!("\nNext steps:");
    println!("  1. Export OPENAI_API_KEY, or point default_provider at ollama");
    println!("  2. Run: pantheon question --number 1 --category EI");
    println!("  3. Run: pantheon serve");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pantheon configuration

default_provider = "openai"
default_model = "gpt-4o-mini"
temperature = 0.7
max_tokens = 2048
max_retries = 3
retry_delay_ms = 1000

[server]
host = "127.0.0.1"
port = 8080

[providers.openai]
type = "openai"
api_key = "${OPENAI_API_KEY}"

[providers.ollama]
type = "ollama"
base_url = "http://localhost:11434"
"#;
