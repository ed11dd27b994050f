//! The `pantheon quiz` command.

use std::path::PathBuf;

use anyhow::Result;

use super::OutputFormat;

pub async fn execute(config_path: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let config = super::load_config(config_path.as_deref())?;
    let engine = super::build_engine(&config)?;

    eprintln!(
        "Generating 20 questions with {}/{}...",
        engine.provider_name(),
        engine.config().model
    );
    let set = engine.generate_quiz_set().await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&set)?),
        OutputFormat::Text => {
            for (i, record) in set.questions.iter().enumerate() {
                super::print_question(i + 1, record);
            }
        }
    }

    Ok(())
}
