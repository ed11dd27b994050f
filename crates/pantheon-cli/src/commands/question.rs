//! The `pantheon question` command.

use std::path::PathBuf;

use anyhow::Result;

use pantheon_core::model::Axis;

use super::OutputFormat;

pub async fn execute(
    number: usize,
    category: Axis,
    config_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    anyhow::ensure!(number >= 1, "question number must be at least 1");

    let config = super::load_config(config_path.as_deref())?;
    let engine = super::build_engine(&config)?;
    let record = engine.generate_question(number, category).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Text => super::print_question(number, &record),
    }

    Ok(())
}
