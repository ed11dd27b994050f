pub mod init;
pub mod list_models;
pub mod personas;
pub mod prompt;
pub mod question;
pub mod quiz;
pub mod result;
pub mod serve;

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

use pantheon_core::engine::QuizEngine;
use pantheon_core::model::QuestionRecord;
use pantheon_providers::config::{build_provider, PantheonConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Build an engine from the configured default provider.
pub fn build_engine(config: &PantheonConfig) -> Result<QuizEngine> {
    let provider = build_provider(config, None)?;
    Ok(QuizEngine::new(provider, config.engine_config()))
}

pub fn load_config(path: Option<&Path>) -> Result<PantheonConfig> {
    pantheon_providers::config::load_config_from(path)
}

/// Render one question as indented text.
pub fn print_question(number: usize, record: &QuestionRecord) {
    println!("{number:>2}. [{}] {}", record.axis(), record.question);
    for (label, answer) in ["A", "B"].iter().zip(&record.answers) {
        println!("    {label}) {} ({})", answer.text, answer.trait_letter);
    }
}
