//! pantheon CLI: serve the quiz API, generate questions, and score tallies.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pantheon_core::model::{AnswerTally, Axis};

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "pantheon",
    version,
    about = "LLM-backed MBTI quiz with Greek-deity personas"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Bind address (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides server.port)
        #[arg(long)]
        port: Option<u16>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate a full 20-question set
    Quiz {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate a single question
    Question {
        /// 1-based question number (selects the topic)
        #[arg(long)]
        number: usize,

        /// Axis to probe: EI, SN, TF or JP
        #[arg(long)]
        category: Axis,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Score an answer tally offline
    Result {
        /// Counts per letter, e.g. "E=3,I=1,S=0,N=4,T=2,F=2,J=1,P=5"
        #[arg(long)]
        tally: AnswerTally,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List all sixteen personas
    Personas,

    /// Print the generation prompt
    Prompt {
        /// Question number for the single-question prompt
        #[arg(long, requires = "category")]
        number: Option<usize>,

        /// Axis for the single-question prompt
        #[arg(long, requires = "number")]
        category: Option<Axis>,
    },

    /// List available models
    ListModels {
        /// Filter to specific provider
        #[arg(long)]
        provider: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter pantheon.toml
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pantheon=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port, config } => {
            commands::serve::execute(host, port, config).await
        }
        Commands::Quiz { config, format } => commands::quiz::execute(config, format).await,
        Commands::Question {
            number,
            category,
            config,
            format,
        } => commands::question::execute(number, category, config, format).await,
        Commands::Result { tally, format } => commands::result::execute(&tally, format),
        Commands::Personas => commands::personas::execute(),
        Commands::Prompt { number, category } => commands::prompt::execute(number, category),
        Commands::ListModels { provider, config } => {
            commands::list_models::execute(provider, config).await
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
