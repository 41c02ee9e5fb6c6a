mod corpus;
mod report;
mod suggest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::suggest::SuggestArgs;

#[derive(Debug, Parser)]
#[command(name = "namkaran")]
#[command(about = "Astrological baby-name suggestions from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute a consultation for a birth date
    Suggest(SuggestArgs),
    /// Re-open a saved JSON result without recomputing it
    Show {
        /// Path to a JSON file written by `suggest --json`
        path: PathBuf,

        /// Print the normalized JSON instead of the report
        #[arg(long)]
        json: bool,
    },
    /// List the partitions of the configured name corpus
    Corpus {
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = namkaran_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Suggest(args) => suggest::run_suggest(&config, args).await,
        Commands::Show { path, json } => report::run_show(&path, json),
        Commands::Corpus { json } => corpus::run_corpus(&config, json),
    }
}
