//! apicheck CLI - end-to-end checks against the questionnaire API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod report;

#[derive(Parser)]
#[command(name = "apicheck")]
#[command(about = "Sequential end-to-end checks for the questionnaire API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every stage against the API
    Run {
        /// Configuration file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "apicheck.toml")]
        config: PathBuf,
        /// Override the API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Override the pause between stages, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// List the stages in execution order
    Stages,
    /// Print the effective configuration
    Config {
        /// Configuration file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "apicheck.toml")]
        config: PathBuf,
        /// Write the configuration to this path instead of printing it
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            base_url,
            delay_ms,
        } => commands::run::run(&config, base_url, delay_ms),
        Commands::Stages => commands::stages::run(),
        Commands::Config { config, write } => commands::config::run(&config, write.as_deref()),
    }
}
