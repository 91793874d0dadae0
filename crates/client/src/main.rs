//! `unitcalc`: construct units from definition files and report their statistics.
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Catalog, Report, Scan};
use config::ClientConfig;

/// Unit construction calculator
#[derive(Parser)]
#[command(name = "unitcalc")]
#[command(about = "Weight, cost and battle value for unit definition files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Report one unit file
    Report(Report),

    /// Load every unit file in a directory
    Scan(Scan),

    /// List the equipment catalog
    Catalog(Catalog),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    match cli.command {
        Command::Report(cmd) => cmd.execute(config),
        Command::Scan(cmd) => cmd.execute(config),
        Command::Catalog(cmd) => cmd.execute(config),
    }
}

/// Log to stderr so report output on stdout stays machine-readable.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
