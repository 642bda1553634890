//! Race sourcebook command-line tool.
//!
//! Reads race and currency catalogs from a content directory, optionally
//! stores them, and answers rules questions about them.
//!
//! ```bash
//! racebook races dwarf --scores 15,14,13,12,10,8
//! racebook purse --group "Imperial Standard" gp=3 sp=12
//! RACEBOOK_PERSIST=1 racebook purse --group "Deep Halls" mb=2
//! ```
mod book;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Currencies, Import, Purse, Races, Roll};
use config::CliConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Race sourcebook tools
#[derive(Parser)]
#[command(name = "racebook")]
#[command(about = "Browse races, currencies and treasure", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List races or apply one to ability scores
    Races(Races),

    /// List currency groups
    Currencies(Currencies),

    /// Value a purse of coins
    Purse(Purse),

    /// Roll dice
    Roll(Roll),

    /// Store the content catalogs in the data directory
    Import(Import),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();

    match cli.command {
        Command::Races(cmd) => cmd.execute(&config),
        Command::Currencies(cmd) => cmd.execute(&config),
        Command::Purse(cmd) => cmd.execute(&config),
        Command::Roll(cmd) => cmd.execute(),
        Command::Import(cmd) => cmd.execute(&config),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
