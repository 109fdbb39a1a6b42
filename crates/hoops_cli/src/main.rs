//! Hoops CLI
//!
//! demo: scripted season setup with a trade, lineups and the audit trail
//! import: league JSON -> teams and rosters through the management service
//! verify: integrity check of an exported ledger

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{prelude::*, EnvFilter};

use hoops_core::LeagueConfig;

mod commands;

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Basketball roster manager with an audited transaction ledger", long_about = None)]
#[command(version = hoops_core::VERSION)]
struct Cli {
    /// League config JSON (overrides HOOPS_LEAGUE_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register sample teams, sign rosters, run a trade and print the results
    Demo {
        /// Write the audit ledger as JSON
        #[arg(long)]
        ledger_out: Option<PathBuf>,
    },

    /// Import a league from a JSON document
    Import {
        /// League JSON file path
        #[arg(long)]
        file: PathBuf,

        /// Write the audit ledger as JSON
        #[arg(long)]
        ledger_out: Option<PathBuf>,
    },

    /// Verify the hash chain of an exported ledger
    Verify {
        /// Ledger JSON file path
        #[arg(long)]
        ledger: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LeagueConfig::from_path(path)
            .with_context(|| format!("failed to load league config {}", path.display()))?,
        None => LeagueConfig::from_env().context("failed to load league config from environment")?,
    };
    tracing::debug!(?config, "league config loaded");

    match cli.command {
        Commands::Demo { ledger_out } => {
            let ledger = commands::run_demo(&config)?;
            if let Some(path) = ledger_out {
                commands::write_ledger(&ledger, &path)?;
            }
        }

        Commands::Import { file, ledger_out } => {
            let ledger = commands::run_import(&config, &file)?;
            if let Some(path) = ledger_out {
                commands::write_ledger(&ledger, &path)?;
            }
        }

        Commands::Verify { ledger } => commands::run_verify(&ledger)?,
    }

    Ok(())
}

/// Logs go to stderr so command output stays clean; `RUST_LOG` overrides the
/// default `info` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(env_filter).with(stderr_layer).init();
}
