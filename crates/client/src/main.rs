//! Operator CLI for warrior plans.
//!
//! Inspects the built-in scenarios, validates plan files and dry-runs a plan
//! against recorded perception frames.
//!
//! ```bash
//! warrior list
//! warrior show level-6 --format json
//! warrior check data/plans/level_3.ron
//! warrior --data-dir data dry-run --scenario level-3 --frames level_3
//! ```

mod commands;
mod dirs;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Check, DryRun, List, Show};

/// Turn-by-turn warrior controller tooling
#[derive(Parser)]
#[command(name = "warrior")]
#[command(about = "Inspect and dry-run warrior action plans", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory holding config.toml, plans/ and frames/
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List the built-in scenarios
    List(List),

    /// Print a scenario's plan
    Show(Show),

    /// Validate a plan file
    Check(Check),

    /// Drive a plan against recorded perception frames
    DryRun(DryRun),
}

fn main() -> Result<()> {
    // Load .env file if it exists (WARRIOR_* and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging()?;

    match cli.command {
        Command::List(cmd) => cmd.execute(),
        Command::Show(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
        Command::DryRun(cmd) => cmd.execute(cli.data_dir.as_deref()),
    }
}
