//! Operator command line for hit-value settlement.
//!
//! Run with: `hits <command>`. Configuration is read from the environment
//! (and a `.env` file, if present) and can be overridden per command.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Resolve, Roll, ShowRoot, ShowSeed, Values};

/// Settle fights and inspect seed state
#[derive(Parser)]
#[command(name = "hits")]
#[command(about = "Deterministic hit-value settlement", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Fold an input into a game's seed and print the resolved hit values
    Resolve(Resolve),

    /// Print the hit values of a game's current seed without advancing it
    Values(Values),

    /// Print the current seed of a game
    Seed(ShowSeed),

    /// Print the state root of the persisted seed map
    Root(ShowRoot),

    /// Roll a percent or bounded value from an explicit seed
    Roll(Roll),
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(cmd) => cmd.execute(),
        Command::Values(cmd) => cmd.execute(),
        Command::Seed(cmd) => cmd.execute(),
        Command::Root(cmd) => cmd.execute(),
        Command::Roll(cmd) => cmd.execute(),
    }
}
