//! Decompose a game's current seed without settling.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use hits_core::{GameId, ResolvedHitValues, SeedPolicy};
use runtime::Runtime;

use super::args::RuntimeArgs;
use super::resolve::{OutputFormat, print_values};

/// Print the hit values of a game's current seed; the seed is not advanced
#[derive(Parser, Debug)]
pub struct Values {
    /// Game to decompose
    #[arg(value_name = "GAME_ID")]
    game_id: u64,

    /// Salt for the decomposition
    #[arg(value_name = "SALT")]
    salt: u64,

    /// Reject games that were never seeded instead of using the zero seed
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    runtime: RuntimeArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Values {
    pub fn execute(self) -> Result<()> {
        let mut config = self.runtime.config();
        if self.strict {
            config.resolver.seed_policy = SeedPolicy::Strict;
        }
        let runtime = RuntimeArgs::open_with(config)?;
        let game = GameId(self.game_id);

        let values = current_values(&runtime, game, self.salt)?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&values)?),
            OutputFormat::Summary => {
                println!(
                    "{} {}  {} {}",
                    style("Game:").bold().cyan(),
                    game,
                    style("Seed:").bold().cyan(),
                    runtime.ledger().current_seed(game)?
                );
                print_values(&values);
            }
        }

        Ok(())
    }
}

fn current_values(runtime: &Runtime, game: GameId, salt: u64) -> Result<ResolvedHitValues> {
    runtime
        .ledger()
        .finalize_hit_type_values(game, salt)
        .with_context(|| format!("Failed to resolve hit values of {game}"))
}
