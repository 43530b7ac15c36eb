//! Inspect persisted seed state.

use anyhow::Result;
use clap::Parser;
use console::style;
use hits_core::GameId;

use super::args::RuntimeArgs;

/// Print the current seed of a game
#[derive(Parser, Debug)]
pub struct ShowSeed {
    /// Game to inspect
    #[arg(value_name = "GAME_ID")]
    game_id: u64,

    #[command(flatten)]
    runtime: RuntimeArgs,
}

impl ShowSeed {
    pub fn execute(self) -> Result<()> {
        let runtime = self.runtime.open()?;
        let game = GameId(self.game_id);

        match runtime.ledger().seed_of(game)? {
            Some(seed) => println!("{} {}", style(format!("{game}:")).bold().cyan(), seed),
            None => println!(
                "{} {} {}",
                style(format!("{game}:")).bold().cyan(),
                runtime.ledger().current_seed(game)?,
                style("(never seeded)").dim()
            ),
        }

        Ok(())
    }
}

/// Print the state root of the persisted seed map
#[derive(Parser, Debug)]
pub struct ShowRoot {
    #[command(flatten)]
    runtime: RuntimeArgs,
}

impl ShowRoot {
    pub fn execute(self) -> Result<()> {
        let runtime = self.runtime.open()?;
        let snapshot = runtime.ledger().snapshot()?;

        println!(
            "{} {}",
            style("State root:").bold().cyan(),
            hex::encode(snapshot.state_root())
        );
        println!("{} {}", style("Games:").bold().cyan(), snapshot.len());

        Ok(())
    }
}
