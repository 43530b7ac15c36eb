//! Roll values directly from an explicit seed.

use anyhow::Result;
use clap::Parser;
use hits_core::{RngOracle, Seed};
use runtime::OracleKind;

use super::args::OracleArg;

/// Roll a percent or bounded value from an explicit seed
#[derive(Parser, Debug)]
pub struct Roll {
    /// Seed to roll from
    #[arg(value_name = "SEED")]
    seed: u64,

    /// Roll in [0, N] instead of [0, 99]
    #[arg(long, value_name = "N")]
    upto: Option<u64>,

    /// RNG oracle
    #[arg(long, value_enum, default_value = "pcg")]
    oracle: OracleArg,
}

impl Roll {
    pub fn execute(self) -> Result<()> {
        let rng: Box<dyn RngOracle> = OracleKind::from(self.oracle).build();
        let seed = Seed(self.seed);

        let value = match self.upto {
            Some(size) => rng.roll_upto(seed, size),
            None => rng.roll_percent(seed),
        };
        println!("{value}");

        Ok(())
    }
}
