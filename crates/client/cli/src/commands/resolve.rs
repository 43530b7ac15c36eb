//! Settle one resolution event and print the resolved hit values.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use hits_core::{GameId, HitKind, ResolvedHitValues};
use runtime::{Settlement, SettlementRequest};

use super::args::RuntimeArgs;

/// Fold an input into a game's seed and print the resolved hit values
#[derive(Parser, Debug)]
pub struct Resolve {
    /// Game whose seed stream is advanced
    #[arg(value_name = "GAME_ID")]
    game_id: u64,

    /// Entropy folded into the seed
    #[arg(value_name = "INPUT")]
    input: u64,

    /// Salt for the decomposition
    #[arg(value_name = "SALT")]
    salt: u64,

    #[command(flatten)]
    runtime: RuntimeArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(super) enum OutputFormat {
    /// One line per hit slot
    Summary,
    /// Full JSON output
    Json,
}

impl Resolve {
    pub fn execute(self) -> Result<()> {
        let runtime = self.runtime.open()?;
        let request = SettlementRequest::new(GameId(self.game_id), self.input, self.salt);

        let settlement = runtime
            .settle(request)
            .with_context(|| format!("Failed to settle {}", request.game_id))?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&settlement)?);
            }
            OutputFormat::Summary => print_summary(&settlement),
        }

        Ok(())
    }
}

fn print_summary(settlement: &Settlement) {
    println!(
        "{} {}  {} {}",
        style("Game:").bold().cyan(),
        settlement.game_id,
        style("Seed:").bold().cyan(),
        settlement.seed
    );
    print_values(&settlement.values);
}

/// One line per hit slot, banded slots first.
pub(super) fn print_values(values: &ResolvedHitValues) {
    for kind in HitKind::BANDED.into_iter().chain([HitKind::Slash]) {
        let band = match kind.band() {
            Some((lo, hi)) => format!("[{lo}, {hi}]"),
            None => "unbanded".to_string(),
        };
        println!(
            "  {:<13} {:>20}  {}",
            kind.as_ref(),
            values.value(kind),
            style(band).dim()
        );
    }
}
