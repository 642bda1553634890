//! Roll dice from standard notation.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use race_core::dice::rng::mix_seed;
use race_core::{DiceSpec, PcgRng};

/// Roll dice, e.g. `2d6+3`
#[derive(Parser)]
pub struct Roll {
    /// Dice notation (`NdS`, `NdS+B`, `dS-B`)
    #[arg(value_name = "DICE")]
    notation: String,

    /// Seed for reproducible rolls (defaults to the clock)
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of rolls
    #[arg(short = 'n', long, default_value_t = 1)]
    times: u32,
}

impl Roll {
    pub fn execute(self) -> Result<()> {
        let spec: DiceSpec = self
            .notation
            .parse()
            .with_context(|| format!("Invalid dice notation: '{}'", self.notation))?;
        let seed = self.seed.unwrap_or_else(clock_seed);

        println!(
            "{} {} (range {}..={}, seed {})",
            style("Rolling").bold(),
            spec,
            spec.minimum(),
            spec.maximum(),
            seed
        );
        for index in 0..self.times {
            println!("  {}", spec.roll(&PcgRng, mix_seed(seed, index)));
        }

        Ok(())
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
