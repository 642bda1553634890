//! Count a pile of coins against a currency group.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use race_core::{CurrencyGroup, Treasure};
use race_store::{FileRepository, Repository, codec};

use crate::book::Sourcebook;
use crate::commands::OutputFormat;
use crate::config::CliConfig;

/// Value a purse of coins
#[derive(Parser)]
pub struct Purse {
    /// Currency group name (case-insensitive)
    #[arg(short, long, value_name = "GROUP")]
    group: String,

    /// Coins as `<level|short name>=<quantity>`, e.g. `gp=3` or `2=15`
    #[arg(value_name = "COINS")]
    coins: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Purse {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let book = Sourcebook::open(config)?;
        let group = book.currency_group(&self.group)?;

        let mut treasure = Treasure::new(group);
        for entry in &self.coins {
            let (level, amount) = parse_coin(group, entry)?;
            treasure
                .add_coins(level, amount)
                .with_context(|| format!("Cannot add '{entry}'"))?;
        }

        let total = treasure.total_value_in_base_units(&book.currencies)?;
        let label = treasure.display_with_label(&book.currencies, &book.rules.empty_treasure_label)?;

        if config.persist {
            if !book.stored_currencies {
                anyhow::bail!("Currency groups are not stored yet; run `racebook import` first");
            }
            let repo = FileRepository::<Treasure>::new(&config.data_dir)?;
            treasure = repo.insert(treasure)?;
            tracing::info!(id = ?treasure.id(), "stored treasure");
        }

        match self.format {
            OutputFormat::Json => {
                println!("{}", codec::encode_coins(&treasure)?);
            }
            OutputFormat::Summary => {
                println!("{label}");
                println!("{} {} base units", style("Total").bold(), total);
                if let Some(id) = treasure.id() {
                    println!("{} {}", style("Stored as").dim(), id);
                }
            }
        }

        Ok(())
    }
}

/// Parse `<level|short name|name>=<quantity>`; quantities may be negative.
fn parse_coin(group: &CurrencyGroup, entry: &str) -> Result<(u32, i64)> {
    let (key, quantity) = entry
        .split_once('=')
        .with_context(|| format!("Expected <denomination>=<quantity>, got '{entry}'"))?;
    let key = key.trim();
    let quantity: i64 = quantity
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity in '{entry}'"))?;

    let level = match key.parse::<u32>() {
        Ok(level) => level,
        Err(_) => group
            .iter()
            .find(|d| d.short_name().eq_ignore_ascii_case(key) || d.name().eq_ignore_ascii_case(key))
            .map(|d| d.hierarchy_level())
            .with_context(|| format!("No denomination '{}' in '{}'", key, group.name()))?,
    };

    Ok((level, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use race_core::CurrencyDenomination;

    fn imperial() -> CurrencyGroup {
        CurrencyGroup::with_denominations(
            "Imperial",
            [
                CurrencyDenomination::new("Gold", "gp", 1, 1).unwrap(),
                CurrencyDenomination::new("Silver", "sp", 2, 10).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn parses_level_and_names() {
        let group = imperial();
        assert_eq!(parse_coin(&group, "1=4").unwrap(), (1, 4));
        assert_eq!(parse_coin(&group, "SP=-2").unwrap(), (2, -2));
        assert_eq!(parse_coin(&group, "silver = 3").unwrap(), (2, 3));
    }

    #[test]
    fn rejects_unknown_denomination() {
        let group = imperial();
        assert!(parse_coin(&group, "cp=1").is_err());
        assert!(parse_coin(&group, "gp").is_err());
        assert!(parse_coin(&group, "gp=many").is_err());
    }
}
