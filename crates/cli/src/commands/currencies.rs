//! List currency groups and their denominations.

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::book::Sourcebook;
use crate::commands::OutputFormat;
use crate::config::CliConfig;

/// List currency groups
#[derive(Parser)]
pub struct Currencies {
    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Currencies {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let book = Sourcebook::open(config)?;

        if let OutputFormat::Json = self.format {
            let groups: Vec<_> = book.currencies.iter().collect();
            println!("{}", serde_json::to_string_pretty(&groups)?);
            return Ok(());
        }

        for group in book.currencies.iter() {
            let id = group.id().map(|id| id.to_string()).unwrap_or_default();
            println!("{} {}", style(group.name()).bold().cyan(), style(id).dim());
            if group.is_empty() {
                println!("  (no denominations)");
            }
            for denomination in group.iter() {
                println!(
                    "  {:>2}. {:<14} {:<4} = {} base",
                    denomination.hierarchy_level(),
                    denomination.name(),
                    denomination.short_name(),
                    denomination.exchange_rate()
                );
            }
        }

        Ok(())
    }
}
