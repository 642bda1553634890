//! Store the bundled catalogs in the data directory.

use anyhow::Result;
use clap::Parser;
use console::style;
use race_content::ContentFactory;
use race_core::{CurrencyGroup, Race};
use race_store::{FileRepository, Repository};

use crate::config::CliConfig;

/// Import content catalogs into the data directory
#[derive(Parser)]
pub struct Import {
    /// Delete stored races and currency groups first
    #[arg(long)]
    replace: bool,
}

impl Import {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let factory = ContentFactory::new(&config.content_dir);
        let groups = FileRepository::<CurrencyGroup>::new(&config.data_dir)?;
        let races = FileRepository::<Race>::new(&config.data_dir)?;

        if self.replace {
            clear(&groups)?;
            clear(&races)?;
        } else if !groups.keys()?.is_empty() || !races.keys()?.is_empty() {
            anyhow::bail!(
                "Data directory {} already has records; pass --replace to overwrite",
                config.data_dir.display()
            );
        }

        // Registry ids are local to the catalog; the store assigns its own.
        let registry = factory.load_currencies()?;
        for group in registry.iter() {
            let mut fresh = CurrencyGroup::new(group.name())?;
            for denomination in group.iter() {
                fresh.add(denomination.clone())?;
            }
            let stored = groups.insert(fresh)?;
            println!(
                "{} currency group {} {}",
                style("Stored").green(),
                stored.name(),
                stored.id().map(|id| id.to_string()).unwrap_or_default()
            );
        }

        for race in factory.load_races()? {
            let stored = races.insert(race)?;
            println!(
                "{} race {} {}",
                style("Stored").green(),
                stored.name(),
                stored.id().map(|id| id.to_string()).unwrap_or_default()
            );
        }

        tracing::info!(dir = %config.data_dir.display(), "import finished");
        Ok(())
    }
}

fn clear<T: race_store::Record>(repo: &FileRepository<T>) -> Result<()> {
    for key in repo.keys()? {
        repo.delete(key)?;
    }
    Ok(())
}
