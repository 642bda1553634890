//! Content and stored records, merged into one view.
//!
//! Stored records win over the bundled catalogs: once `racebook import`
//! has run, commands see the ids and edits kept in the data directory.

use anyhow::{Context, Result};
use race_content::ContentFactory;
use race_core::{CurrencyGroup, CurrencyRegistry, Race, RulesConfig};
use race_store::{FileRepository, Repository};

use crate::config::CliConfig;

pub struct Sourcebook {
    pub rules: RulesConfig,
    pub races: Vec<Race>,
    pub currencies: CurrencyRegistry,
    /// Currency group ids come from the data directory, not the catalog.
    pub stored_currencies: bool,
}

impl Sourcebook {
    pub fn open(config: &CliConfig) -> Result<Self> {
        let factory = ContentFactory::new(&config.content_dir);
        let rules = factory.load_config()?;

        let stored_races = stored::<Race>(config)?;
        let races = if stored_races.is_empty() {
            factory.load_races()?
        } else {
            tracing::info!(count = stored_races.len(), "using stored races");
            stored_races
        };

        let stored_groups = stored::<CurrencyGroup>(config)?;
        let stored_currencies = !stored_groups.is_empty();
        let currencies = if stored_groups.is_empty() {
            factory.load_currencies()?
        } else {
            tracing::info!(count = stored_groups.len(), "using stored currency groups");
            let mut registry = CurrencyRegistry::new();
            for group in stored_groups {
                registry.register(group)?;
            }
            registry
        };

        Ok(Self {
            rules,
            races,
            currencies,
            stored_currencies,
        })
    }

    pub fn race(&self, name: &str) -> Result<&Race> {
        let name = name.trim();
        self.races
            .iter()
            .find(|race| race.name().eq_ignore_ascii_case(name))
            .with_context(|| format!("Unknown race: {name}"))
    }

    pub fn currency_group(&self, name: &str) -> Result<&CurrencyGroup> {
        self.currencies
            .iter()
            .find(|group| group.name().eq_ignore_ascii_case(name.trim()))
            .with_context(|| format!("Unknown currency group: {}", name.trim()))
    }
}

/// Records of one kind from the data directory, without creating it.
fn stored<T: race_store::Record>(config: &CliConfig) -> Result<Vec<T>> {
    if !config.data_dir.exists() {
        return Ok(Vec::new());
    }
    let repo = FileRepository::<T>::new(&config.data_dir)?;
    Ok(repo.load_all()?)
}
