//! Currency catalog loader.
//!
//! ```toml
//! [[groups]]
//! name = "Imperial"
//!
//! [[groups.denominations]]
//! name = "Gold"
//! short_name = "gp"
//! hierarchy_level = 1
//! exchange_rate = 1
//! ```

use std::path::Path;

use anyhow::Context;
use race_core::{CurrencyDenomination, CurrencyGroup, CurrencyRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Currency catalog structure for TOML files.
///
/// Numbers are read as signed integers so that out-of-range values reach the
/// domain constructors and fail with their own messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyCatalog {
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupEntry {
    pub name: String,
    #[serde(default)]
    pub denominations: Vec<DenominationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenominationEntry {
    pub name: String,
    pub short_name: String,
    pub hierarchy_level: i64,
    pub exchange_rate: i64,
}

impl GroupEntry {
    fn build(&self) -> LoadResult<CurrencyGroup> {
        let mut group = CurrencyGroup::new(&self.name)
            .with_context(|| format!("invalid currency group '{}'", self.name))?;

        for entry in &self.denominations {
            let denomination = CurrencyDenomination::new(
                &entry.name,
                &entry.short_name,
                entry.hierarchy_level,
                entry.exchange_rate,
            )
            .with_context(|| format!("invalid denomination '{}' in '{}'", entry.name, self.name))?;

            group
                .add(denomination)
                .with_context(|| format!("cannot add '{}' to '{}'", entry.name, self.name))?;
        }

        Ok(group)
    }
}

/// Loader for currency catalogs from TOML files.
pub struct CurrencyLoader;

impl CurrencyLoader {
    /// Load every group of a catalog into a fresh registry.
    ///
    /// Groups receive registry ids in file order, starting at 1.
    pub fn load(path: &Path) -> LoadResult<CurrencyRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CurrencyRegistry> {
        let catalog: CurrencyCatalog = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse currency catalog TOML: {}", e))?;

        let mut registry = CurrencyRegistry::new();
        for entry in &catalog.groups {
            if registry.find_by_name(&entry.name).is_some() {
                anyhow::bail!("currency group '{}' is defined twice", entry.name.trim());
            }
            let group = entry.build()?;
            let id = registry
                .register(group)
                .with_context(|| format!("cannot register '{}'", entry.name))?;
            tracing::debug!(group = %entry.name, %id, "registered currency group");
        }

        Ok(registry)
    }
}
