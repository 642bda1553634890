//! Content factory for building a sourcebook from data files.

use std::path::{Path, PathBuf};

use race_core::{CurrencyRegistry, Race, RulesConfig};

use crate::loaders::{ConfigLoader, CurrencyLoader, LoadResult, RaceLoader};

/// Content factory that loads all sourcebook content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── currencies.toml
/// └── races.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load currency groups from `currencies.toml`.
    pub fn load_currencies(&self) -> LoadResult<CurrencyRegistry> {
        let path = self.data_dir.join("currencies.toml");
        CurrencyLoader::load(&path)
    }

    /// Load race catalog from `races.ron`.
    pub fn load_races(&self) -> LoadResult<Vec<Race>> {
        let path = self.data_dir.join("races.ron");
        RaceLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
