//! Rules configuration loader.

use std::path::Path;

use race_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`RulesConfig::default`]. A default score
    /// outside the modifier table is rejected.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !RulesConfig::is_valid_score(config.default_score) {
            anyhow::bail!(
                "default_score {} is outside {}..={}",
                config.default_score,
                RulesConfig::MIN_SCORE,
                RulesConfig::MAX_SCORE
            );
        }

        Ok(config)
    }
}
