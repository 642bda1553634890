//! Content loaders for reading sourcebook data from files.

pub mod config;
pub mod currency;
pub mod factory;
pub mod race;

pub use config::ConfigLoader;
pub use currency::{CurrencyCatalog, CurrencyLoader};
pub use factory::ContentFactory;
pub use race::{RaceCatalog, RaceLoader, RaceSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!(path = %path.display(), "reading content file");
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
