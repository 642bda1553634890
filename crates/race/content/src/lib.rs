//! Data-driven sourcebook content and loaders.
//!
//! This crate reads the static material a sourcebook ships with:
//! - Rules configuration (data-driven via TOML)
//! - Currency catalogs (data-driven via TOML)
//! - Race catalogs (data-driven via RON)
//!
//! Loaded values are validated through the `race-core` constructors, so a
//! catalog entry that breaks an invariant fails the load instead of being
//! stored.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, CurrencyCatalog, CurrencyLoader, RaceCatalog, RaceLoader,
    RaceSpec,
};
