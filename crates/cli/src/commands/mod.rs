//! Command implementations for racebook.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod currencies;
mod import;
mod purse;
mod races;
mod roll;

pub use currencies::Currencies;
pub use import::Import;
pub use purse::Purse;
pub use races::Races;
pub use roll::Roll;

/// Output format shared by listing commands.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Summary,
    /// Full JSON output
    Json,
}
