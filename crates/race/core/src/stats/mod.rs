//! Ability scores and their bonuses.
//!
//! # Layers
//!
//! ```text
//! [ StatModifierTable ]   score → bonus, pure lookup
//!      ↓
//! [ Stat ]                raw value + permanent / temporary adjustments
//!      ↓
//! [ StatBlock ]           one Stat per AbilityType, never missing
//! ```
//!
//! Nothing derived is stored: every bonus is recomputed from current inputs.

mod ability;
pub mod block;
pub mod modifier;
pub mod stat;

pub use ability::AbilityType;
pub use block::{StatBlock, StatMap};
pub use modifier::StatModifierTable;
pub use stat::Stat;

use crate::error::{CoreError, ErrorKind};

/// Errors raised by score lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatError {
    /// The modifier table only covers scores 1 through 42.
    #[error("ability score {0} is outside the modifier table (1-42)")]
    ScoreOutOfRange(i32),
}

impl CoreError for StatError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::OutOfRange
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ScoreOutOfRange(_) => "STAT_SCORE_OUT_OF_RANGE",
        }
    }
}
