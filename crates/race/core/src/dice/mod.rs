//! Dice: die types, roll descriptors and deterministic rolling.

mod dice_spec;
mod die;
pub mod rng;

pub use dice_spec::DiceSpec;
pub use die::DieType;
pub use rng::{PcgRng, RngOracle};

use crate::error::{CoreError, ErrorKind};

/// Errors raised while building or changing dice descriptors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiceError {
    /// Dice counts must be at least one.
    #[error("dice count must be at least 1, got {0}")]
    InvalidCount(i32),

    /// The face count is not one of the canonical dice.
    #[error("unsupported die with {0} sides")]
    UnsupportedSides(u32),

    /// The text is not in `NdS[+B]` form.
    #[error("invalid dice notation '{0}'")]
    InvalidNotation(String),
}

impl CoreError for DiceError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCount(_) => "DICE_INVALID_COUNT",
            Self::UnsupportedSides(_) => "DICE_UNSUPPORTED_SIDES",
            Self::InvalidNotation(_) => "DICE_INVALID_NOTATION",
        }
    }
}
