//! Playable races and their physical traits.

mod kinds;
mod record;
mod traits;

pub use kinds::{DamageType, MovementType, Size};
pub use record::{Physique, Race};
pub use traits::{Mobility, Vulnerabilities};

use crate::error::{CoreError, ErrorKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RaceError {
    #[error("race name must not be blank")]
    BlankName,

    #[error("speed {0} is outside 0..=4294967295")]
    SpeedOutOfRange(i64),

    #[error("damage multiplier {0} is outside 0..=4294967295")]
    MultiplierOutOfRange(i64),

    #[error("id {0} is outside 0..=4294967295")]
    IdOutOfRange(i64),

    #[error("race already stored as #{current}, refusing #{requested}")]
    IdAlreadyAssigned { current: u32, requested: u32 },
}

impl CoreError for RaceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::BlankName => ErrorKind::InvalidArgument,
            Self::SpeedOutOfRange(_) | Self::MultiplierOutOfRange(_) | Self::IdOutOfRange(_) => {
                ErrorKind::OutOfRange
            }
            Self::IdAlreadyAssigned { .. } => ErrorKind::Conflict,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BlankName => "RACE_BLANK_NAME",
            Self::SpeedOutOfRange(_) => "RACE_SPEED_OUT_OF_RANGE",
            Self::MultiplierOutOfRange(_) => "RACE_MULTIPLIER_OUT_OF_RANGE",
            Self::IdOutOfRange(_) => "RACE_ID_OUT_OF_RANGE",
            Self::IdAlreadyAssigned { .. } => "RACE_ID_ALREADY_ASSIGNED",
        }
    }
}
