//! Hierarchical multi-denomination currencies.
//!
//! A [`CurrencyGroup`] owns its [`CurrencyDenomination`]s; treasures only
//! refer to a group by id and resolve it through a [`CurrencyOracle`].

mod denomination;
mod group;
mod oracle;

pub use denomination::CurrencyDenomination;
pub use group::CurrencyGroup;
pub use oracle::{CurrencyOracle, CurrencyRegistry};

use crate::error::{CoreError, ErrorKind};

/// Errors raised by denominations, groups and the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    /// A required name is empty or whitespace.
    #[error("{0} must not be blank")]
    BlankName(&'static str),

    #[error("hierarchy level must be at least 1, got {0}")]
    LevelOutOfRange(i64),

    #[error("exchange rate must be at least 1, got {0}")]
    RateOutOfRange(i64),

    #[error("id {0} is outside 0..=4294967295")]
    IdOutOfRange(i64),

    /// The value already carries a different storage id.
    #[error("id #{current} already assigned, refusing #{requested}")]
    IdAlreadyAssigned { current: u32, requested: u32 },

    /// A registry already holds a group under this id.
    #[error("currency group #{0} is already registered")]
    GroupIdTaken(u32),

    /// Another denomination already occupies the level.
    #[error("hierarchy level {level} is already taken by '{existing}'")]
    LevelTaken { level: u32, existing: String },

    #[error("denomination '{0}' not found")]
    NotFound(String),
}

impl CoreError for CurrencyError {
    fn kind(&self) -> ErrorKind {
        use CurrencyError::*;
        match self {
            BlankName(_) => ErrorKind::InvalidArgument,
            LevelOutOfRange(_) | RateOutOfRange(_) | IdOutOfRange(_) => ErrorKind::OutOfRange,
            IdAlreadyAssigned { .. } | GroupIdTaken(_) | LevelTaken { .. } => ErrorKind::Conflict,
            NotFound(_) => ErrorKind::NotFound,
        }
    }

    fn error_code(&self) -> &'static str {
        use CurrencyError::*;
        match self {
            BlankName(_) => "CURRENCY_BLANK_NAME",
            LevelOutOfRange(_) => "CURRENCY_LEVEL_OUT_OF_RANGE",
            RateOutOfRange(_) => "CURRENCY_RATE_OUT_OF_RANGE",
            IdOutOfRange(_) => "CURRENCY_ID_OUT_OF_RANGE",
            IdAlreadyAssigned { .. } => "CURRENCY_ID_ALREADY_ASSIGNED",
            GroupIdTaken(_) => "CURRENCY_GROUP_ID_TAKEN",
            LevelTaken { .. } => "CURRENCY_LEVEL_TAKEN",
            NotFound(_) => "CURRENCY_NOT_FOUND",
        }
    }
}
