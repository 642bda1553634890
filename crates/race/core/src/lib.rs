//! Rules-level data types for playable races and their belongings.
//!
//! `race-core` holds the validated values a race sourcebook is built from:
//! dice descriptors and dice-backed ranges, ability scores and their
//! modifiers, hierarchical currencies and the coin ledgers valued against
//! them. Every constructor validates its inputs and every mutation leaves the
//! value unchanged when it fails. The crate performs no I/O and no logging.
pub mod config;
pub mod currency;
pub mod dice;
pub mod error;
pub mod ids;
pub mod race;
pub mod range;
pub mod stats;
pub mod treasure;
pub use config::RulesConfig;
pub use currency::{
    CurrencyDenomination, CurrencyError, CurrencyGroup, CurrencyOracle, CurrencyRegistry,
};
pub use dice::{DiceError, DiceSpec, DieType, PcgRng, RngOracle};
pub use error::{CoreError, ErrorKind};
pub use ids::{CurrencyGroupId, DenominationId, RaceId, TreasureId};
pub use race::{DamageType, Mobility, MovementType, Physique, Race, RaceError, Size, Vulnerabilities};
pub use range::{RangeError, ValueRange};
pub use stats::{AbilityType, Stat, StatBlock, StatError, StatMap, StatModifierTable};
pub use treasure::{Treasure, TreasureError};
