//! Dice-backed value ranges ("minimum plus N dice").
//!
//! A range stores its guaranteed minimum and the dice added on top. The
//! maximum is always derived, so a range can never have `max < min`:
//!
//! ```text
//! max = min + dice_count × (sides − 1)
//! ```
//!
//! Racial heights, weights and lifespans are all expressed this way.

use core::fmt;

use crate::dice::{DiceSpec, DieType};
use crate::error::{CoreError, ErrorKind};

/// Errors raised while building or changing a [`ValueRange`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeError {
    /// Ranges need at least one die.
    #[error("dice count must be at least 1, got {0}")]
    InvalidDiceCount(i64),

    /// Legacy bounds with `max < min`.
    #[error("maximum {max} is below minimum {min}")]
    InvertedBounds { min: i32, max: i32 },

    /// A dice roll whose minimum does not fit a range minimum.
    #[error("minimum {0} does not fit in a range")]
    MinOutOfRange(i64),
}

impl CoreError for RangeError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::MinOutOfRange(_) => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidArgument,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDiceCount(_) => "RANGE_INVALID_DICE_COUNT",
            Self::InvertedBounds { .. } => "RANGE_INVERTED_BOUNDS",
            Self::MinOutOfRange(_) => "RANGE_MIN_OUT_OF_RANGE",
        }
    }
}

/// A bounded random quantity: a guaranteed minimum plus a dice roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ValueRangeRecord", into = "ValueRangeRecord"))]
pub struct ValueRange {
    min: i32,
    dice_count: u32,
    dice_type: DieType,
}

impl ValueRange {
    /// Create a range; fails when `dice_count < 1`.
    pub fn new(min: i32, dice_count: i32, dice_type: DieType) -> Result<Self, RangeError> {
        Ok(Self {
            min,
            dice_count: validate_dice_count(dice_count)?,
            dice_type,
        })
    }

    /// Build a range from arbitrary bounds by rounding the dice count up.
    ///
    /// The resulting maximum is the smallest reachable value `>= max`, so
    /// `(min, max)` does not survive a round trip in general. Kept only for
    /// reading records written before ranges were stored as min + dice.
    #[deprecated(note = "store min + dice count; use ValueRange::new")]
    pub fn from_bounds(min: i32, max: i32, dice_type: DieType) -> Result<Self, RangeError> {
        if max < min {
            return Err(RangeError::InvertedBounds { min, max });
        }
        let width = i64::from(max) - i64::from(min);
        let spread = i64::from(dice_type.spread());
        let dice_count = ((width + spread - 1) / spread).max(1);
        let dice_count =
            u32::try_from(dice_count).map_err(|_| RangeError::InvalidDiceCount(dice_count))?;

        Ok(Self {
            min,
            dice_count,
            dice_type,
        })
    }

    /// Build from an already valid dice count.
    pub(crate) const fn from_parts(min: i32, dice_count: u32, dice_type: DieType) -> Self {
        debug_assert!(dice_count >= 1);
        Self {
            min,
            dice_count,
            dice_type,
        }
    }

    /// The inverse of [`ValueRange::to_dice_spec`]. Fails with
    /// `MinOutOfRange` when the roll's minimum does not fit an `i32`.
    pub fn from_dice_spec(spec: &DiceSpec) -> Result<Self, RangeError> {
        Self::try_from(spec)
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn dice_count(&self) -> u32 {
        self.dice_count
    }

    pub const fn dice_type(&self) -> DieType {
        self.dice_type
    }

    /// Derived maximum: `min + dice_count × (sides − 1)`.
    pub fn max(&self) -> i64 {
        i64::from(self.min) + i64::from(self.dice_count) * i64::from(self.dice_type.spread())
    }

    pub fn set_min(&mut self, min: i32) -> &mut Self {
        self.min = min;
        self
    }

    /// Change the dice count; fails when `dice_count < 1` and keeps the old value.
    pub fn set_dice_count(&mut self, dice_count: i32) -> Result<&mut Self, RangeError> {
        self.dice_count = validate_dice_count(dice_count)?;
        Ok(self)
    }

    pub fn set_dice_type(&mut self, dice_type: DieType) -> &mut Self {
        self.dice_type = dice_type;
        self
    }

    /// The roll that produces exactly this range.
    ///
    /// `dice_count` dice sum to at least `dice_count`, so the flat bonus that
    /// lifts that floor to `min` is `min − dice_count`.
    pub fn to_dice_spec(&self) -> DiceSpec {
        DiceSpec::from_parts(
            self.dice_count,
            self.dice_type,
            i64::from(self.min) - i64::from(self.dice_count),
        )
    }

    /// Whether `value` can be produced by this range.
    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= self.max()
    }
}

fn validate_dice_count(dice_count: i32) -> Result<u32, RangeError> {
    if dice_count < 1 {
        return Err(RangeError::InvalidDiceCount(i64::from(dice_count)));
    }
    Ok(dice_count.unsigned_abs())
}

impl TryFrom<&DiceSpec> for ValueRange {
    type Error = RangeError;

    fn try_from(spec: &DiceSpec) -> Result<Self, Self::Error> {
        let minimum = spec.minimum();
        let min = i32::try_from(minimum).map_err(|_| RangeError::MinOutOfRange(minimum))?;
        Ok(Self {
            min,
            dice_count: spec.count(),
            dice_type: spec.sides(),
        })
    }
}

/// Stored shape; decoding rejects a zero dice count.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ValueRangeRecord {
    min: i32,
    dice_count: u32,
    dice_type: DieType,
}

#[cfg(feature = "serde")]
impl TryFrom<ValueRangeRecord> for ValueRange {
    type Error = RangeError;

    fn try_from(record: ValueRangeRecord) -> Result<Self, Self::Error> {
        if record.dice_count == 0 {
            return Err(RangeError::InvalidDiceCount(0));
        }
        Ok(Self::from_parts(record.min, record.dice_count, record.dice_type))
    }
}

#[cfg(feature = "serde")]
impl From<ValueRange> for ValueRangeRecord {
    fn from(range: ValueRange) -> Self {
        Self {
            min: range.min,
            dice_count: range.dice_count,
            dice_type: range.dice_type,
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.min, self.max(), self.to_dice_spec())
    }
}
