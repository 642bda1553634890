//! Dice roll descriptors (`NdS+B`).

use core::fmt;
use core::str::FromStr;

use super::rng::{RngOracle, mix_seed};
use super::{DiceError, DieType};

/// A dice roll: `count` dice of one type plus a flat bonus.
///
/// The count is validated on construction and on every change; sides and
/// bonus are free. Two specs are equal when all three fields match. Totals
/// saturate at the `i64` bounds, so an extreme bonus never overflows.
///
/// # Example
/// ```
/// # use race_core::dice::{DiceSpec, DieType};
/// let mut spec = DiceSpec::new(2, DieType::D6, 8).unwrap();
/// spec.set_count(3).unwrap().set_bonus(-1);
/// assert_eq!(spec.to_string(), "3d6-1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DiceSpecRecord", into = "DiceSpecRecord"))]
pub struct DiceSpec {
    count: u32,
    sides: DieType,
    bonus: i64,
}

impl DiceSpec {
    /// Create a new dice spec, rejecting counts below one.
    pub fn new(count: i32, sides: DieType, bonus: i64) -> Result<Self, DiceError> {
        Ok(Self {
            count: validate_count(count)?,
            sides,
            bonus,
        })
    }

    /// Build from a count that an owning value already validated.
    pub(crate) fn from_parts(count: u32, sides: DieType, bonus: i64) -> Self {
        debug_assert!(count >= 1, "dice count invariant violated");
        Self {
            count,
            sides,
            bonus,
        }
    }

    /// A single die with no bonus.
    pub const fn single(sides: DieType) -> Self {
        Self {
            count: 1,
            sides,
            bonus: 0,
        }
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    pub const fn sides(&self) -> DieType {
        self.sides
    }

    pub const fn bonus(&self) -> i64 {
        self.bonus
    }

    /// Change the number of dice. Fails for `count <= 0` and leaves the spec untouched.
    pub fn set_count(&mut self, count: i32) -> Result<&mut Self, DiceError> {
        self.count = validate_count(count)?;
        Ok(self)
    }

    /// Change the die type.
    pub fn set_sides(&mut self, sides: DieType) -> &mut Self {
        self.sides = sides;
        self
    }

    /// Change the flat bonus.
    pub fn set_bonus(&mut self, bonus: i64) -> &mut Self {
        self.bonus = bonus;
        self
    }

    /// Lowest achievable total: every die shows 1.
    pub fn minimum(&self) -> i64 {
        i64::from(self.count).saturating_add(self.bonus)
    }

    /// Highest achievable total: every die shows its top face.
    pub fn maximum(&self) -> i64 {
        (i64::from(self.count) * i64::from(self.sides.sides())).saturating_add(self.bonus)
    }

    /// Roll the dice through a deterministic RNG oracle.
    ///
    /// Each die draws from its own derived seed so the same `seed` always
    /// produces the same total.
    pub fn roll<R: RngOracle + ?Sized>(&self, rng: &R, seed: u64) -> i64 {
        let sides = self.sides.sides();
        let faces: i64 = (0..self.count)
            .map(|index| i64::from(rng.roll_die(mix_seed(seed, index), sides)))
            .sum();
        faces.saturating_add(self.bonus)
    }
}

fn validate_count(count: i32) -> Result<u32, DiceError> {
    if count <= 0 {
        return Err(DiceError::InvalidCount(count));
    }
    Ok(count.unsigned_abs())
}

/// Stored shape; decoding rejects a zero count.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DiceSpecRecord {
    count: u32,
    sides: DieType,
    bonus: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<DiceSpecRecord> for DiceSpec {
    type Error = DiceError;

    fn try_from(record: DiceSpecRecord) -> Result<Self, Self::Error> {
        if record.count == 0 {
            return Err(DiceError::InvalidCount(0));
        }
        Ok(Self {
            count: record.count,
            sides: record.sides,
            bonus: record.bonus,
        })
    }
}

#[cfg(feature = "serde")]
impl From<DiceSpec> for DiceSpecRecord {
    fn from(spec: DiceSpec) -> Self {
        Self {
            count: spec.count,
            sides: spec.sides,
            bonus: spec.bonus,
        }
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.sides)?;
        match self.bonus {
            0 => Ok(()),
            b if b > 0 => write!(f, "+{}", b),
            b => write!(f, "{}", b),
        }
    }
}

/// Parses standard notation: `2d6`, `d20`, `3d4+2`, `1d8-1`.
impl FromStr for DiceSpec {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiceError::InvalidNotation(s.to_string());
        let text = s.trim().to_ascii_lowercase();

        let (count_part, rest) = text.split_once('d').ok_or_else(invalid)?;
        let count: i32 = if count_part.is_empty() {
            1
        } else {
            count_part.parse().map_err(|_| invalid())?
        };

        let (sides_part, bonus) = match rest.find(['+', '-']) {
            Some(at) => {
                let bonus: i64 = rest[at..]
                    .trim_start_matches('+')
                    .parse()
                    .map_err(|_| invalid())?;
                (&rest[..at], bonus)
            }
            None => (rest, 0),
        };
        let sides: u32 = sides_part.parse().map_err(|_| invalid())?;

        Self::new(count, DieType::from_sides(sides)?, bonus)
    }
}
