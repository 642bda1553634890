//! Canonical die types.

use super::DiceError;

/// The canonical set of polyhedral dice.
///
/// Only these face counts are representable; anything else (a "d7") is
/// rejected at the boundary by [`DieType::from_sides`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DieType {
    D4,
    #[default]
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieType {
    /// Number of faces on this die.
    pub const fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    /// Spread between the lowest and highest face (`sides - 1`).
    ///
    /// This is how much a single die can add on top of its guaranteed 1.
    pub const fn spread(self) -> u32 {
        self.sides() - 1
    }

    /// Look up the die with the given face count.
    pub fn from_sides(sides: u32) -> Result<Self, DiceError> {
        match sides {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            100 => Ok(Self::D100),
            other => Err(DiceError::UnsupportedSides(other)),
        }
    }
}

impl TryFrom<u32> for DieType {
    type Error = DiceError;

    fn try_from(sides: u32) -> Result<Self, Self::Error> {
        Self::from_sides(sides)
    }
}

impl From<DieType> for u32 {
    fn from(die: DieType) -> u32 {
        die.sides()
    }
}
