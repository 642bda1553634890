//! Movement speeds and damage multipliers.
//!
//! Both tables hold an entry for every key of their enumeration from the
//! moment they are built. Decoding a partial map fills the missing keys with
//! the table default.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::{DamageType, MovementType, RaceError};

/// Speed in feet per round for every [`MovementType`].
///
/// Defaults to a 30 ft walk and no other movement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BTreeMap<MovementType, u32>", into = "BTreeMap<MovementType, u32>"))]
pub struct Mobility {
    speeds: BTreeMap<MovementType, u32>,
}

impl Mobility {
    pub const DEFAULT_WALK: u32 = 30;

    /// Every movement type at zero.
    pub fn immobile() -> Self {
        Self {
            speeds: MovementType::iter().map(|kind| (kind, 0)).collect(),
        }
    }

    pub fn speed(&self, kind: MovementType) -> u32 {
        self.speeds.get(&kind).copied().unwrap_or(0)
    }

    /// Set a speed; fails with `OutOfRange` outside the `u32` range.
    pub fn set_speed(&mut self, kind: MovementType, feet: i64) -> Result<(), RaceError> {
        let feet = u32::try_from(feet).map_err(|_| RaceError::SpeedOutOfRange(feet))?;
        self.speeds.insert(kind, feet);
        Ok(())
    }

    pub fn can(&self, kind: MovementType) -> bool {
        self.speed(kind) > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (MovementType, u32)> + '_ {
        self.speeds.iter().map(|(kind, feet)| (*kind, *feet))
    }
}

impl Default for Mobility {
    fn default() -> Self {
        let mut mobility = Self::immobile();
        mobility.speeds.insert(MovementType::Walk, Self::DEFAULT_WALK);
        mobility
    }
}

impl From<BTreeMap<MovementType, u32>> for Mobility {
    fn from(map: BTreeMap<MovementType, u32>) -> Self {
        let mut mobility = Self::default();
        mobility.speeds.extend(map);
        mobility
    }
}

impl From<Mobility> for BTreeMap<MovementType, u32> {
    fn from(mobility: Mobility) -> Self {
        mobility.speeds
    }
}

/// Damage multiplier, in percent, for every [`DamageType`].
///
/// `100` is normal damage, `0` immunity, below 100 resistance and above 100
/// vulnerability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BTreeMap<DamageType, u32>", into = "BTreeMap<DamageType, u32>"))]
pub struct Vulnerabilities {
    multipliers: BTreeMap<DamageType, u32>,
}

impl Vulnerabilities {
    pub const NORMAL: u32 = 100;

    pub fn multiplier(&self, kind: DamageType) -> u32 {
        self.multipliers.get(&kind).copied().unwrap_or(Self::NORMAL)
    }

    /// Set a multiplier; fails with `OutOfRange` outside the `u32` range.
    pub fn set_multiplier(&mut self, kind: DamageType, percent: i64) -> Result<(), RaceError> {
        let percent =
            u32::try_from(percent).map_err(|_| RaceError::MultiplierOutOfRange(percent))?;
        self.multipliers.insert(kind, percent);
        Ok(())
    }

    pub fn is_immune(&self, kind: DamageType) -> bool {
        self.multiplier(kind) == 0
    }

    pub fn is_resistant(&self, kind: DamageType) -> bool {
        (1..Self::NORMAL).contains(&self.multiplier(kind))
    }

    pub fn is_vulnerable(&self, kind: DamageType) -> bool {
        self.multiplier(kind) > Self::NORMAL
    }

    /// Scale incoming damage, rounding down.
    pub fn apply(&self, kind: DamageType, damage: u32) -> u32 {
        let scaled = u64::from(damage) * u64::from(self.multiplier(kind)) / u64::from(Self::NORMAL);
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DamageType, u32)> + '_ {
        self.multipliers.iter().map(|(kind, percent)| (*kind, *percent))
    }
}

impl Default for Vulnerabilities {
    fn default() -> Self {
        Self {
            multipliers: DamageType::iter().map(|kind| (kind, Self::NORMAL)).collect(),
        }
    }
}

impl From<BTreeMap<DamageType, u32>> for Vulnerabilities {
    fn from(map: BTreeMap<DamageType, u32>) -> Self {
        let mut vulnerabilities = Self::default();
        vulnerabilities.multipliers.extend(map);
        vulnerabilities
    }
}

impl From<Vulnerabilities> for BTreeMap<DamageType, u32> {
    fn from(vulnerabilities: Vulnerabilities) -> Self {
        vulnerabilities.multipliers
    }
}
