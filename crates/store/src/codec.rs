//! JSON columns for dictionary-valued fields.
//!
//! Relational backends keep maps such as a treasure's coin quantities or a
//! character's stat block in a single text column. Integer keys are written
//! as JSON strings (`{"1":2}`) and enum keys by their snake_case name
//! (`{"strength":{..}}`); both decode back to the original key type.

use std::collections::BTreeMap;

use race_core::{AbilityType, DamageType, MovementType, Race, StatBlock, StatMap, Treasure};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{RepositoryError, Result};

/// Encode any serializable value as a JSON column.
pub fn to_column<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| RepositoryError::Json(e.to_string()))
}

/// Decode a JSON column.
pub fn from_column<T: DeserializeOwned>(column: &str) -> Result<T> {
    serde_json::from_str(column).map_err(|e| RepositoryError::Json(e.to_string()))
}

/// Coin quantities keyed by hierarchy level.
pub fn encode_coins(treasure: &Treasure) -> Result<String> {
    to_column(treasure.coins())
}

pub fn decode_coins(column: &str) -> Result<BTreeMap<u32, u64>> {
    from_column(column)
}

/// Ability-keyed stats. Abilities missing from the column get default stats.
pub fn encode_stats(block: &StatBlock) -> Result<String> {
    to_column(&block.to_map())
}

pub fn decode_stats(column: &str) -> Result<StatBlock> {
    let map: StatMap = from_column(column)?;
    Ok(StatBlock::from(map))
}

/// The enum-keyed maps of a race, one column each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceColumns {
    pub ability_adjustments: String,
    pub speeds: String,
    pub damage_multipliers: String,
}

impl RaceColumns {
    pub fn encode(race: &Race) -> Result<Self> {
        Ok(Self {
            ability_adjustments: to_column(race.ability_adjustments())?,
            speeds: to_column(&race.mobility)?,
            damage_multipliers: to_column(&race.vulnerabilities)?,
        })
    }

    /// Write the columns back onto `race`.
    pub fn apply(&self, race: &mut Race) -> Result<()> {
        let adjustments: BTreeMap<AbilityType, i32> = from_column(&self.ability_adjustments)?;
        for (ability, adjustment) in adjustments {
            race.set_ability_adjustment(ability, adjustment);
        }

        let speeds: BTreeMap<MovementType, u32> = from_column(&self.speeds)?;
        race.mobility = speeds.into();

        let multipliers: BTreeMap<DamageType, u32> = from_column(&self.damage_multipliers)?;
        race.vulnerabilities = multipliers.into();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_keys_are_strings_in_json() {
        let mut coins = BTreeMap::new();
        coins.insert(1u32, 2u64);
        coins.insert(3, 7);
        let column = to_column(&coins).unwrap();
        assert_eq!(column, r#"{"1":2,"3":7}"#);
        assert_eq!(decode_coins(&column).unwrap(), coins);
    }

    #[test]
    fn malformed_column_is_a_json_error() {
        assert!(matches!(
            decode_coins("{\"gold\":1}"),
            Err(RepositoryError::Json(_))
        ));
        assert!(decode_stats("[]").is_err());
    }

    #[test]
    fn partial_stat_column_fills_missing_abilities() {
        let block = decode_stats(r#"{"wisdom":{"kind":"wisdom","raw_value":14,"value_adjustment":0,"bonus_adjustment":0}}"#)
            .unwrap();
        assert_eq!(block.get(AbilityType::Wisdom).raw_value(), 14);
        assert_eq!(
            block.get(AbilityType::Strength).raw_value(),
            race_core::RulesConfig::DEFAULT_SCORE
        );
    }
}
