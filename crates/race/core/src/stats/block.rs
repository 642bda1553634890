//! Per-ability stat map with every ability always present.

use std::collections::BTreeMap;

use strum::EnumCount;

use super::{AbilityType, Stat, StatError};
use crate::config::RulesConfig;

/// Wire form of a [`StatBlock`]: a map keyed by the closed ability enum.
pub type StatMap = BTreeMap<AbilityType, Stat>;

/// One [`Stat`] per [`AbilityType`].
///
/// Backed by a fixed array so lookups never miss. When decoded from a map,
/// abilities absent from the map are filled in at the default score.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StatMap", into = "StatMap"))]
pub struct StatBlock {
    stats: [Stat; AbilityType::COUNT],
}

impl StatBlock {
    /// Every ability at `score`.
    pub fn uniform(score: i32) -> Self {
        Self {
            stats: AbilityType::ALL.map(|ability| Stat::new(ability, score)),
        }
    }

    /// Start from the default score and override the given abilities.
    pub fn with_scores(scores: impl IntoIterator<Item = (AbilityType, i32)>) -> Self {
        let mut block = Self::default();
        for (ability, score) in scores {
            block.get_mut(ability).set_raw_value(score);
        }
        block
    }

    pub fn get(&self, ability: AbilityType) -> &Stat {
        &self.stats[ability.index()]
    }

    pub fn get_mut(&mut self, ability: AbilityType) -> &mut Stat {
        &mut self.stats[ability.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stat> {
        self.stats.iter()
    }

    /// Final bonus for one ability.
    pub fn bonus(&self, ability: AbilityType) -> Result<i32, StatError> {
        self.get(ability).final_bonus()
    }

    /// Reset every temporary bonus adjustment to zero.
    pub fn clear_bonus_adjustments(&mut self) {
        for stat in &mut self.stats {
            stat.set_bonus_adjustment(0);
        }
    }

    pub fn to_map(&self) -> StatMap {
        self.stats.iter().map(|stat| (stat.kind(), *stat)).collect()
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::uniform(RulesConfig::DEFAULT_SCORE)
    }
}

impl From<StatMap> for StatBlock {
    fn from(map: StatMap) -> Self {
        let mut block = Self::default();
        for (ability, stat) in map {
            // the key wins over whatever kind the value claims
            block.stats[ability.index()] = stat.with_kind(ability);
        }
        block
    }
}

impl From<StatBlock> for StatMap {
    fn from(block: StatBlock) -> Self {
        block.to_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ability_present_by_default() {
        let block = StatBlock::default();
        for ability in AbilityType::ALL {
            assert_eq!(block.get(ability).kind(), ability);
            assert_eq!(block.get(ability).raw_value(), RulesConfig::DEFAULT_SCORE);
        }
        assert_eq!(block.iter().count(), 6);
    }

    #[test]
    fn with_scores_overrides_selected() {
        let block = StatBlock::with_scores([(AbilityType::Strength, 18), (AbilityType::Wisdom, 7)]);
        assert_eq!(block.bonus(AbilityType::Strength), Ok(3));
        assert_eq!(block.bonus(AbilityType::Wisdom), Ok(-2));
        assert_eq!(block.bonus(AbilityType::Charisma), Ok(0));
    }

    #[test]
    fn partial_map_is_filled() {
        let mut map = StatMap::new();
        map.insert(AbilityType::Intelligence, Stat::new(AbilityType::Intelligence, 16));
        let block = StatBlock::from(map);

        assert_eq!(block.get(AbilityType::Intelligence).raw_value(), 16);
        assert_eq!(block.get(AbilityType::Dexterity).raw_value(), 10);
        assert_eq!(block.to_map().len(), 6);
    }

    #[test]
    fn map_key_overrides_value_kind() {
        let mut map = StatMap::new();
        map.insert(AbilityType::Wisdom, Stat::new(AbilityType::Strength, 14));
        let block = StatBlock::from(map);
        assert_eq!(block.get(AbilityType::Wisdom).kind(), AbilityType::Wisdom);
        assert_eq!(block.get(AbilityType::Wisdom).raw_value(), 14);
        assert_eq!(block.get(AbilityType::Strength).raw_value(), 10);
    }

    #[test]
    fn clear_bonus_adjustments_keeps_values() {
        let mut block = StatBlock::default();
        block
            .get_mut(AbilityType::Dexterity)
            .set_value_adjustment(2)
            .set_bonus_adjustment(3);
        block.clear_bonus_adjustments();

        let dex = block.get(AbilityType::Dexterity);
        assert_eq!(dex.bonus_adjustment(), 0);
        assert_eq!(dex.value_adjustment(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip_keyed_by_ability() {
        let mut block = StatBlock::with_scores([(AbilityType::Constitution, 15)]);
        block.get_mut(AbilityType::Constitution).set_value_adjustment(2);

        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"constitution\""));
        let decoded: StatBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, block);
    }
}
