use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::{Mobility, RaceError, Size, Vulnerabilities};
use crate::dice::rng::mix_seed;
use crate::dice::{DieType, RngOracle};
use crate::error::is_blank;
use crate::ids::RaceId;
use crate::range::ValueRange;
use crate::stats::{AbilityType, StatBlock};

/// A playable race.
///
/// Ability adjustments hold an entry for every [`AbilityType`]; a race
/// without a bonus for an ability carries `0` for it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Race {
    id: Option<RaceId>,
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: Size,
    pub height: ValueRange,
    pub weight: ValueRange,
    pub lifespan: ValueRange,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "complete_adjustments"))]
    ability_adjustments: BTreeMap<AbilityType, i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mobility: Mobility,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vulnerabilities: Vulnerabilities,
}

/// One rolled set of physical attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Physique {
    pub height: i64,
    pub weight: i64,
    pub age: i64,
}

impl Race {
    /// Create a medium race with human-like ranges and no adjustments.
    pub fn new(name: &str) -> Result<Self, RaceError> {
        Ok(Self {
            id: None,
            name: validate_name(name)?,
            description: String::new(),
            size: Size::Medium,
            height: ValueRange::from_parts(56, 2, DieType::D10),
            weight: ValueRange::from_parts(110, 2, DieType::D20),
            lifespan: ValueRange::from_parts(70, 3, DieType::D12),
            ability_adjustments: zeroed_adjustments(),
            mobility: Mobility::default(),
            vulnerabilities: Vulnerabilities::default(),
        })
    }

    pub fn id(&self) -> Option<RaceId> {
        self.id
    }

    /// Record the storage id. Re-assigning the same id is a no-op; a
    /// different id fails with `Conflict`.
    pub fn assign_id(&mut self, raw: i64) -> Result<RaceId, RaceError> {
        let id = RaceId::from_raw(raw).ok_or(RaceError::IdOutOfRange(raw))?;
        match self.id {
            Some(current) if current != id => Err(RaceError::IdAlreadyAssigned {
                current: current.value(),
                requested: id.value(),
            }),
            _ => {
                self.id = Some(id);
                Ok(id)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: &str) -> Result<(), RaceError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn ability_adjustment(&self, ability: AbilityType) -> i32 {
        self.ability_adjustments.get(&ability).copied().unwrap_or(0)
    }

    pub fn set_ability_adjustment(&mut self, ability: AbilityType, adjustment: i32) -> &mut Self {
        self.ability_adjustments.insert(ability, adjustment);
        self
    }

    pub fn ability_adjustments(&self) -> &BTreeMap<AbilityType, i32> {
        &self.ability_adjustments
    }

    /// Write this race's adjustments into each stat's value adjustment.
    ///
    /// Existing value adjustments are replaced, raw scores and bonus
    /// adjustments are left alone.
    pub fn apply_to(&self, block: &mut StatBlock) {
        for ability in AbilityType::iter() {
            block
                .get_mut(ability)
                .set_value_adjustment(self.ability_adjustment(ability));
        }
    }

    /// Roll height, weight and starting age from the race's ranges.
    pub fn roll_physique<R: RngOracle + ?Sized>(&self, rng: &R, seed: u64) -> Physique {
        Physique {
            height: self.height.to_dice_spec().roll(rng, mix_seed(seed, 0)),
            weight: self.weight.to_dice_spec().roll(rng, mix_seed(seed, 1)),
            age: self.lifespan.to_dice_spec().roll(rng, mix_seed(seed, 2)),
        }
    }
}

fn validate_name(name: &str) -> Result<String, RaceError> {
    if is_blank(name) {
        return Err(RaceError::BlankName);
    }
    Ok(name.trim().to_owned())
}

fn zeroed_adjustments() -> BTreeMap<AbilityType, i32> {
    AbilityType::iter().map(|ability| (ability, 0)).collect()
}

#[cfg(feature = "serde")]
fn complete_adjustments<'de, D>(deserializer: D) -> Result<BTreeMap<AbilityType, i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let partial: BTreeMap<AbilityType, i32> = serde::Deserialize::deserialize(deserializer)?;
    let mut adjustments = zeroed_adjustments();
    adjustments.extend(partial);
    Ok(adjustments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::PcgRng;

    #[test]
    fn blank_name_rejected() {
        assert_eq!(Race::new("  "), Err(RaceError::BlankName));
        let mut race = Race::new(" Dwarf ").unwrap();
        assert_eq!(race.name(), "Dwarf");
        assert!(race.rename("").is_err());
        assert_eq!(race.name(), "Dwarf");
    }

    #[test]
    fn every_ability_has_an_adjustment() {
        let race = Race::new("Human").unwrap();
        assert_eq!(race.ability_adjustments().len(), 6);
        assert!(race.ability_adjustments().values().all(|adj| *adj == 0));
    }

    #[test]
    fn apply_to_writes_value_adjustments() {
        let mut race = Race::new("Dwarf").unwrap();
        race.set_ability_adjustment(AbilityType::Constitution, 2)
            .set_ability_adjustment(AbilityType::Charisma, -2);

        let mut block = StatBlock::uniform(15);
        block.get_mut(AbilityType::Strength).set_value_adjustment(4);
        block.get_mut(AbilityType::Constitution).set_bonus_adjustment(1);
        race.apply_to(&mut block);

        let con = block.get(AbilityType::Constitution);
        assert_eq!(con.final_value(), 17);
        assert_eq!(con.final_bonus(), Ok(4));
        assert_eq!(block.get(AbilityType::Charisma).final_value(), 13);
        assert_eq!(block.get(AbilityType::Strength).final_value(), 15);
    }

    #[test]
    fn assign_id_once() {
        let mut race = Race::new("Elf").unwrap();
        assert_eq!(race.assign_id(4), Ok(RaceId(4)));
        assert_eq!(race.assign_id(4), Ok(RaceId(4)));
        assert!(race.assign_id(5).is_err());
        assert_eq!(race.assign_id(-1), Err(RaceError::IdOutOfRange(-1)));

        let too_large = i64::from(u32::MAX) + 1;
        let err = race.assign_id(too_large).unwrap_err();
        assert_eq!(err, RaceError::IdOutOfRange(too_large));
        assert_eq!(err.to_string(), "id 4294967296 is outside 0..=4294967295");
    }

    #[test]
    fn physique_stays_inside_ranges() {
        let race = Race::new("Halfling").unwrap();
        let rng = PcgRng;
        for seed in 0..64 {
            let rolled = race.roll_physique(&rng, seed);
            assert!(race.height.contains(rolled.height));
            assert!(race.weight.contains(rolled.weight));
            assert!(race.lifespan.contains(rolled.age));
        }
        assert_eq!(race.roll_physique(&rng, 9), race.roll_physique(&rng, 9));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_record_decodes_with_defaults() {
        use crate::race::{DamageType, MovementType};

        let mut race = Race::new("Triton").unwrap();
        race.mobility.set_speed(MovementType::Swim, 30).unwrap();
        race.vulnerabilities.set_multiplier(DamageType::Cold, 50).unwrap();
        race.set_ability_adjustment(AbilityType::Wisdom, 1);

        let json = serde_json::to_value(&race).unwrap();
        let decoded: Race = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, race);

        let sparse = serde_json::json!({
            "id": null,
            "name": "Gnome",
            "height": race.height,
            "weight": race.weight,
            "lifespan": race.lifespan,
            "ability_adjustments": { "intelligence": 2 },
        });
        let gnome: Race = serde_json::from_value(sparse).unwrap();
        assert_eq!(gnome.ability_adjustment(AbilityType::Intelligence), 2);
        assert_eq!(gnome.ability_adjustments().len(), 6);
        assert_eq!(gnome.mobility.speed(MovementType::Walk), 30);
        assert!(!gnome.vulnerabilities.is_resistant(DamageType::Cold));
    }
}
