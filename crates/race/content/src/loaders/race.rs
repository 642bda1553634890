//! Race catalog loader.
//!
//! Ranges are written in dice notation; the roll's minimum becomes the
//! range minimum. Enumerated keys (sizes, abilities, movement and damage
//! types) are matched case-insensitively.
//!
//! ```ron
//! (
//!     races: [
//!         (
//!             name: "Dwarf",
//!             size: "medium",
//!             height: "2d4+44",
//!             weight: "2d6+128",
//!             lifespan: "3d100+47",
//!             ability_adjustments: { "constitution": 2 },
//!             speeds: { "walk": 25 },
//!             damage_multipliers: { "poison": 50 },
//!         ),
//!     ],
//! )
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use race_core::{
    AbilityType, DamageType, DiceSpec, MovementType, Race, Size, ValueRange,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Race catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceCatalog {
    pub races: Vec<RaceSpec>,
}

/// One catalog entry, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_size")]
    pub size: String,
    pub height: String,
    pub weight: String,
    pub lifespan: String,
    #[serde(default)]
    pub ability_adjustments: BTreeMap<String, i32>,
    #[serde(default)]
    pub speeds: BTreeMap<String, i64>,
    #[serde(default)]
    pub damage_multipliers: BTreeMap<String, i64>,
}

fn default_size() -> String {
    Size::Medium.to_string()
}

impl RaceSpec {
    /// Validate the entry and build the domain record.
    pub fn build(&self) -> LoadResult<Race> {
        let mut race = Race::new(&self.name)
            .with_context(|| format!("invalid race name '{}'", self.name))?;
        let name = race.name().to_owned();

        race.description = self.description.trim().to_owned();
        race.size = parse_key::<Size>(&self.size, "size")?;
        race.height = parse_range(&self.height, "height", &name)?;
        race.weight = parse_range(&self.weight, "weight", &name)?;
        race.lifespan = parse_range(&self.lifespan, "lifespan", &name)?;

        for (key, adjustment) in &self.ability_adjustments {
            let ability = parse_key::<AbilityType>(key, "ability")?;
            race.set_ability_adjustment(ability, *adjustment);
        }
        for (key, feet) in &self.speeds {
            let movement = parse_key::<MovementType>(key, "movement type")?;
            race.mobility
                .set_speed(movement, *feet)
                .with_context(|| format!("invalid {key} speed for '{name}'"))?;
        }
        for (key, percent) in &self.damage_multipliers {
            let damage = parse_key::<DamageType>(key, "damage type")?;
            race.vulnerabilities
                .set_multiplier(damage, *percent)
                .with_context(|| format!("invalid {key} multiplier for '{name}'"))?;
        }

        Ok(race)
    }
}

fn parse_key<T: FromStr>(key: &str, what: &str) -> LoadResult<T> {
    T::from_str(key.trim()).map_err(|_| anyhow::anyhow!("unknown {}: '{}'", what, key))
}

fn parse_range(notation: &str, field: &str, race: &str) -> LoadResult<ValueRange> {
    let spec = DiceSpec::from_str(notation)
        .with_context(|| format!("invalid {field} '{notation}' for '{race}'"))?;
    ValueRange::from_dice_spec(&spec)
        .with_context(|| format!("{field} '{notation}' out of range for '{race}'"))
}

/// Loader for race catalogs from RON files.
pub struct RaceLoader;

impl RaceLoader {
    /// Load and validate every race of a catalog.
    ///
    /// Fails on the first invalid entry and on duplicate names.
    pub fn load(path: &Path) -> LoadResult<Vec<Race>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Race>> {
        let catalog: RaceCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse race catalog RON: {}", e))?;

        let mut races: Vec<Race> = Vec::with_capacity(catalog.races.len());
        for spec in &catalog.races {
            let race = spec.build()?;
            if races.iter().any(|known| known.name() == race.name()) {
                anyhow::bail!("race '{}' is defined twice", race.name());
            }
            races.push(race);
        }

        tracing::debug!(count = races.len(), "loaded race catalog");
        Ok(races)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
(
    races: [
        (
            name: "Dwarf",
            description: "Stout folk of the deep halls.",
            height: "2d4+44",
            weight: "2d6+128",
            lifespan: "3d100+47",
            ability_adjustments: { "constitution": 2, "Charisma": -2 },
            speeds: { "walk": 25 },
            damage_multipliers: { "poison": 50 },
        ),
        (
            name: "Pixie",
            size: "tiny",
            height: "1d4+8",
            weight: "1d4",
            lifespan: "2d20+10",
            speeds: { "fly": 30 },
        ),
    ],
)
"#;

    #[test]
    fn parses_catalog() {
        let races = RaceLoader::parse(CATALOG).unwrap();
        assert_eq!(races.len(), 2);

        let dwarf = &races[0];
        assert_eq!(dwarf.name(), "Dwarf");
        assert_eq!(dwarf.size, Size::Medium);
        assert_eq!(dwarf.height.min(), 46);
        assert_eq!(dwarf.height.max(), 52);
        assert_eq!(dwarf.ability_adjustment(AbilityType::Constitution), 2);
        assert_eq!(dwarf.ability_adjustment(AbilityType::Charisma), -2);
        assert_eq!(dwarf.ability_adjustment(AbilityType::Wisdom), 0);
        assert_eq!(dwarf.mobility.speed(MovementType::Walk), 25);
        assert!(dwarf.vulnerabilities.is_resistant(DamageType::Poison));

        let pixie = &races[1];
        assert_eq!(pixie.size, Size::Tiny);
        assert!(pixie.mobility.can(MovementType::Fly));
        assert_eq!(pixie.mobility.speed(MovementType::Walk), 30);
    }

    #[test]
    fn rejects_invalid_entries() {
        let bad_notation = CATALOG.replace("\"2d4+44\"", "\"two dice\"");
        assert!(RaceLoader::parse(&bad_notation).is_err());

        let bad_key = CATALOG.replace("\"poison\"", "\"sarcasm\"");
        let err = RaceLoader::parse(&bad_key).unwrap_err();
        assert!(err.to_string().contains("sarcasm"));

        let negative = CATALOG.replace("\"fly\": 30", "\"fly\": -30");
        assert!(RaceLoader::parse(&negative).is_err());

        let blank = CATALOG.replace("\"Pixie\"", "\"  \"");
        assert!(RaceLoader::parse(&blank).is_err());

        let twice = CATALOG.replace("\"Pixie\"", "\"Dwarf\"");
        assert!(RaceLoader::parse(&twice).is_err());

        let huge = CATALOG.replace("\"2d4+44\"", "\"1d6+9223372036854775807\"");
        let err = RaceLoader::parse(&huge).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("races.ron");
        std::fs::write(&path, CATALOG).unwrap();
        assert_eq!(RaceLoader::load(&path).unwrap().len(), 2);
    }
}
