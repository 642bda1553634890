//! Currency groups: level-unique sets of denominations.

use std::collections::BTreeMap;

use super::{CurrencyDenomination, CurrencyError};
use crate::error::is_blank;
use crate::ids::{CurrencyGroupId, DenominationId};

/// A named currency hierarchy (e.g. "Imperial Coinage": gold, silver, copper).
///
/// Invariant: no two denominations share a hierarchy level. Denominations
/// are kept keyed by level, so iteration is always in ascending level order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CurrencyGroupRecord", into = "CurrencyGroupRecord")
)]
pub struct CurrencyGroup {
    id: Option<CurrencyGroupId>,
    name: String,
    denominations: BTreeMap<u32, CurrencyDenomination>,
}

impl CurrencyGroup {
    pub fn new(name: impl Into<String>) -> Result<Self, CurrencyError> {
        Ok(Self {
            id: None,
            name: validate_group_name(name.into())?,
            denominations: BTreeMap::new(),
        })
    }

    /// Build a group and add every denomination, failing on the first conflict.
    pub fn with_denominations(
        name: impl Into<String>,
        denominations: impl IntoIterator<Item = CurrencyDenomination>,
    ) -> Result<Self, CurrencyError> {
        let mut group = Self::new(name)?;
        for denomination in denominations {
            group.add(denomination)?;
        }
        Ok(group)
    }

    pub fn id(&self) -> Option<CurrencyGroupId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record the storage id; same rules as [`CurrencyDenomination::assign_id`].
    pub fn assign_id(&mut self, raw: i64) -> Result<CurrencyGroupId, CurrencyError> {
        let id = CurrencyGroupId::from_raw(raw).ok_or(CurrencyError::IdOutOfRange(raw))?;
        match self.id {
            Some(current) if current != id => Err(CurrencyError::IdAlreadyAssigned {
                current: current.value(),
                requested: id.value(),
            }),
            _ => {
                self.id = Some(id);
                Ok(id)
            }
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), CurrencyError> {
        self.name = validate_group_name(name.into())?;
        Ok(())
    }

    /// Add a denomination; fails with `Conflict` if its level is taken.
    pub fn add(&mut self, denomination: CurrencyDenomination) -> Result<(), CurrencyError> {
        let level = denomination.hierarchy_level();
        if let Some(existing) = self.denominations.get(&level) {
            return Err(CurrencyError::LevelTaken {
                level,
                existing: existing.name().to_string(),
            });
        }
        self.denominations.insert(level, denomination);
        Ok(())
    }

    /// Remove the entry at the denomination's level if it carries the same name.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, denomination: &CurrencyDenomination) -> bool {
        let level = denomination.hierarchy_level();
        let matches = self
            .denominations
            .get(&level)
            .is_some_and(|existing| existing.name() == denomination.name());
        if matches {
            self.denominations.remove(&level);
        }
        matches
    }

    /// Remove by name; fails with `NotFound` when no denomination has it.
    pub fn remove_by_name(&mut self, name: &str) -> Result<CurrencyDenomination, CurrencyError> {
        let level = self
            .level_of(name)
            .ok_or_else(|| CurrencyError::NotFound(name.trim().to_string()))?;
        self.denominations
            .remove(&level)
            .ok_or_else(|| CurrencyError::NotFound(name.trim().to_string()))
    }

    /// Remove by storage id. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: DenominationId) -> bool {
        let level = self
            .denominations
            .values()
            .find(|d| d.id() == Some(id))
            .map(CurrencyDenomination::hierarchy_level);
        match level {
            Some(level) => self.denominations.remove(&level).is_some(),
            None => false,
        }
    }

    /// Replace the denomination with the same name, keeping its storage id.
    ///
    /// The replacement may move to another level as long as that level is
    /// free. Fails with `NotFound` when no denomination has the name and with
    /// `Conflict` when the target level belongs to a different denomination;
    /// the group is unchanged on failure.
    pub fn update(&mut self, mut denomination: CurrencyDenomination) -> Result<(), CurrencyError> {
        let old_level = self
            .level_of(denomination.name())
            .ok_or_else(|| CurrencyError::NotFound(denomination.name().to_string()))?;
        let new_level = denomination.hierarchy_level();

        if new_level != old_level
            && let Some(existing) = self.denominations.get(&new_level)
        {
            return Err(CurrencyError::LevelTaken {
                level: new_level,
                existing: existing.name().to_string(),
            });
        }

        let original_id = self
            .denominations
            .remove(&old_level)
            .and_then(|old| old.id());
        denomination.inherit_id(original_id);
        self.denominations.insert(new_level, denomination);
        Ok(())
    }

    pub fn get_by_level(&self, level: u32) -> Option<&CurrencyDenomination> {
        self.denominations.get(&level)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&CurrencyDenomination> {
        let name = name.trim();
        self.denominations.values().find(|d| d.name() == name)
    }

    /// Exchange rate of the denomination at `level`, if present.
    pub fn exchange_rate(&self, level: u32) -> Option<u64> {
        self.get_by_level(level)
            .map(CurrencyDenomination::exchange_rate)
    }

    pub fn clear(&mut self) {
        self.denominations.clear();
    }

    /// Denominations in ascending level order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CurrencyDenomination> {
        self.denominations.values()
    }

    /// Mutable access for the persistence boundary (id assignment, renames).
    ///
    /// Levels cannot change through this path, so level uniqueness holds.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CurrencyDenomination> {
        self.denominations.values_mut()
    }

    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.denominations.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }

    fn level_of(&self, name: &str) -> Option<u32> {
        self.get_by_name(name)
            .map(CurrencyDenomination::hierarchy_level)
    }
}

fn validate_group_name(name: String) -> Result<String, CurrencyError> {
    if is_blank(&name) {
        return Err(CurrencyError::BlankName("group name"));
    }
    Ok(name.trim().to_string())
}

/// Stored shape: denominations as a plain list, re-added on decode so level
/// conflicts in stored data are rejected.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CurrencyGroupRecord {
    #[serde(default)]
    id: Option<CurrencyGroupId>,
    name: String,
    #[serde(default)]
    denominations: Vec<CurrencyDenomination>,
}

#[cfg(feature = "serde")]
impl TryFrom<CurrencyGroupRecord> for CurrencyGroup {
    type Error = CurrencyError;

    fn try_from(record: CurrencyGroupRecord) -> Result<Self, Self::Error> {
        let mut group = Self::with_denominations(record.name, record.denominations)?;
        group.id = record.id;
        Ok(group)
    }
}

#[cfg(feature = "serde")]
impl From<CurrencyGroup> for CurrencyGroupRecord {
    fn from(group: CurrencyGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            denominations: group.denominations.into_values().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ErrorKind};

    fn coin(name: &str, short: &str, level: i64, rate: i64) -> CurrencyDenomination {
        CurrencyDenomination::new(name, short, level, rate).unwrap()
    }

    fn imperial() -> CurrencyGroup {
        CurrencyGroup::with_denominations(
            "Imperial",
            [
                coin("Gold", "gp", 1, 1),
                coin("Silver", "sp", 2, 10),
                coin("Copper", "cp", 3, 100),
            ],
        )
        .unwrap()
    }

    #[test]
    fn blank_group_name_rejected() {
        assert_eq!(
            CurrencyGroup::new("   "),
            Err(CurrencyError::BlankName("group name"))
        );
        let mut group = imperial();
        assert!(group.rename("").is_err());
        assert_eq!(group.name(), "Imperial");
        group.rename("Old Imperial").unwrap();
        assert_eq!(group.name(), "Old Imperial");
    }

    #[test]
    fn duplicate_level_conflicts_until_removed() {
        let mut group = imperial();
        let electrum = coin("Electrum", "ep", 2, 5);

        let err = group.add(electrum.clone()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(group.len(), 3);

        let silver = group.get_by_level(2).cloned().unwrap();
        assert!(group.remove(&silver));
        group.add(electrum).unwrap();
        assert_eq!(group.get_by_level(2).unwrap().name(), "Electrum");
    }

    #[test]
    fn remove_requires_matching_entry() {
        let mut group = imperial();
        assert!(!group.remove(&coin("Electrum", "ep", 2, 5)));
        assert!(!group.remove(&coin("Silver", "sp", 9, 10)));
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn remove_by_name() {
        let mut group = imperial();
        let removed = group.remove_by_name("Copper").unwrap();
        assert_eq!(removed.hierarchy_level(), 3);
        assert!(group.get_by_name("Copper").is_none());

        let err = group.remove_by_name("Platinum").unwrap_err();
        assert_eq!(err, CurrencyError::NotFound("Platinum".to_string()));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn remove_by_id() {
        let mut group = imperial();
        for (raw, denomination) in group.iter_mut().enumerate() {
            denomination.assign_id(raw as i64 + 1).unwrap();
        }
        assert!(group.remove_by_id(DenominationId(2)));
        assert!(!group.remove_by_id(DenominationId(2)));
        assert!(group.get_by_level(2).is_none());
    }

    #[test]
    fn update_preserves_id() {
        let mut group = imperial();
        for denomination in group.iter_mut() {
            let raw = i64::from(denomination.hierarchy_level()) * 10;
            denomination.assign_id(raw).unwrap();
        }

        group.update(coin("Silver", "ss", 2, 12)).unwrap();
        let silver = group.get_by_name("Silver").unwrap();
        assert_eq!(silver.exchange_rate(), 12);
        assert_eq!(silver.short_name(), "ss");
        assert_eq!(silver.id(), Some(DenominationId(20)));
    }

    #[test]
    fn update_can_move_to_free_level() {
        let mut group = imperial();
        group.update(coin("Copper", "cp", 5, 100)).unwrap();
        assert!(group.get_by_level(3).is_none());
        assert_eq!(group.get_by_level(5).unwrap().name(), "Copper");
    }

    #[test]
    fn update_failures_leave_group_unchanged() {
        let mut group = imperial();
        let before = group.clone();

        assert_eq!(
            group.update(coin("Platinum", "pp", 4, 1)),
            Err(CurrencyError::NotFound("Platinum".to_string()))
        );
        assert!(matches!(
            group.update(coin("Copper", "cp", 1, 100)),
            Err(CurrencyError::LevelTaken { level: 1, .. })
        ));
        assert_eq!(group, before);
    }

    #[test]
    fn lookups() {
        let group = imperial();
        assert_eq!(group.get_by_name("Gold").unwrap().hierarchy_level(), 1);
        assert!(group.get_by_name("gold").is_none());
        assert!(group.get_by_level(9).is_none());
        assert_eq!(group.exchange_rate(3), Some(100));
        assert_eq!(group.exchange_rate(4), None);
    }

    #[test]
    fn iteration_ascends_by_level() {
        let group = CurrencyGroup::with_denominations(
            "Mixed",
            [coin("C", "c", 3, 1), coin("A", "a", 1, 1), coin("B", "b", 2, 1)],
        )
        .unwrap();
        let names: Vec<_> = group.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(group.levels().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn clear_empties_group() {
        let mut group = imperial();
        group.clear();
        assert!(group.is_empty());
        group.add(coin("Gold", "gp", 1, 1)).unwrap();
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn group_id_assignment() {
        let mut group = imperial();
        assert_eq!(group.assign_id(-5), Err(CurrencyError::IdOutOfRange(-5)));
        assert_eq!(group.assign_id(1), Ok(CurrencyGroupId(1)));
        assert!(group.assign_id(2).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decoding_rejects_level_conflicts() {
        let json = r#"{"name":"Broken","denominations":[
            {"name":"A","short_name":"a","hierarchy_level":1,"exchange_rate":1},
            {"name":"B","short_name":"b","hierarchy_level":1,"exchange_rate":2}]}"#;
        assert!(serde_json::from_str::<CurrencyGroup>(json).is_err());

        let group = imperial();
        let encoded = serde_json::to_string(&group).unwrap();
        assert_eq!(serde_json::from_str::<CurrencyGroup>(&encoded).unwrap(), group);
    }
}
