//! Group lookup by identity.
//!
//! Treasures never copy a group's denominations. They keep the group id and
//! resolve the group through a [`CurrencyOracle`] whenever rates or names
//! are needed, so a rate change is visible to every treasure at once.

use std::collections::BTreeMap;

use super::{CurrencyError, CurrencyGroup};
use crate::ids::CurrencyGroupId;

/// Read access to currency groups by id.
///
/// `None` addresses a group that has not been persisted yet; only the group
/// itself can resolve that reference.
pub trait CurrencyOracle {
    fn currency_group(&self, id: Option<CurrencyGroupId>) -> Option<&CurrencyGroup>;
}

impl CurrencyOracle for CurrencyGroup {
    fn currency_group(&self, id: Option<CurrencyGroupId>) -> Option<&CurrencyGroup> {
        (self.id() == id).then_some(self)
    }
}

/// In-memory set of currency groups keyed by id.
#[derive(Clone, Debug, Default)]
pub struct CurrencyRegistry {
    groups: BTreeMap<CurrencyGroupId, CurrencyGroup>,
}

impl CurrencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a group, assigning the next free id when it has none.
    ///
    /// A group that already carries an id keeps it; registering a second
    /// group under a taken id fails with `Conflict`.
    pub fn register(&mut self, mut group: CurrencyGroup) -> Result<CurrencyGroupId, CurrencyError> {
        let id = match group.id() {
            Some(id) => {
                if self.groups.contains_key(&id) {
                    return Err(CurrencyError::GroupIdTaken(id.value()));
                }
                id
            }
            None => group.assign_id(i64::from(self.next_id().value()))?,
        };
        self.groups.insert(id, group);
        Ok(id)
    }

    pub fn get(&self, id: CurrencyGroupId) -> Option<&CurrencyGroup> {
        self.groups.get(&id)
    }

    /// Mutable access; changes are seen by every treasure on the next lookup.
    pub fn get_mut(&mut self, id: CurrencyGroupId) -> Option<&mut CurrencyGroup> {
        self.groups.get_mut(&id)
    }

    pub fn remove(&mut self, id: CurrencyGroupId) -> Option<CurrencyGroup> {
        self.groups.remove(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CurrencyGroup> {
        let name = name.trim();
        self.groups.values().find(|group| group.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencyGroup> {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn next_id(&self) -> CurrencyGroupId {
        self.groups
            .keys()
            .next_back()
            .map_or(CurrencyGroupId(1), |last| CurrencyGroupId(last.0 + 1))
    }
}

impl CurrencyOracle for CurrencyRegistry {
    fn currency_group(&self, id: Option<CurrencyGroupId>) -> Option<&CurrencyGroup> {
        id.and_then(|id| self.groups.get(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyDenomination;

    fn group(name: &str) -> CurrencyGroup {
        CurrencyGroup::with_denominations(
            name,
            [CurrencyDenomination::new("Gold", "gp", 1, 1).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn unpersisted_group_resolves_itself_only() {
        let g = group("Imperial");
        assert!(g.currency_group(None).is_some());
        assert!(g.currency_group(Some(CurrencyGroupId(1))).is_none());
    }

    #[test]
    fn register_assigns_sequential_ids() {
        let mut registry = CurrencyRegistry::new();
        let first = registry.register(group("Imperial")).unwrap();
        let second = registry.register(group("Dwarven")).unwrap();
        assert_eq!(first, CurrencyGroupId(1));
        assert_eq!(second, CurrencyGroupId(2));
        assert_eq!(registry.get(second).unwrap().id(), Some(second));
        assert_eq!(registry.find_by_name("Dwarven").unwrap().id(), Some(second));
    }

    #[test]
    fn register_keeps_existing_id_and_rejects_duplicates() {
        let mut registry = CurrencyRegistry::new();
        let mut g = group("Imperial");
        g.assign_id(7).unwrap();
        assert_eq!(registry.register(g.clone()).unwrap(), CurrencyGroupId(7));
        assert!(registry.register(g).is_err());
        assert_eq!(registry.register(group("Next")).unwrap(), CurrencyGroupId(8));
    }

    #[test]
    fn oracle_lookup_requires_id() {
        let mut registry = CurrencyRegistry::new();
        let id = registry.register(group("Imperial")).unwrap();
        assert!(registry.currency_group(Some(id)).is_some());
        assert!(registry.currency_group(None).is_none());
        assert!(registry.remove(id).is_some());
        assert!(registry.is_empty());
    }
}
