//! Coin ledgers valued against a shared currency group.
//!
//! A [`Treasure`] stores coin quantities keyed by hierarchy level and the id
//! of the group it is denominated in. Rates and names are always read from
//! the group at the time of the call, never copied.
//!
//! ```text
//! total = Σ quantity[level] × exchange_rate(level)
//! ```
//!
//! Levels the group no longer has contribute nothing to the total.

use std::collections::BTreeMap;

use crate::config::RulesConfig;
use crate::currency::{CurrencyGroup, CurrencyOracle};
use crate::error::{CoreError, ErrorKind};
use crate::ids::{CurrencyGroupId, TreasureId};

/// Errors raised by treasure operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreasureError {
    /// The referenced currency group could not be resolved.
    #[error("currency group {0:?} is not available")]
    GroupNotFound(Option<CurrencyGroupId>),

    /// The treasure has no ledger entry for this level.
    #[error("hierarchy level {0} is not tracked by this treasure")]
    UnknownLevel(u32),

    /// The change would leave a negative coin count.
    #[error("cannot apply {amount} coins at level {level}: only {current} held")]
    InsufficientCoins { level: u32, current: u64, amount: i64 },

    /// Quantity or total does not fit the ledger's integer width.
    #[error("coin arithmetic overflowed")]
    Overflow,

    #[error("id {0} is outside 0..=4294967295")]
    IdOutOfRange(i64),
}

impl CoreError for TreasureError {
    fn kind(&self) -> ErrorKind {
        use TreasureError::*;
        match self {
            GroupNotFound(_) => ErrorKind::InvalidArgument,
            UnknownLevel(_) => ErrorKind::NotFound,
            InsufficientCoins { .. } | Overflow | IdOutOfRange(_) => ErrorKind::OutOfRange,
        }
    }

    fn error_code(&self) -> &'static str {
        use TreasureError::*;
        match self {
            GroupNotFound(_) => "TREASURE_GROUP_NOT_FOUND",
            UnknownLevel(_) => "TREASURE_UNKNOWN_LEVEL",
            InsufficientCoins { .. } => "TREASURE_INSUFFICIENT_COINS",
            Overflow => "TREASURE_OVERFLOW",
            IdOutOfRange(_) => "TREASURE_ID_OUT_OF_RANGE",
        }
    }
}

/// A coin ledger for one currency group.
///
/// # Example
/// ```
/// # use race_core::currency::{CurrencyDenomination, CurrencyGroup};
/// # use race_core::treasure::Treasure;
/// let group = CurrencyGroup::with_denominations(
///     "Imperial",
///     [
///         CurrencyDenomination::new("Gold", "gp", 1, 1).unwrap(),
///         CurrencyDenomination::new("Silver", "sp", 2, 10).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// let mut purse = Treasure::new(&group);
/// purse.add_coins(1, 3).unwrap();
/// purse.add_coins(2, 4).unwrap();
/// assert_eq!(purse.total_value_in_base_units(&group), Ok(43));
/// assert_eq!(purse.to_display_string(&group).unwrap(), "4 Silver, 3 Gold");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Treasure {
    #[cfg_attr(feature = "serde", serde(default))]
    id: Option<TreasureId>,
    currency_group: Option<CurrencyGroupId>,
    coins: BTreeMap<u32, u64>,
}

impl Treasure {
    /// An empty ledger with one zero entry per denomination in `group`.
    pub fn new(group: &CurrencyGroup) -> Self {
        Self {
            id: None,
            currency_group: group.id(),
            coins: group.levels().map(|level| (level, 0)).collect(),
        }
    }

    /// Resolve the group through an oracle; fails with `InvalidArgument` when absent.
    pub fn for_group<O: CurrencyOracle + ?Sized>(
        currencies: &O,
        group_id: Option<CurrencyGroupId>,
    ) -> Result<Self, TreasureError> {
        currencies
            .currency_group(group_id)
            .map(Self::new)
            .ok_or(TreasureError::GroupNotFound(group_id))
    }

    pub fn id(&self) -> Option<TreasureId> {
        self.id
    }

    pub fn assign_id(&mut self, raw: i64) -> Result<TreasureId, TreasureError> {
        let id = TreasureId::from_raw(raw).ok_or(TreasureError::IdOutOfRange(raw))?;
        self.id = Some(id);
        Ok(id)
    }

    pub fn currency_group(&self) -> Option<CurrencyGroupId> {
        self.currency_group
    }

    /// Point the ledger at `group` (e.g. once the group has been persisted)
    /// and start tracking any of its levels the ledger lacks.
    pub fn relink(&mut self, group: &CurrencyGroup) {
        self.currency_group = group.id();
        self.sync_with_group(group);
    }

    /// Add zero entries for levels added to the group after this treasure was
    /// created. Existing entries are never dropped.
    pub fn sync_with_group(&mut self, group: &CurrencyGroup) {
        for level in group.levels() {
            self.coins.entry(level).or_insert(0);
        }
    }

    /// Change the quantity at `level` by `amount`.
    ///
    /// Fails with `NotFound` for levels this ledger does not track and with
    /// `OutOfRange` if the result would be negative; the ledger is unchanged
    /// on failure.
    pub fn add_coins(&mut self, level: u32, amount: i64) -> Result<u64, TreasureError> {
        let current = self
            .coins
            .get_mut(&level)
            .ok_or(TreasureError::UnknownLevel(level))?;

        let updated = if amount >= 0 {
            current
                .checked_add(amount.unsigned_abs())
                .ok_or(TreasureError::Overflow)?
        } else {
            current
                .checked_sub(amount.unsigned_abs())
                .ok_or(TreasureError::InsufficientCoins {
                    level,
                    current: *current,
                    amount,
                })?
        };

        *current = updated;
        Ok(updated)
    }

    /// Quantity at `level`; zero for levels this ledger does not track.
    pub fn amount(&self, level: u32) -> u64 {
        self.coins.get(&level).copied().unwrap_or(0)
    }

    /// All tracked levels with their quantities, ascending by level.
    pub fn coins(&self) -> &BTreeMap<u32, u64> {
        &self.coins
    }

    pub fn is_empty(&self) -> bool {
        self.coins.values().all(|quantity| *quantity == 0)
    }

    /// Value of the whole ledger in the group's base units.
    pub fn total_value_in_base_units<O: CurrencyOracle + ?Sized>(
        &self,
        currencies: &O,
    ) -> Result<u64, TreasureError> {
        let group = self.resolve(currencies)?;
        self.coins
            .iter()
            .filter_map(|(level, quantity)| {
                group
                    .exchange_rate(*level)
                    .map(|rate| quantity.checked_mul(rate))
            })
            .try_fold(0u64, |total, value| {
                value
                    .and_then(|value| total.checked_add(value))
                    .ok_or(TreasureError::Overflow)
            })
    }

    /// Human-readable summary, highest level first: `"7 Copper, 2 Gold"`.
    ///
    /// Returns [`RulesConfig::DEFAULT_EMPTY_TREASURE_LABEL`] when nothing
    /// non-zero is held in a denomination the group still has.
    pub fn to_display_string<O: CurrencyOracle + ?Sized>(
        &self,
        currencies: &O,
    ) -> Result<String, TreasureError> {
        self.display_with_label(currencies, RulesConfig::DEFAULT_EMPTY_TREASURE_LABEL)
    }

    /// [`Treasure::to_display_string`] with a custom empty label.
    pub fn display_with_label<O: CurrencyOracle + ?Sized>(
        &self,
        currencies: &O,
        empty_label: &str,
    ) -> Result<String, TreasureError> {
        let group = self.resolve(currencies)?;
        let parts: Vec<String> = self
            .coins
            .iter()
            .rev()
            .filter(|(_, quantity)| **quantity > 0)
            .filter_map(|(level, quantity)| {
                group
                    .get_by_level(*level)
                    .map(|denomination| format!("{} {}", quantity, denomination.name()))
            })
            .collect();

        if parts.is_empty() {
            return Ok(empty_label.to_string());
        }
        Ok(parts.join(", "))
    }

    fn resolve<'a, O: CurrencyOracle + ?Sized>(
        &self,
        currencies: &'a O,
    ) -> Result<&'a CurrencyGroup, TreasureError> {
        currencies
            .currency_group(self.currency_group)
            .ok_or(TreasureError::GroupNotFound(self.currency_group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{CurrencyDenomination, CurrencyRegistry};

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
    fn starts_with_zero_per_denomination() {
        let treasure = Treasure::new(&imperial());
        assert_eq!(treasure.coins().len(), 3);
        assert!(treasure.coins().values().all(|q| *q == 0));
        assert!(treasure.is_empty());
    }

    #[test]
    fn total_in_base_units() {
        let group = imperial();
        let mut treasure = Treasure::new(&group);
        treasure.add_coins(1, 2).unwrap();
        treasure.add_coins(2, 5).unwrap();
        treasure.add_coins(3, 7).unwrap();
        assert_eq!(treasure.total_value_in_base_units(&group), Ok(752));
    }

    #[test]
    fn amount_of_unknown_level_is_zero() {
        let treasure = Treasure::new(&imperial());
        assert_eq!(treasure.amount(9), 0);
    }

    #[test]
    fn add_coins_rejects_unknown_levels() {
        let mut treasure = Treasure::new(&imperial());
        assert_eq!(treasure.add_coins(4, 1), Err(TreasureError::UnknownLevel(4)));
        assert_eq!(
            TreasureError::UnknownLevel(4).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn add_coins_never_goes_negative() {
        let mut treasure = Treasure::new(&imperial());
        treasure.add_coins(2, 5).unwrap();
        assert_eq!(treasure.add_coins(2, -3), Ok(2));

        let err = treasure.add_coins(2, -3).unwrap_err();
        assert_eq!(
            err,
            TreasureError::InsufficientCoins {
                level: 2,
                current: 2,
                amount: -3
            }
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(treasure.amount(2), 2);
    }

    #[test]
    fn removed_denominations_contribute_nothing() {
        let mut group = imperial();
        let mut treasure = Treasure::new(&group);
        treasure.add_coins(1, 2).unwrap();
        treasure.add_coins(3, 7).unwrap();

        group.remove_by_name("Copper").unwrap();
        assert_eq!(treasure.total_value_in_base_units(&group), Ok(2));
        assert_eq!(treasure.to_display_string(&group).unwrap(), "2 Gold");
        // the ledger still remembers the coins
        assert_eq!(treasure.amount(3), 7);
    }

    #[test]
    fn later_denominations_tracked_after_sync() {
        let mut group = imperial();
        let mut treasure = Treasure::new(&group);
        group.add(coin("Platinum", "pp", 4, 1000)).unwrap();

        assert_eq!(treasure.add_coins(4, 1), Err(TreasureError::UnknownLevel(4)));
        treasure.sync_with_group(&group);
        treasure.add_coins(4, 1).unwrap();
        assert_eq!(treasure.total_value_in_base_units(&group), Ok(1000));
    }

    #[test]
    fn rate_changes_visible_through_registry() {
        let mut registry = CurrencyRegistry::new();
        let id = registry.register(imperial()).unwrap();

        let mut first = Treasure::for_group(&registry, Some(id)).unwrap();
        let mut second = Treasure::for_group(&registry, Some(id)).unwrap();
        first.add_coins(2, 1).unwrap();
        second.add_coins(2, 3).unwrap();

        let mut silver = registry.get(id).unwrap().get_by_name("Silver").cloned().unwrap();
        silver.set_exchange_rate(12).unwrap();
        registry.get_mut(id).unwrap().update(silver).unwrap();

        assert_eq!(first.total_value_in_base_units(&registry), Ok(12));
        assert_eq!(second.total_value_in_base_units(&registry), Ok(36));
    }

    #[test]
    fn missing_group_is_invalid_argument() {
        let registry = CurrencyRegistry::new();
        let err = Treasure::for_group(&registry, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let treasure = Treasure::new(&imperial());
        assert_eq!(
            treasure.total_value_in_base_units(&registry),
            Err(TreasureError::GroupNotFound(None))
        );
    }

    #[test]
    fn display_highest_level_first() {
        let group = imperial();
        let mut treasure = Treasure::new(&group);
        treasure.add_coins(1, 2).unwrap();
        treasure.add_coins(3, 7).unwrap();
        assert_eq!(
            treasure.to_display_string(&group).unwrap(),
            "7 Copper, 2 Gold"
        );
    }

    #[test]
    fn display_empty_sentinel() {
        let group = imperial();
        let treasure = Treasure::new(&group);
        assert_eq!(
            treasure.to_display_string(&group).unwrap(),
            RulesConfig::DEFAULT_EMPTY_TREASURE_LABEL
        );
        assert_eq!(
            treasure.display_with_label(&group, "nothing").unwrap(),
            "nothing"
        );

        let empty_group = CurrencyGroup::new("Barter").unwrap();
        assert_eq!(
            Treasure::new(&empty_group)
                .to_display_string(&empty_group)
                .unwrap(),
            "Empty treasure"
        );
    }

    #[test]
    fn relink_after_persisting_group() {
        let mut group = imperial();
        let mut treasure = Treasure::new(&group);
        treasure.add_coins(1, 4).unwrap();

        group.assign_id(3).unwrap();
        assert!(treasure.total_value_in_base_units(&group).is_err());

        treasure.relink(&group);
        assert_eq!(treasure.currency_group(), Some(CurrencyGroupId(3)));
        assert_eq!(treasure.total_value_in_base_units(&group), Ok(4));
    }

    #[test]
    fn overflow_detected() {
        let group = CurrencyGroup::with_denominations(
            "Huge",
            [coin("Star", "st", 1, i64::MAX)],
        )
        .unwrap();
        let mut treasure = Treasure::new(&group);
        treasure.add_coins(1, 3).unwrap();
        assert_eq!(
            treasure.total_value_in_base_units(&group),
            Err(TreasureError::Overflow)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn coin_map_round_trips() {
        let group = imperial();
        let mut treasure = Treasure::new(&group);
        treasure.add_coins(2, 5).unwrap();
        let json = serde_json::to_string(&treasure).unwrap();
        let decoded: Treasure = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, treasure);
    }
}
