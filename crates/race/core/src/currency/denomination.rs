//! A single coin type inside a currency hierarchy.

use super::CurrencyError;
use crate::error::is_blank;
use crate::ids::DenominationId;

/// One named unit of currency.
///
/// `hierarchy_level` ranks the coin inside its group (unique per group) and
/// `exchange_rate` is the multiplier that converts one coin into the group's
/// base units. Both are at least 1.
///
/// The id stays unassigned until the persistence boundary stores the
/// denomination and calls [`CurrencyDenomination::assign_id`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "DenominationRecord", into = "DenominationRecord")
)]
pub struct CurrencyDenomination {
    id: Option<DenominationId>,
    name: String,
    short_name: String,
    hierarchy_level: u32,
    exchange_rate: u64,
}

impl CurrencyDenomination {
    /// Create a denomination.
    ///
    /// Fails with `InvalidArgument` for blank names and `OutOfRange` for a
    /// level or rate below 1.
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        hierarchy_level: i64,
        exchange_rate: i64,
    ) -> Result<Self, CurrencyError> {
        let name = validate_name(name.into(), "name")?;
        let short_name = validate_name(short_name.into(), "short_name")?;
        let hierarchy_level = u32::try_from(hierarchy_level)
            .ok()
            .filter(|level| *level >= 1)
            .ok_or(CurrencyError::LevelOutOfRange(hierarchy_level))?;
        let exchange_rate = validate_rate(exchange_rate)?;

        Ok(Self {
            id: None,
            name,
            short_name,
            hierarchy_level,
            exchange_rate,
        })
    }

    pub fn id(&self) -> Option<DenominationId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn hierarchy_level(&self) -> u32 {
        self.hierarchy_level
    }

    pub fn exchange_rate(&self) -> u64 {
        self.exchange_rate
    }

    /// Record the storage id.
    ///
    /// Negative ids fail with `OutOfRange`. Assigning the id the denomination
    /// already carries is a no-op; assigning a different one is a `Conflict`.
    pub fn assign_id(&mut self, raw: i64) -> Result<DenominationId, CurrencyError> {
        let id = DenominationId::from_raw(raw).ok_or(CurrencyError::IdOutOfRange(raw))?;
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
        self.name = validate_name(name.into(), "name")?;
        Ok(())
    }

    pub fn rename_short(&mut self, short_name: impl Into<String>) -> Result<(), CurrencyError> {
        self.short_name = validate_name(short_name.into(), "short_name")?;
        Ok(())
    }

    pub fn set_exchange_rate(&mut self, exchange_rate: i64) -> Result<(), CurrencyError> {
        self.exchange_rate = validate_rate(exchange_rate)?;
        Ok(())
    }

    /// Carry over the storage id from the entry this one replaces.
    pub(crate) fn inherit_id(&mut self, id: Option<DenominationId>) {
        self.id = id;
    }
}

fn validate_name(value: String, field: &'static str) -> Result<String, CurrencyError> {
    if is_blank(&value) {
        return Err(CurrencyError::BlankName(field));
    }
    Ok(value.trim().to_string())
}

fn validate_rate(exchange_rate: i64) -> Result<u64, CurrencyError> {
    u64::try_from(exchange_rate)
        .ok()
        .filter(|rate| *rate >= 1)
        .ok_or(CurrencyError::RateOutOfRange(exchange_rate))
}

/// Stored shape; decoding re-runs every constructor check.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DenominationRecord {
    #[serde(default)]
    id: Option<DenominationId>,
    name: String,
    short_name: String,
    hierarchy_level: i64,
    exchange_rate: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<DenominationRecord> for CurrencyDenomination {
    type Error = CurrencyError;

    fn try_from(record: DenominationRecord) -> Result<Self, Self::Error> {
        let mut denomination = Self::new(
            record.name,
            record.short_name,
            record.hierarchy_level,
            record.exchange_rate,
        )?;
        denomination.id = record.id;
        Ok(denomination)
    }
}

#[cfg(feature = "serde")]
impl From<CurrencyDenomination> for DenominationRecord {
    fn from(denomination: CurrencyDenomination) -> Self {
        Self {
            id: denomination.id,
            name: denomination.name,
            short_name: denomination.short_name,
            hierarchy_level: i64::from(denomination.hierarchy_level),
            exchange_rate: i64::try_from(denomination.exchange_rate).unwrap_or(i64::MAX),
        }
    }
}
