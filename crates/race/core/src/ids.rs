//! Strongly-typed identifiers assigned by the persistence boundary.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u32);

        impl $name {
            /// Convert a raw storage key, rejecting negatives and overflow.
            pub fn from_raw(raw: i64) -> Option<Self> {
                u32::try_from(raw).ok().map(Self)
            }

            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(
    /// Identity of a single currency denomination.
    DenominationId
);
define_id!(
    /// Identity of a currency group; treasures refer to groups through it.
    CurrencyGroupId
);
define_id!(
    /// Identity of a treasure ledger.
    TreasureId
);
define_id!(
    /// Identity of a race record.
    RaceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_conversion_rejects_negative_and_overflow() {
        assert_eq!(DenominationId::from_raw(7), Some(DenominationId(7)));
        assert_eq!(DenominationId::from_raw(0), Some(DenominationId(0)));
        assert_eq!(DenominationId::from_raw(-1), None);
        assert_eq!(RaceId::from_raw(i64::from(u32::MAX) + 1), None);
    }

    #[test]
    fn display() {
        assert_eq!(CurrencyGroupId(3).to_string(), "#3");
    }
}
