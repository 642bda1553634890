//! A single ability score with its adjustment layers.

use super::{AbilityType, StatError, StatModifierTable};

/// One scored attribute.
///
/// Inputs are the raw score plus two adjustment layers:
/// - **value_adjustment**: permanent change to the score (racial bonus, aging)
/// - **bonus_adjustment**: temporary change to the resulting bonus (buffs)
///
/// Derived values are recomputed from the current inputs on every read:
///
/// ```text
/// final_value = raw_value + value_adjustment
/// raw_bonus   = modifier(raw_value)
/// final_bonus = modifier(final_value) + bonus_adjustment
/// ```
///
/// # Example
/// ```
/// # use race_core::stats::{AbilityType, Stat};
/// let mut stat = Stat::new(AbilityType::Strength, 15);
/// stat.set_value_adjustment(2).set_bonus_adjustment(1);
/// assert_eq!(stat.final_value(), 17);
/// assert_eq!(stat.final_bonus(), Ok(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    kind: AbilityType,
    raw_value: i32,
    value_adjustment: i32,
    bonus_adjustment: i32,
}

impl Stat {
    pub const fn new(kind: AbilityType, raw_value: i32) -> Self {
        Self {
            kind,
            raw_value,
            value_adjustment: 0,
            bonus_adjustment: 0,
        }
    }

    /// Same inputs, filed under another ability.
    pub(crate) const fn with_kind(self, kind: AbilityType) -> Self {
        Self { kind, ..self }
    }

    pub const fn kind(&self) -> AbilityType {
        self.kind
    }

    pub const fn raw_value(&self) -> i32 {
        self.raw_value
    }

    pub const fn value_adjustment(&self) -> i32 {
        self.value_adjustment
    }

    pub const fn bonus_adjustment(&self) -> i32 {
        self.bonus_adjustment
    }

    pub fn set_raw_value(&mut self, raw_value: i32) -> &mut Self {
        self.raw_value = raw_value;
        self
    }

    pub fn set_value_adjustment(&mut self, adjustment: i32) -> &mut Self {
        self.value_adjustment = adjustment;
        self
    }

    pub fn set_bonus_adjustment(&mut self, adjustment: i32) -> &mut Self {
        self.bonus_adjustment = adjustment;
        self
    }

    /// Score after permanent adjustments.
    pub const fn final_value(&self) -> i32 {
        self.raw_value.saturating_add(self.value_adjustment)
    }

    /// Bonus of the unadjusted score.
    pub fn raw_bonus(&self) -> Result<i32, StatError> {
        StatModifierTable::modifier(self.raw_value)
    }

    /// Bonus of the adjusted score plus the temporary bonus adjustment,
    /// saturating at the `i32` bounds.
    pub fn final_bonus(&self) -> Result<i32, StatError> {
        let bonus = StatModifierTable::modifier(self.final_value())?;
        Ok(bonus.saturating_add(self.bonus_adjustment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_values_follow_inputs() {
        let mut stat = Stat::new(AbilityType::Dexterity, 15);
        stat.set_value_adjustment(2).set_bonus_adjustment(1);

        assert_eq!(stat.final_value(), 17);
        assert_eq!(stat.raw_bonus(), Ok(2));
        assert_eq!(stat.final_bonus(), Ok(4));
    }

    #[test]
    fn never_stale_after_mutation() {
        let mut stat = Stat::new(AbilityType::Wisdom, 10);
        assert_eq!(stat.final_bonus(), Ok(0));

        stat.set_raw_value(20);
        assert_eq!(stat.final_bonus(), Ok(4));

        stat.set_value_adjustment(-12);
        assert_eq!(stat.final_value(), 8);
        assert_eq!(stat.final_bonus(), Ok(-1));
        assert_eq!(stat.raw_bonus(), Ok(4));
    }

    #[test]
    fn out_of_table_scores_propagate() {
        let mut stat = Stat::new(AbilityType::Charisma, 42);
        assert_eq!(stat.raw_bonus(), Ok(15));

        stat.set_value_adjustment(1);
        assert_eq!(stat.final_bonus(), Err(StatError::ScoreOutOfRange(43)));

        // setters accept anything; only the lookup is bounded
        stat.set_raw_value(0).set_value_adjustment(0);
        assert_eq!(stat.raw_bonus(), Err(StatError::ScoreOutOfRange(0)));
    }

    #[test]
    fn negative_bonus_adjustment() {
        let mut stat = Stat::new(AbilityType::Constitution, 12);
        stat.set_bonus_adjustment(-2);
        assert_eq!(stat.final_bonus(), Ok(-2));
    }

    #[test]
    fn extreme_adjustments_saturate() {
        let mut stat = Stat::new(AbilityType::Strength, 15);
        stat.set_bonus_adjustment(i32::MAX);
        assert_eq!(stat.final_bonus(), Ok(i32::MAX));

        stat.set_raw_value(1).set_bonus_adjustment(i32::MIN);
        assert_eq!(stat.final_bonus(), Ok(i32::MIN));

        stat.set_raw_value(i32::MAX).set_value_adjustment(1);
        assert_eq!(stat.final_value(), i32::MAX);
        assert_eq!(stat.final_bonus(), Err(StatError::ScoreOutOfRange(i32::MAX)));
    }
}
