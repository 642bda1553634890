//! Ability score → bonus lookup.
//!
//! The table is a monotonic step function over `1..=42`:
//!
//! ```text
//! score   1   2-3  4-5  6-7  8-9  10-12  13-14  15-16  ...  41-42
//! bonus  -5   -4   -3   -2   -1     0     +1     +2    ...   +15
//! ```
//!
//! Every step above 10-12 is two points wide.

use super::StatError;
use crate::config::RulesConfig;

/// Bonus for each score, indexed by `score - 1`.
const MODIFIERS: [i32; 42] = [
    -5, // 1
    -4, -4, // 2-3
    -3, -3, // 4-5
    -2, -2, // 6-7
    -1, -1, // 8-9
    0, 0, 0, // 10-12
    1, 1, // 13-14
    2, 2, // 15-16
    3, 3, // 17-18
    4, 4, // 19-20
    5, 5, // 21-22
    6, 6, // 23-24
    7, 7, // 25-26
    8, 8, // 27-28
    9, 9, // 29-30
    10, 10, // 31-32
    11, 11, // 33-34
    12, 12, // 35-36
    13, 13, // 37-38
    14, 14, // 39-40
    15, 15, // 41-42
];

/// Stateless lookup of the bonus granted by an ability score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatModifierTable;

impl StatModifierTable {
    /// Bonus for `score`; fails with `OutOfRange` outside `1..=42`.
    pub fn modifier(score: i32) -> Result<i32, StatError> {
        if !RulesConfig::is_valid_score(score) {
            return Err(StatError::ScoreOutOfRange(score));
        }
        Ok(MODIFIERS[(score - RulesConfig::MIN_SCORE) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(StatModifierTable::modifier(1), Ok(-5));
        assert_eq!(StatModifierTable::modifier(2), Ok(-4));
        assert_eq!(StatModifierTable::modifier(9), Ok(-1));
        assert_eq!(StatModifierTable::modifier(10), Ok(0));
        assert_eq!(StatModifierTable::modifier(12), Ok(0));
        assert_eq!(StatModifierTable::modifier(13), Ok(1));
        assert_eq!(StatModifierTable::modifier(17), Ok(3));
        assert_eq!(StatModifierTable::modifier(41), Ok(15));
        assert_eq!(StatModifierTable::modifier(42), Ok(15));
    }

    #[test]
    fn outside_table_fails() {
        assert_eq!(
            StatModifierTable::modifier(0),
            Err(StatError::ScoreOutOfRange(0))
        );
        assert_eq!(
            StatModifierTable::modifier(43),
            Err(StatError::ScoreOutOfRange(43))
        );
        assert!(StatModifierTable::modifier(-7).is_err());
    }

    #[test]
    fn monotonic_two_point_steps() {
        let mut previous = StatModifierTable::modifier(1).unwrap();
        for score in 2..=42 {
            let current = StatModifierTable::modifier(score).unwrap();
            assert!(current >= previous);
            assert!(current - previous <= 1);
            previous = current;
        }
    }

    #[test]
    fn matches_closed_form() {
        for score in 1..=42i32 {
            let expected = if score <= 10 {
                (score - 10).div_euclid(2)
            } else {
                (score - 11) / 2
            };
            assert_eq!(StatModifierTable::modifier(score), Ok(expected), "score {score}");
        }
    }
}
