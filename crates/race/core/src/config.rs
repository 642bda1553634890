/// Rules constants and tunable presentation defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Score assigned to abilities that are not set explicitly.
    pub default_score: i32,
    /// Text shown for a treasure with no coins.
    pub empty_treasure_label: String,
}

impl RulesConfig {
    // ===== fixed by the modifier table =====
    pub const MIN_SCORE: i32 = 1;
    pub const MAX_SCORE: i32 = 42;
    pub const DEFAULT_SCORE: i32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EMPTY_TREASURE_LABEL: &'static str = "Empty treasure";

    pub fn new() -> Self {
        Self {
            default_score: Self::DEFAULT_SCORE,
            empty_treasure_label: Self::DEFAULT_EMPTY_TREASURE_LABEL.to_string(),
        }
    }

    /// Whether `score` has an entry in the modifier table.
    pub fn is_valid_score(score: i32) -> bool {
        (Self::MIN_SCORE..=Self::MAX_SCORE).contains(&score)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
