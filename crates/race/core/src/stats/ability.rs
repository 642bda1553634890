/// The six ability scores every creature carries.
///
/// - **STR** (Strength): physical power, carrying capacity
/// - **DEX** (Dexterity): agility, reflexes, balance
/// - **CON** (Constitution): health, stamina
/// - **INT** (Intelligence): reasoning, memory
/// - **WIS** (Wisdom): perception, insight
/// - **CHA** (Charisma): force of personality
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityType {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl AbilityType {
    /// All abilities in sheet order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Three-letter sheet abbreviation.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Position in [`AbilityType::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}
