//! Hero ability scores (STR, DEX, CON, INT, WIS, CHA)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Number of ability scores carried by every hero
pub const NUM_ATTRS: usize = 6;

/// Ability score type
///
/// Discriminants follow the on-disk column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[repr(u8)]
pub enum Attribute {
    Strength = 0,
    Dexterity = 1,
    Constitution = 2,
    Intelligence = 3,
    Wisdom = 4,
    Charisma = 5,
}

impl Attribute {
    /// Short name for display
    pub const fn short_name(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Dexterity => "DEX",
            Attribute::Constitution => "CON",
            Attribute::Intelligence => "INT",
            Attribute::Wisdom => "WIS",
            Attribute::Charisma => "CHA",
        }
    }

    /// Full lowercase name, also used as the column header
    pub const fn full_name(&self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Constitution => "constitution",
            Attribute::Intelligence => "intelligence",
            Attribute::Wisdom => "wisdom",
            Attribute::Charisma => "charisma",
        }
    }

    /// All attributes in column order
    pub const ALL: [Attribute; NUM_ATTRS] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];
}

/// Describe an ability score in words ("weak", "average", "superb", ...)
pub fn describe(value: i32) -> &'static str {
    match value {
        ..=3 => "very weak",
        4..=5 => "weak",
        6..=7 => "below average",
        8..=10 => "average",
        11..=13 => "above average",
        14..=15 => "good",
        16..=17 => "very good",
        18 => "excellent",
        19..=21 => "superb",
        22..=24 => "extraordinary",
        _ => "legendary",
    }
}

/// A hero's six ability scores
///
/// Scores are stored as given; no range is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    values: [i32; NUM_ATTRS],
}

impl Attributes {
    /// Create attributes from values in column order
    pub const fn new(values: [i32; NUM_ATTRS]) -> Self {
        Self { values }
    }

    /// Attributes with only the classic physical trio set
    pub const fn physical(strength: i32, dexterity: i32, constitution: i32) -> Self {
        Self::new([strength, dexterity, constitution, 0, 0, 0])
    }

    /// Get an attribute value
    pub const fn get(&self, attr: Attribute) -> i32 {
        self.values[attr as usize]
    }

    /// Set an attribute value
    pub fn set(&mut self, attr: Attribute, value: i32) {
        self.values[attr as usize] = value;
    }

    /// Sum of all six scores, widened so extreme values cannot overflow
    pub fn total(&self) -> i64 {
        self.values.iter().map(|&v| i64::from(v)).sum()
    }
}
