//! Hero records

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::{Attribute, Attributes};

/// One hero's persisted attributes
///
/// A plain value: no invariants hold across fields. The `name` is the lookup
/// key within a roster but is not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroRecord {
    pub name: String,
    /// Free-text tag such as "Warrior" or "Rogue"
    pub role: String,
    pub attributes: Attributes,
    /// May be empty
    pub special_ability: String,
    pub backstory: String,
}

impl HeroRecord {
    pub fn new(name: impl Into<String>, role: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            attributes,
            special_ability: String::new(),
            backstory: String::new(),
        }
    }

    /// Five-field hero: name, the physical trio and a backstory
    pub fn classic(
        name: impl Into<String>,
        strength: i32,
        dexterity: i32,
        constitution: i32,
        backstory: impl Into<String>,
    ) -> Self {
        Self::new(name, "", Attributes::physical(strength, dexterity, constitution))
            .with_backstory(backstory)
    }

    pub fn with_special_ability(mut self, ability: impl Into<String>) -> Self {
        self.special_ability = ability.into();
        self
    }

    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    /// Case-insensitive name comparison used by roster lookups
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn stat(&self, attr: Attribute) -> i32 {
        self.attributes.get(attr)
    }
}

impl fmt::Display for HeroRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.role.is_empty() {
            write!(f, " ({})", self.role)?;
        }
        write!(f, " [")?;
        for (i, attr) in Attribute::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", attr.short_name(), self.attributes.get(*attr))?;
        }
        write!(f, "]")?;
        if !self.special_ability.is_empty() {
            write!(f, " <{}>", self.special_ability)?;
        }
        write!(f, " - {}", self.backstory)
    }
}
