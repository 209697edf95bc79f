//! Line-delimited text codec for rosters
//!
//! One hero per line, fields joined by [`DELIMITER`] in the order of the
//! active [`Schema`]. Free-text fields are written raw: a delimiter or line
//! break inside one shifts the columns on the next decode, so such text is
//! not representable in this format.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use guild_core::{Attribute, HeroRecord, Roster};

use crate::{RecordError, SaveError};

/// Field separator
pub const DELIMITER: char = ',';

/// One column of the text format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Role,
    Attr(Attribute),
    SpecialAbility,
    Backstory,
}

impl Field {
    /// Column header name
    pub const fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Role => "role",
            Field::Attr(attr) => attr.full_name(),
            Field::SpecialAbility => "specialAbility",
            Field::Backstory => "backstory",
        }
    }

    fn write(&self, hero: &HeroRecord, out: &mut String) {
        match self {
            Field::Name => out.push_str(&hero.name),
            Field::Role => out.push_str(&hero.role),
            Field::Attr(attr) => out.push_str(&hero.stat(*attr).to_string()),
            Field::SpecialAbility => out.push_str(&hero.special_ability),
            Field::Backstory => out.push_str(&hero.backstory),
        }
    }

    fn read(&self, value: &str, hero: &mut HeroRecord) -> Result<(), RecordError> {
        match self {
            Field::Name => hero.name = value.to_string(),
            Field::Role => hero.role = value.to_string(),
            Field::Attr(attr) => {
                let score = value.parse::<i32>().map_err(|_| RecordError::InvalidInteger {
                    field: self.name(),
                    value: value.to_string(),
                })?;
                hero.attributes.set(*attr, score);
            }
            Field::SpecialAbility => hero.special_ability = value.to_string(),
            Field::Backstory => hero.backstory = value.to_string(),
        }
        Ok(())
    }
}

const FULL_FIELDS: [Field; 10] = [
    Field::Name,
    Field::Role,
    Field::Attr(Attribute::Strength),
    Field::Attr(Attribute::Dexterity),
    Field::Attr(Attribute::Constitution),
    Field::Attr(Attribute::Intelligence),
    Field::Attr(Attribute::Wisdom),
    Field::Attr(Attribute::Charisma),
    Field::SpecialAbility,
    Field::Backstory,
];

const CLASSIC_FIELDS: [Field; 5] = [
    Field::Name,
    Field::Attr(Attribute::Strength),
    Field::Attr(Attribute::Dexterity),
    Field::Attr(Attribute::Constitution),
    Field::Backstory,
];

const NAME_ONLY_FIELDS: [Field; 1] = [Field::Name];

/// Which columns a roster file carries
///
/// Heroes decoded under a narrower schema get default values (empty text,
/// zero scores) for the columns it omits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Schema {
    /// name, role, six scores, special ability, backstory
    #[default]
    Full,
    /// name, strength, dexterity, constitution, backstory
    Classic,
    /// name
    NameOnly,
}

impl Schema {
    /// Columns in on-disk order
    pub const fn fields(&self) -> &'static [Field] {
        match self {
            Schema::Full => &FULL_FIELDS,
            Schema::Classic => &CLASSIC_FIELDS,
            Schema::NameOnly => &NAME_ONLY_FIELDS,
        }
    }

    pub const fn field_count(&self) -> usize {
        self.fields().len()
    }

    /// Header line naming each column, e.g. `name,strength,...`
    pub fn header(&self) -> String {
        let names: Vec<&str> = self.fields().iter().map(|f| f.name()).collect();
        names.join(&DELIMITER.to_string())
    }
}

/// What to do with a line that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Abort on the first malformed line
    #[default]
    Strict,
    /// Log and skip malformed lines
    Lenient,
}

/// Encode one hero as a single line (no line terminator)
pub fn encode_hero(hero: &HeroRecord, schema: Schema) -> String {
    let mut line = String::new();
    for (i, field) in schema.fields().iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        field.write(hero, &mut line);
    }
    line
}

/// Encode a roster, one line per hero in traversal order
///
/// Lines are separated by `\n`; there is no trailing newline.
pub fn encode(roster: &Roster, schema: Schema) -> String {
    let lines: Vec<String> = roster.iter().map(|h| encode_hero(h, schema)).collect();
    lines.join("\n")
}

/// Decode a single line into a hero
pub fn decode_hero(line: &str, schema: Schema) -> Result<HeroRecord, RecordError> {
    let values: Vec<&str> = line.split(DELIMITER).collect();
    if values.len() != schema.field_count() {
        return Err(RecordError::FieldCount {
            expected: schema.field_count(),
            found: values.len(),
        });
    }

    let mut hero = HeroRecord::default();
    for (field, value) in schema.fields().iter().zip(values) {
        field.read(value, &mut hero)?;
    }
    Ok(hero)
}

/// Decode text into a fresh roster
///
/// Accepts `\n` and `\r\n` line endings and ignores empty lines. Heroes are
/// appended in line order.
pub fn decode(text: &str, schema: Schema, policy: DecodePolicy) -> Result<Roster, SaveError> {
    let mut roster = Roster::new();
    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match decode_hero(line, schema) {
            Ok(hero) => roster.append(hero),
            Err(reason) => match policy {
                DecodePolicy::Strict => {
                    return Err(SaveError::MalformedRecord {
                        line: idx + 1,
                        reason,
                    });
                }
                DecodePolicy::Lenient => {
                    log::warn!("Skipping malformed record on line {}: {}", idx + 1, reason);
                }
            },
        }
    }
    Ok(roster)
}
