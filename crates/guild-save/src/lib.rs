//! guild-save: Text persistence for the adventurers' guild
//!
//! Handles encoding rosters to delimited text and reading them back from disk.

pub mod codec;
pub mod config;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use guild_core::Roster;

pub use codec::{DELIMITER, DecodePolicy, Field, Schema, decode, decode_hero, encode, encode_hero};
pub use config::GuildConfig;

/// Why a single stored line could not be turned into a hero
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("{field} is not an integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Roster storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: RecordError },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SaveError {
    fn storage(path: &Path) -> impl FnOnce(std::io::Error) -> SaveError + '_ {
        move |source| SaveError::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write a roster to a file, replacing its contents
///
/// A non-empty roster is followed by a single trailing newline.
pub fn save_roster(roster: &Roster, path: impl AsRef<Path>, schema: Schema) -> Result<(), SaveError> {
    let path = path.as_ref();
    let text = encode(roster, schema);

    let file = File::create(path).map_err(SaveError::storage(path))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(SaveError::storage(path))?;
    if !text.is_empty() {
        writer.write_all(b"\n").map_err(SaveError::storage(path))?;
    }
    writer.flush().map_err(SaveError::storage(path))?;

    log::info!("Guild roster saved to {} ({} heroes)", path.display(), roster.len());
    Ok(())
}

/// Read a roster from a file into a fresh roster
pub fn load_roster(
    path: impl AsRef<Path>,
    schema: Schema,
    policy: DecodePolicy,
) -> Result<Roster, SaveError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(SaveError::storage(path))?;
    let mut reader = BufReader::new(file);
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(SaveError::storage(path))?;

    let roster = decode(&text, schema, policy)?;
    log::info!("Guild roster loaded from {} ({} heroes)", path.display(), roster.len());
    Ok(roster)
}

/// Check if a roster file exists
pub fn roster_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Delete a roster file
pub fn delete_roster(path: impl AsRef<Path>) -> Result<(), SaveError> {
    std::fs::remove_file(path)?;
    Ok(())
}

/// Default roster location under the user's local data directory
pub fn default_roster_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("guild");
    std::fs::create_dir_all(&path).ok();
    path.push("guild.txt");
    path
}
