//! Guild configuration
//!
//! Read from an optional JSON file; every key may be omitted.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{DecodePolicy, SaveError, Schema, default_roster_path};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildConfig {
    /// Roster file; the local data directory is used when unset
    pub file: Option<PathBuf>,
    /// Active column layout
    pub schema: Schema,
    /// Handling of malformed lines on load
    pub policy: DecodePolicy,
}

impl GuildConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SaveError::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GuildConfig = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Where the roster lives
    pub fn roster_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(default_roster_path)
    }
}
