//! High score persistence
//!
//! The engine never touches storage. The session loads the stored best at
//! start-up and writes it back when a finished game beats it. Storage sits
//! behind a small key/value interface so the backend can be swapped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::constants::HIGH_SCORE_KEY;
use crate::models::errors::GameResult;

/// Durable integer values keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> GameResult<Option<u32>>;
    fn set(&mut self, key: &str, value: u32) -> GameResult<()>;
}

/// Volatile store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> GameResult<Option<u32>> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> GameResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(flatten)]
    values: BTreeMap<String, u32>,
}

/// A JSON object on disk, e.g. `{"yahtzee_highscore": 212}`.
///
/// A missing file reads as empty. Every write rewrites the whole file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> GameResult<StoreFile> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(StoreFile::default()),
            Err(err) => Err(err.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> GameResult<Option<u32>> {
        Ok(self.load()?.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> GameResult<()> {
        let mut file = self.load()?;
        file.values.insert(key.to_string(), value);
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}

/// The single high score record on top of any [`KeyValueStore`].
pub struct HighScoreStore {
    backend: Box<dyn KeyValueStore>,
}

impl HighScoreStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Stored best, or 0 when absent or unreadable.
    pub fn load(&self) -> u32 {
        match self.backend.get(HIGH_SCORE_KEY) {
            Ok(value) => value.unwrap_or(0),
            Err(err) => {
                warn!(error = %err, "could not read high score, starting from 0");
                0
            }
        }
    }

    /// Writes `total` only if it beats the stored value. Returns whether it did.
    pub fn record(&mut self, total: u32) -> GameResult<bool> {
        let stored = self.backend.get(HIGH_SCORE_KEY)?.unwrap_or(0);
        if total <= stored {
            return Ok(false);
        }
        self.backend.set(HIGH_SCORE_KEY, total)?;
        debug!(previous = stored, total, "new high score saved");
        Ok(true)
    }
}
