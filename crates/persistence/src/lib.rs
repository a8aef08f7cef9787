#![deny(warnings)]

//! Persistence layer: named save slots holding full game-state snapshots.
//!
//! A snapshot is the JSON encoding of [`GameState`] and nothing else. There
//! is no versioning; a blob that fails to parse or fails
//! [`validate_state`] is reported as corrupt and the caller starts over.

use brew_core::{validate_state, GameState, ValidationError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Returns the default directory used for local saves.
pub fn default_save_dir() -> &'static str {
    "./saves"
}

/// Store-level failures. Corrupt snapshot contents are not errors here, see [`Loaded`].
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("invalid slot name: {0:?}")]
    InvalidSlot(String),
}

/// Why a stored blob could not be turned back into a state.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("snapshot failed validation: {0}")]
    Invalid(#[from] ValidationError),
}

/// Outcome of reading a slot.
#[derive(Debug)]
pub enum Loaded {
    Restored(Box<GameState>),
    /// Nothing stored under the slot.
    Missing,
    /// Something is stored but it is not a usable state.
    Corrupt(SnapshotError),
}

/// Key/value storage for snapshot blobs.
pub trait SaveStore {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistError>;
    fn write(&mut self, slot: &str, blob: &str) -> Result<(), PersistError>;
    /// Deletes the slot. Clearing a missing slot is not an error.
    fn clear(&mut self, slot: &str) -> Result<(), PersistError>;
}

fn check_slot(slot: &str) -> Result<(), PersistError> {
    if slot.is_empty() || slot.contains(|c| c == '/' || c == '\\') || slot.starts_with('.') {
        return Err(PersistError::InvalidSlot(slot.to_string()));
    }
    Ok(())
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> PersistError + '_ {
    move |source| PersistError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// One `<slot>.json` file per slot inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SaveStore for FileStore {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistError> {
        check_slot(slot)?;
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path).map_err(io_err(&path))?;
        Ok(Some(text))
    }

    fn write(&mut self, slot: &str, blob: &str) -> Result<(), PersistError> {
        check_slot(slot)?;
        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;
        let path = self.slot_path(slot);
        // Write to a temp file first, then rename for atomicity
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, blob).map_err(io_err(&tmp))?;
        fs::rename(&tmp, &path).map_err(io_err(&path))?;
        Ok(())
    }

    fn clear(&mut self, slot: &str) -> Result<(), PersistError> {
        check_slot(slot)?;
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(&path).map_err(io_err(&path))?;
        }
        Ok(())
    }
}

/// In-process store, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }
}

impl SaveStore for MemoryStore {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistError> {
        check_slot(slot)?;
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, blob: &str) -> Result<(), PersistError> {
        check_slot(slot)?;
        self.slots.insert(slot.to_string(), blob.to_string());
        Ok(())
    }

    fn clear(&mut self, slot: &str) -> Result<(), PersistError> {
        check_slot(slot)?;
        self.slots.remove(slot);
        Ok(())
    }
}

/// Serializes a state to its snapshot blob.
pub fn encode(state: &GameState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(state)?)
}

/// Parses and shape-checks a snapshot blob.
pub fn decode(blob: &str) -> Result<GameState, SnapshotError> {
    let state: GameState = serde_json::from_str(blob)?;
    validate_state(&state)?;
    Ok(state)
}

/// Writes `state` under `slot`.
pub fn save_state<S: SaveStore + ?Sized>(
    store: &mut S,
    slot: &str,
    state: &GameState,
) -> Result<(), PersistError> {
    let blob = encode(state)?;
    store.write(slot, &blob)?;
    debug!(slot, day = state.days_passed, bytes = blob.len(), "snapshot saved");
    Ok(())
}

/// Reads `slot`. Only store failures are errors; bad contents come back as
/// [`Loaded::Corrupt`].
pub fn load_state<S: SaveStore + ?Sized>(store: &S, slot: &str) -> Result<Loaded, PersistError> {
    let Some(blob) = store.read(slot)? else {
        return Ok(Loaded::Missing);
    };
    match decode(&blob) {
        Ok(state) => {
            info!(slot, day = state.days_passed, gold = state.gold, "snapshot restored");
            Ok(Loaded::Restored(Box::new(state)))
        }
        Err(e) => Ok(Loaded::Corrupt(e)),
    }
}
