//! Note persistence.
//!
//! The note list is saved wholesale on every accepted mutation and read
//! back once at startup. Anything that can go wrong on the read path
//! (missing file, unreadable file, stale format) degrades to an empty
//! list so the app always starts.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use color_eyre::eyre::Result;

use crate::domain::note::Note;
use crate::utils::get_data_dir;

const NOTES_FILE: &str = "notes.json";

/// Storage capability for the note list, injected into the command
/// executor. `load` never fails; `save` failures are the caller's to
/// report.
pub trait NoteStore: Send {
    fn load(&self) -> Vec<Note>;
    fn save(&self, notes: &[Note]) -> Result<()>;
}

/// Production store: one JSON file in the application data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new() -> Self {
        Self {
            path: get_data_dir().join(NOTES_FILE),
        }
    }

    /// Store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for JsonFileStore {
    fn load(&self) -> Vec<Note> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No note file at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                log::error!("Could not read {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(notes) => notes,
            Err(e) => {
                log::error!("Could not parse {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(notes)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests. Clones share the same backing list, so a
/// test can hand one clone to the executor and inspect the other.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Arc::new(Mutex::new(notes)),
        }
    }

    /// Snapshot of the last saved list.
    pub fn saved(&self) -> Vec<Note> {
        self.guard().clone()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Note>> {
        self.notes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NoteStore for InMemoryStore {
    fn load(&self) -> Vec<Note> {
        self.guard().clone()
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        *self.guard() = notes.to_vec();
        Ok(())
    }
}
