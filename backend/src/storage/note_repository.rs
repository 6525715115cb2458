//! Note persistence over the key-value store.

use anyhow::Result;
use log::error;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::models::note::Note;

use super::traits::KeyValueStore;

/// Store key for the note collection.
const NOTES_KEY: &str = "notes";

#[derive(Clone)]
pub struct NoteRepository {
    store: Arc<dyn KeyValueStore>,
}

impl NoteRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load all notes. Storage or decode failures degrade to an empty
    /// list.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.store.get(NOTES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Failed to read notes: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(notes) => notes,
            Err(e) => {
                error!("Stored notes are not valid JSON: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the full note collection.
    pub fn save(&self, notes: &[Note]) -> Result<()> {
        self.store.set(NOTES_KEY, &serde_json::to_string(notes)?)
    }

    /// Replace the stored collection with an imported JSON array, verbatim.
    pub fn replace_raw(&self, value: &Value) -> Result<()> {
        self.store.set(NOTES_KEY, &serde_json::to_string(value)?)
    }
}
