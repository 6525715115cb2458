//! Missing-parts list persistence over the key-value store.

use anyhow::Result;
use log::error;
use serde_json::Value;
use std::sync::Arc;

use super::traits::KeyValueStore;

/// Store key for the missing-parts list.
const MISSING_PARTS_KEY: &str = "missing_parts";

#[derive(Clone)]
pub struct MissingPartsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl MissingPartsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the list. Storage or decode failures degrade to empty.
    pub fn load(&self) -> Vec<String> {
        let raw = match self.store.get(MISSING_PARTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Failed to read missing parts: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(parts) => parts,
            Err(e) => {
                error!("Stored missing parts are not valid JSON: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the full list.
    pub fn save(&self, parts: &[String]) -> Result<()> {
        self.store
            .set(MISSING_PARTS_KEY, &serde_json::to_string(parts)?)
    }

    /// Replace the stored list with an imported JSON array, verbatim.
    pub fn replace_raw(&self, value: &Value) -> Result<()> {
        self.store
            .set(MISSING_PARTS_KEY, &serde_json::to_string(value)?)
    }
}
