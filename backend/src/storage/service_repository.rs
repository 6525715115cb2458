//! Service record persistence over the key-value store.
//!
//! Loading runs every stored record through the migrator, so the rest of
//! the system only ever sees the canonical shape. Reads fail soft to an
//! empty collection; writes propagate their error so the caller can
//! surface a message and keep its in-memory state.

use anyhow::Result;
use chrono::Utc;
use log::error;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::migration::{migrate_service_record, RawServiceRecord};
use crate::domain::models::service_record::ServiceRecord;

use super::traits::KeyValueStore;

/// Store key for the service record collection.
const SERVICES_KEY: &str = "services";

#[derive(Clone)]
pub struct ServiceRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ServiceRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load every stored record in canonical form. Storage or decode
    /// failures degrade to an empty list.
    pub fn load(&self) -> Vec<ServiceRecord> {
        let raw = match self.store.get(SERVICES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Failed to read service records: {}", e);
                return Vec::new();
            }
        };
        let decoded: Vec<RawServiceRecord> = match serde_json::from_str(&raw) {
            Ok(decoded) => decoded,
            Err(e) => {
                error!("Stored service records are not valid JSON: {}", e);
                return Vec::new();
            }
        };
        let now = Utc::now();
        decoded
            .into_iter()
            .map(|record| migrate_service_record(record, now))
            .collect()
    }

    /// Persist the full record collection.
    pub fn save(&self, records: &[ServiceRecord]) -> Result<()> {
        self.store.set(SERVICES_KEY, &serde_json::to_string(records)?)
    }

    /// Replace the stored collection with an imported JSON array,
    /// verbatim. Legacy fields inside it are resolved on the next load.
    pub fn replace_raw(&self, value: &Value) -> Result<()> {
        self.store.set(SERVICES_KEY, &serde_json::to_string(value)?)
    }
}
