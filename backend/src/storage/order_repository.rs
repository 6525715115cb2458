//! Persistence for the user-defined service list order.
//!
//! The order index lives under its own key, separate from the records,
//! and is rebuilt wholesale on every reorder. A missing or corrupt index
//! is never an error; the list just falls back to storage order.

use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::models::service_record::ServiceRecord;
use crate::domain::ordering::OrderIndex;

use super::traits::KeyValueStore;

/// Store key for the order index.
const SERVICE_ORDER_KEY: &str = "service_order";

/// One persisted `{id, order}` pair.
#[derive(Debug, Serialize, Deserialize)]
struct OrderEntry {
    id: String,
    order: usize,
}

#[derive(Clone)]
pub struct OrderRepository {
    store: Arc<dyn KeyValueStore>,
}

impl OrderRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist the current positions of `records`. Failures are logged
    /// and swallowed; losing the index only loses the custom order.
    pub fn save_order(&self, records: &[ServiceRecord]) {
        let entries: Vec<OrderEntry> = records
            .iter()
            .enumerate()
            .map(|(order, record)| OrderEntry {
                id: record.id.clone(),
                order,
            })
            .collect();
        let encoded = match serde_json::to_string(&entries) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!("Failed to encode service order: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(SERVICE_ORDER_KEY, &encoded) {
            error!("Failed to save service order: {}", e);
        }
    }

    /// Rebuild the id-to-rank mapping. Missing or unparsable data yields
    /// an empty mapping.
    pub fn load_order_index(&self) -> OrderIndex {
        let raw = match self.store.get(SERVICE_ORDER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return OrderIndex::new(),
            Err(e) => {
                error!("Failed to read service order: {}", e);
                return OrderIndex::new();
            }
        };
        match serde_json::from_str::<Vec<OrderEntry>>(&raw) {
            Ok(entries) => entries
                .into_iter()
                .map(|entry| (entry.id, entry.order))
                .collect(),
            Err(e) => {
                error!("Stored service order is not valid JSON: {}", e);
                OrderIndex::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::migration::{migrate_service_record, RawServiceRecord};
    use crate::storage::memory_store::MemoryKeyValueStore;
    use chrono::Utc;

    fn record(id: &str) -> ServiceRecord {
        let mut record = migrate_service_record(RawServiceRecord::default(), Utc::now());
        record.id = id.to_string();
        record
    }

    #[test]
    fn test_save_then_load_preserves_positions() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repository = OrderRepository::new(store);
        repository.save_order(&[record("b"), record("a"), record("c")]);

        let index = repository.load_order_index();
        assert_eq!(index.get("b"), Some(&0));
        assert_eq!(index.get("a"), Some(&1));
        assert_eq!(index.get("c"), Some(&2));
    }

    #[test]
    fn test_load_fails_soft() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repository = OrderRepository::new(store.clone());
        assert!(repository.load_order_index().is_empty());

        store.set("service_order", "not json").unwrap();
        assert!(repository.load_order_index().is_empty());
    }
}
