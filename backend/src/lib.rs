//! # Service Tracker Backend
//!
//! Core library for a single-user repair shop tracker: service records
//! with phone, cost and status details, free-form notes, a missing-parts
//! checklist, monthly/yearly financial reports and manual JSON backup.
//!
//! All persistent state lives behind the [`storage::KeyValueStore`] port.
//! A frontend constructs one [`Backend`] at startup and calls into its
//! services; there is no global state and no server.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod events;
pub mod storage;

use domain::{
    BackupService, MissingPartsService, NoteService, ServiceRecordService, SettingsService,
};
use events::EventBus;
use storage::{FileKeyValueStore, KeyValueStore};

/// Main backend struct that wires every service to one injected store.
pub struct Backend {
    pub service_records: ServiceRecordService,
    pub notes: NoteService,
    pub missing_parts: MissingPartsService,
    pub backup: BackupService,
    pub settings: SettingsService,
    pub events: EventBus,
}

impl Backend {
    /// Create a backend over any key-value store implementation.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            service_records: ServiceRecordService::new(store.clone()),
            notes: NoteService::new(store.clone()),
            missing_parts: MissingPartsService::new(store.clone()),
            backup: BackupService::new(store.clone()),
            settings: SettingsService::new(store),
            events: EventBus::new(),
        }
    }

    /// Create a backend backed by `<key>.json` files under `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Arc::new(FileKeyValueStore::new(data_dir)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::services::CreateServiceCommand;
    use crate::domain::models::service_record::{ColorTag, ServiceStatus};
    use crate::domain::{dashboard, report};
    use chrono::{Datelike, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_backend_wires_services_over_one_store() {
        let temp_dir = TempDir::new().unwrap();
        let backend = Backend::open(temp_dir.path()).unwrap();

        backend
            .service_records
            .create_service(CreateServiceCommand {
                raw_customer_phone_input: "+90 534 682 22 82".to_string(),
                address: "Kadıköy".to_string(),
                color: ColorTag::Green,
                cost: 1000.0,
                expenses: 200.0,
                deposit: Some(100.0),
                status: ServiceStatus::Completed,
                phone_number_note: String::new(),
            })
            .unwrap();

        // A second backend over the same directory sees the same data.
        let reopened = Backend::open(temp_dir.path()).unwrap();
        let records = reopened.service_records.list_services();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer_phone, "05346822282");

        let today = Utc::now().date_naive();
        let stats = dashboard::compute_stats(&records, today);
        assert_eq!(stats.total_services, 1);
        assert_eq!(stats.monthly_stats.revenue, 1000.0);

        let summary = report::yearly_report(&records, today.year());
        assert_eq!(summary.net_profit, 800.0);
        assert!((summary.remaining - 520.0).abs() < 1e-9);
    }
}
