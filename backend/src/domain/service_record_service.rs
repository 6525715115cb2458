//! Service record domain logic: list assembly, mutations and reordering.
use anyhow::{anyhow, Result};
use chrono::{Datelike, SecondsFormat, Utc};
use log::info;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::commands::services::{
    CreateServiceCommand, ServiceListFilter, UpdateServiceCommand,
};
use crate::domain::models::service_record::ServiceRecord;
use crate::domain::{format, ordering, phone};
use crate::storage::{KeyValueStore, OrderRepository, ServiceRepository};

#[derive(Clone)]
pub struct ServiceRecordService {
    repository: ServiceRepository,
    order_repository: OrderRepository,
}

impl ServiceRecordService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            repository: ServiceRepository::new(store.clone()),
            order_repository: OrderRepository::new(store),
        }
    }

    /// The canonical record list in the user's saved order. Load failures
    /// degrade to an empty list.
    pub fn list_services(&self) -> Vec<ServiceRecord> {
        let records = self.repository.load();
        let index = self.order_repository.load_order_index();
        ordering::apply_order(records, &index)
    }

    /// Create a record from form input and prepend it to the list.
    pub fn create_service(&self, command: CreateServiceCommand) -> Result<ServiceRecord> {
        let now_millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let record = ServiceRecord {
            id: ServiceRecord::generate_id(now_millis),
            customer_phone: phone::extract_phone(&command.raw_customer_phone_input),
            raw_customer_phone_input: command.raw_customer_phone_input,
            address: command.address,
            color: command.color,
            cost: command.cost.max(0.0),
            expenses: command.expenses.max(0.0),
            deposit: command.deposit.unwrap_or(0.0).max(0.0),
            status: command.status,
            created_at: now.clone(),
            updated_at: now,
            phone_number_note: command.phone_number_note,
        };

        let mut records = self.list_services();
        records.insert(0, record.clone());
        self.repository.save(&records)?;
        self.order_repository.save_order(&records);

        info!("Created service record {}", record.id);
        Ok(record)
    }

    /// Update an existing record, keeping its creation timestamp and
    /// restamping `updatedAt`.
    pub fn update_service(&self, command: UpdateServiceCommand) -> Result<ServiceRecord> {
        let mut records = self.list_services();
        let position = records
            .iter()
            .position(|record| record.id == command.id)
            .ok_or_else(|| anyhow!("Service record not found: {}", command.id))?;

        let updated = ServiceRecord {
            id: records[position].id.clone(),
            customer_phone: phone::extract_phone(&command.raw_customer_phone_input),
            raw_customer_phone_input: command.raw_customer_phone_input,
            address: command.address,
            color: command.color,
            cost: command.cost.max(0.0),
            expenses: command.expenses.max(0.0),
            deposit: command.deposit.unwrap_or(0.0).max(0.0),
            status: command.status,
            created_at: records[position].created_at.clone(),
            updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            phone_number_note: command.phone_number_note,
        };

        records[position] = updated.clone();
        self.repository.save(&records)?;
        self.order_repository.save_order(&records);
        Ok(updated)
    }

    /// Delete a record by ID. The order index entry is left behind as a
    /// harmless orphan. Deleting an unknown ID is a no-op.
    pub fn delete_service(&self, id: &str) -> Result<()> {
        let mut records = self.list_services();
        records.retain(|record| record.id != id);
        self.repository.save(&records)
    }

    /// Persist a fully reordered record list.
    pub fn reorder_services(&self, records: Vec<ServiceRecord>) -> Result<Vec<ServiceRecord>> {
        self.order_repository.save_order(&records);
        self.repository.save(&records)?;
        Ok(records)
    }

    /// Apply a drag-and-drop move made inside a filtered view and persist
    /// the merged full order.
    pub fn reorder_visible(
        &self,
        visible: &[ServiceRecord],
        from_index: usize,
        to_index: usize,
    ) -> Result<Vec<ServiceRecord>> {
        let full = self.list_services();
        let merged = ordering::reorder_within_subset(&full, visible, from_index, to_index);
        self.reorder_services(merged)
    }

    /// Filter records for the list view: status constraint plus a smart
    /// search over phone, address and date renderings.
    pub fn filter_for_list(
        records: &[ServiceRecord],
        filter: &ServiceListFilter,
    ) -> Vec<ServiceRecord> {
        records
            .iter()
            .filter(|record| filter.status.matches(record.status))
            .filter(|record| matches_smart_search(record, &filter.search_term))
            .cloned()
            .collect()
    }
}

fn matches_smart_search(record: &ServiceRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    if record.customer_phone.contains(term)
        || record
            .address
            .to_lowercase()
            .contains(&term.to_lowercase())
        || record.created_at.contains(term)
        || format::format_date(&record.created_at).contains(term)
    {
        return true;
    }
    match record.effective_date() {
        Some(date) => {
            date.year().to_string().contains(term)
                || format!("{:02}", date.month()).contains(term)
                || format!("{:02}", date.day()).contains(term)
        }
        None => false,
    }
}
