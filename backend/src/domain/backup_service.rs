//! Backup export and import for the full data set.
//!
//! Export produces one JSON document carrying the canonical service
//! shape, the notes and the missing-parts list. Import accepts the same
//! document, or the same document nested under a `data` key, and
//! wholesale-replaces every store entry that is present; the caller then
//! reloads everything. A failed import never leaves a partial write.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use log::{error, info};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use shared::{BackupFile, ExportedNote, ExportedService, ImportSummary};

use crate::domain::models::note::Note;
use crate::domain::models::service_record::ServiceRecord;
use crate::storage::{KeyValueStore, MissingPartsRepository, NoteRepository, ServiceRepository};

/// Import failure, surfaced to the user as a dialog.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file is not JSON or does not carry the expected shape
    #[error("Dosya formatı geçersiz")]
    InvalidFormat,
    /// The decoded data could not be written to the store
    #[error("Yedek geri yüklenemedi: {0}")]
    Storage(#[from] anyhow::Error),
}

struct ServiceMapper;

impl ServiceMapper {
    fn to_export(record: &ServiceRecord) -> ExportedService {
        ExportedService {
            id: record.id.clone(),
            customer_phone: record.customer_phone.clone(),
            address: record.address.clone(),
            color: record.color.as_str().to_string(),
            cost: record.cost,
            expenses: record.expenses,
            status: record.status.as_str().to_string(),
            created_at: record.created_at.clone(),
            updated_at: record.updated_at.clone(),
        }
    }
}

struct NoteMapper;

impl NoteMapper {
    fn to_export(note: &Note) -> ExportedNote {
        ExportedNote {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            date: note.date.clone(),
        }
    }
}

#[derive(Clone)]
pub struct BackupService {
    service_repository: ServiceRepository,
    note_repository: NoteRepository,
    missing_parts_repository: MissingPartsRepository,
}

impl BackupService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            service_repository: ServiceRepository::new(store.clone()),
            note_repository: NoteRepository::new(store.clone()),
            missing_parts_repository: MissingPartsRepository::new(store),
        }
    }

    /// Assemble the full backup document.
    pub fn export_backup(&self) -> BackupFile {
        let services: Vec<ExportedService> = self
            .service_repository
            .load()
            .iter()
            .map(ServiceMapper::to_export)
            .collect();
        let notes: Vec<ExportedNote> = self
            .note_repository
            .load()
            .iter()
            .map(NoteMapper::to_export)
            .collect();

        info!(
            "📦 Exporting backup: {} services, {} notes",
            services.len(),
            notes.len()
        );

        BackupFile {
            services,
            notes,
            missing_parts: self.missing_parts_repository.load(),
            export_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Backup document as pretty-printed JSON, ready to write to a file.
    pub fn export_backup_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_backup())?)
    }

    /// Replace stored collections with the contents of a backup document.
    ///
    /// Every present section is validated before the first write, so a
    /// malformed file leaves the store exactly as it was.
    pub fn import_backup(&self, json: &str) -> Result<ImportSummary, ImportError> {
        let document: Value = serde_json::from_str(json).map_err(|e| {
            error!("Backup import failed to parse: {}", e);
            ImportError::InvalidFormat
        })?;

        let data = match document.get("data") {
            Some(nested) if !nested.is_null() => nested.clone(),
            _ => document,
        };
        if !data.is_object() {
            return Err(ImportError::InvalidFormat);
        }

        let services = section(&data, "services")?;
        let notes = section(&data, "notes")?;
        let missing_parts = section(&data, "missingParts")?;

        if let Some(services) = &services {
            self.service_repository.replace_raw(services)?;
        }
        if let Some(notes) = &notes {
            self.note_repository.replace_raw(notes)?;
        }
        if let Some(missing_parts) = &missing_parts {
            self.missing_parts_repository.replace_raw(missing_parts)?;
        }

        let service_count = array_len(&services);
        let note_count = array_len(&notes);
        info!(
            "📦 Imported backup: {} services, {} notes",
            service_count, note_count
        );

        Ok(ImportSummary {
            service_count,
            note_count,
            message: format!(
                "Veriler başarıyla yüklendi!\n{} servis kaydı ve {} not geri yüklendi.",
                service_count, note_count
            ),
        })
    }
}

/// A section may be absent (no replacement) but when present it must be
/// an array.
fn section(data: &Value, key: &str) -> Result<Option<Value>, ImportError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) if value.is_array() => Ok(Some(value.clone())),
        Some(_) => Err(ImportError::InvalidFormat),
    }
}

fn array_len(section: &Option<Value>) -> usize {
    section
        .as_ref()
        .and_then(|value| value.as_array())
        .map(|array| array.len())
        .unwrap_or(0)
}
