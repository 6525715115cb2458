//! Reconciliation of stored records into the canonical shape.
//!
//! Stored data may carry legacy field names (`phoneNumber`, `description`,
//! `feeCollected`, `date`) from earlier versions. This runs once at the
//! storage boundary on every load; after it, the rest of the system only
//! ever sees canonical fields. Safe to run repeatedly.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::domain::models::service_record::{ColorTag, ServiceRecord, ServiceStatus};
use crate::domain::phone;

/// A service record as decoded from storage, before alias resolution.
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawServiceRecord {
    pub id: Option<String>,
    pub customer_phone: Option<String>,
    pub raw_customer_phone_input: Option<String>,
    pub address: Option<String>,
    pub color: Option<String>,
    pub cost: Option<f64>,
    pub expenses: Option<f64>,
    pub deposit: Option<f64>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub phone_number_note: Option<String>,
    // Legacy aliases folded into the canonical fields above.
    pub phone_number: Option<String>,
    pub description: Option<String>,
    pub fee_collected: Option<f64>,
    pub date: Option<String>,
}

/// Resolve a raw record into canonical form. The canonical field wins
/// whenever it carries a value; legacy aliases fill the gaps; everything
/// else gets a field-specific default.
pub fn migrate_service_record(raw: RawServiceRecord, now: DateTime<Utc>) -> ServiceRecord {
    let now_iso = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    let phone_source = non_empty(raw.customer_phone.clone())
        .or_else(|| non_empty(raw.phone_number.clone()))
        .unwrap_or_default();

    ServiceRecord {
        id: raw.id.unwrap_or_default(),
        customer_phone: phone::normalize_for_storage(&phone_source),
        raw_customer_phone_input: non_empty(raw.raw_customer_phone_input)
            .or_else(|| non_empty(raw.customer_phone))
            .or_else(|| non_empty(raw.phone_number))
            .unwrap_or_default(),
        address: non_empty(raw.address)
            .or_else(|| non_empty(raw.description))
            .unwrap_or_default(),
        color: ColorTag::parse_or_default(raw.color.as_deref().unwrap_or("")),
        cost: money(raw.cost, raw.fee_collected),
        expenses: raw.expenses.unwrap_or(0.0).max(0.0),
        deposit: raw.deposit.unwrap_or(0.0).max(0.0),
        status: ServiceStatus::parse_or_default(raw.status.as_deref().unwrap_or("")),
        created_at: non_empty(raw.created_at)
            .or_else(|| non_empty(raw.date))
            .unwrap_or_else(|| now_iso.clone()),
        updated_at: non_empty(raw.updated_at).unwrap_or(now_iso),
        phone_number_note: raw.phone_number_note.unwrap_or_default(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A zero canonical amount defers to the legacy one; amounts are clamped
/// to non-negative.
fn money(canonical: Option<f64>, legacy: Option<f64>) -> f64 {
    let amount = match canonical {
        Some(value) if value != 0.0 => value,
        _ => legacy.unwrap_or(0.0),
    };
    amount.max(0.0)
}
