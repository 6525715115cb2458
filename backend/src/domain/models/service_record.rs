//! Domain model for a service record.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::format;

/// Lifecycle state of a service job. `Completed` is terminal as far as
/// reporting is concerned; no transition is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[default]
    Ongoing,
    Workshop,
    Completed,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Ongoing => "ongoing",
            ServiceStatus::Workshop => "workshop",
            ServiceStatus::Completed => "completed",
        }
    }

    /// Parse a stored status value, falling back to `Ongoing` for
    /// anything unrecognized.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "workshop" => ServiceStatus::Workshop,
            "completed" => ServiceStatus::Completed,
            _ => ServiceStatus::Ongoing,
        }
    }
}

/// Display tag from the fixed palette. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Gray,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::White => "white",
            ColorTag::Red => "red",
            ColorTag::Orange => "orange",
            ColorTag::Yellow => "yellow",
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
            ColorTag::Purple => "purple",
            ColorTag::Pink => "pink",
            ColorTag::Gray => "gray",
        }
    }

    /// Parse a stored color value, falling back to `White`.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "red" => ColorTag::Red,
            "orange" => ColorTag::Orange,
            "yellow" => ColorTag::Yellow,
            "green" => ColorTag::Green,
            "blue" => ColorTag::Blue,
            "purple" => ColorTag::Purple,
            "pink" => ColorTag::Pink,
            "gray" => ColorTag::Gray,
            _ => ColorTag::White,
        }
    }
}

/// One repair job, in canonical form.
///
/// Stored records may still carry legacy field names; those are resolved
/// into this shape at the storage boundary on every load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    /// Digit-only phone in storage form, derived from the raw input
    pub customer_phone: String,
    /// Original free-text phone entry, kept for display and re-editing
    pub raw_customer_phone_input: String,
    pub address: String,
    pub color: ColorTag,
    /// Revenue collected for the job, never negative
    pub cost: f64,
    /// Cost incurred to complete the job, never negative
    pub expenses: f64,
    /// Optional advance payment, zero when absent
    #[serde(default)]
    pub deposit: f64,
    pub status: ServiceStatus,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    /// RFC 3339 timestamp of the last mutation
    pub updated_at: String,
    #[serde(default)]
    pub phone_number_note: String,
}

impl ServiceRecord {
    /// Generate a unique record ID from the current timestamp.
    /// Format: id_<epoch_millis>_<random_suffix>
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("id_{}_{}", timestamp_ms, generate_random_suffix(9))
    }

    /// Calendar date the record is attributed to for period grouping.
    /// Records with an unparsable timestamp fall outside every period.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        format::parse_flexible_date(&self.created_at)
    }
}

/// In-progress "new service" form state, persisted between sessions until
/// the record is saved or the form is cancelled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDraft {
    pub raw_customer_phone_input: String,
    pub customer_phone: String,
    pub address: String,
    pub color: ColorTag,
    pub cost: f64,
    pub expenses: f64,
    pub deposit: Option<f64>,
    pub status: ServiceStatus,
    pub phone_number_note: String,
}

/// Generate a random hex suffix for record IDs.
fn generate_random_suffix(len: usize) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_nanos();
    format!("{:x}", now % (16_u128.pow(len as u32)))
        .chars()
        .take(len)
        .collect()
}
