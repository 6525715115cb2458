//! Command and query types for service record operations.

use serde::{Deserialize, Serialize};

use crate::domain::models::service_record::{ColorTag, ServiceStatus};

/// Input for creating a new service record. The canonical phone is
/// derived from the raw input; timestamps and the ID are assigned by the
/// service.
#[derive(Debug, Clone)]
pub struct CreateServiceCommand {
    pub raw_customer_phone_input: String,
    pub address: String,
    pub color: ColorTag,
    pub cost: f64,
    pub expenses: f64,
    pub deposit: Option<f64>,
    pub status: ServiceStatus,
    pub phone_number_note: String,
}

/// Input for updating an existing record. The creation timestamp is
/// preserved; `updatedAt` is restamped by the service.
#[derive(Debug, Clone)]
pub struct UpdateServiceCommand {
    pub id: String,
    pub raw_customer_phone_input: String,
    pub address: String,
    pub color: ColorTag,
    pub cost: f64,
    pub expenses: f64,
    pub deposit: Option<f64>,
    pub status: ServiceStatus,
    pub phone_number_note: String,
}

/// Status selection for the service list, persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Ongoing,
    Workshop,
    Completed,
}

impl StatusFilter {
    pub fn from_status(status: ServiceStatus) -> Self {
        match status {
            ServiceStatus::Ongoing => StatusFilter::Ongoing,
            ServiceStatus::Workshop => StatusFilter::Workshop,
            ServiceStatus::Completed => StatusFilter::Completed,
        }
    }

    pub fn matches(&self, status: ServiceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Ongoing => status == ServiceStatus::Ongoing,
            StatusFilter::Workshop => status == ServiceStatus::Workshop,
            StatusFilter::Completed => status == ServiceStatus::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Ongoing => "ongoing",
            StatusFilter::Workshop => "workshop",
            StatusFilter::Completed => "completed",
        }
    }

    /// Parse a stored filter value, falling back to `All`.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "ongoing" => StatusFilter::Ongoing,
            "workshop" => StatusFilter::Workshop,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }
}

/// Free-text search plus status constraint for the service list.
#[derive(Debug, Clone, Default)]
pub struct ServiceListFilter {
    pub status: StatusFilter,
    pub search_term: String,
}
