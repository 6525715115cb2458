use serde::{Deserialize, Serialize};

/// Canonical service record shape used in backup files.
///
/// Legacy field aliases are resolved before export, so a backup always
/// carries the canonical field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedService {
    pub id: String,
    /// Digit-only phone in storage form (leading zero for national numbers)
    pub customer_phone: String,
    pub address: String,
    /// One of the fixed palette names (white, red, orange, ...)
    pub color: String,
    /// Revenue collected for the job
    pub cost: f64,
    /// Cost incurred to complete the job
    pub expenses: f64,
    /// "ongoing", "workshop" or "completed"
    pub status: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    /// RFC 3339 timestamp of the last mutation
    pub updated_at: String,
}

/// Note shape used in backup files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNote {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Creation date, `YYYY-MM-DD`
    pub date: String,
}

/// Top-level backup file written by the export operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub services: Vec<ExportedService>,
    pub notes: Vec<ExportedNote>,
    pub missing_parts: Vec<String>,
    /// RFC 3339 timestamp of when the backup was taken
    pub export_date: String,
}

/// Result of a successful backup import, for the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub service_count: usize,
    pub note_count: usize,
    /// User-facing confirmation message
    pub message: String,
}

/// Style tag for one span of a rendered raw phone entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentStyle {
    /// Parenthesized free-text annotation
    Annotation,
    /// Phone-bearing text, with recognized numbers normalized
    Phone,
}

/// One span of a raw phone entry, ready for styled rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneSegment {
    pub text: String,
    pub style: SegmentStyle,
}

/// Revenue/expense/profit totals for one calendar period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// Aggregate figures shown on the dashboard. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Count of all records, regardless of status
    pub total_services: usize,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub profit: f64,
    pub monthly_stats: PeriodStats,
    pub yearly_stats: PeriodStats,
}

/// Per-record financial figures for the report table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFigures {
    pub revenue: f64,
    pub net_profit: f64,
    /// Fixed-percentage partner cut taken from the net profit
    pub profit_share: f64,
    pub remaining: f64,
}

/// Aggregate financial figures for a report period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub revenue: f64,
    pub expenses: f64,
    pub net_profit: f64,
    pub profit_share: f64,
    pub remaining: f64,
    /// Number of completed services included in the period
    pub service_count: usize,
}
