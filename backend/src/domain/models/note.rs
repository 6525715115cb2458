//! Domain model for a free-form note. Independent of service records.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Creation date, `YYYY-MM-DD`; restamped when the note is edited
    pub date: String,
}

impl Note {
    /// Generate a unique note ID from the current timestamp.
    /// Format: note_<epoch_millis>
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("note_{}", timestamp_ms)
    }
}
