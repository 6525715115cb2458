//! User-defined list ordering, kept separately from the records.
//!
//! The order index maps record IDs to integer ranks. It is rebuilt
//! wholesale on every reorder; entries for deleted records stay behind as
//! harmless orphans and records missing from the index sort last.

use std::collections::HashMap;

use crate::domain::models::service_record::ServiceRecord;

pub type OrderIndex = HashMap<String, usize>;

/// Sort records by their saved rank. Unindexed records keep their input
/// order after every indexed record. An empty index leaves the input
/// untouched.
pub fn apply_order(mut records: Vec<ServiceRecord>, index: &OrderIndex) -> Vec<ServiceRecord> {
    if index.is_empty() {
        return records;
    }
    records.sort_by_key(|record| index.get(&record.id).copied().unwrap_or(usize::MAX));
    records
}

/// Apply a drag-and-drop move made inside a filtered view to the full
/// record set.
///
/// The visible subset takes its new relative order; records outside the
/// subset follow in their prior relative order. Touched records always
/// land ahead of untouched ones regardless of their original
/// interleaving; the list display depends on that.
pub fn reorder_within_subset(
    full: &[ServiceRecord],
    visible: &[ServiceRecord],
    from_index: usize,
    to_index: usize,
) -> Vec<ServiceRecord> {
    if from_index == to_index || from_index >= visible.len() || to_index >= visible.len() {
        return full.to_vec();
    }

    let mut moved: Vec<&ServiceRecord> = visible.iter().collect();
    let dragged = moved.remove(from_index);
    moved.insert(to_index, dragged);

    let new_positions: HashMap<&str, usize> = moved
        .iter()
        .enumerate()
        .map(|(position, record)| (record.id.as_str(), position))
        .collect();

    let mut reordered: Vec<ServiceRecord> = full
        .iter()
        .filter(|record| new_positions.contains_key(record.id.as_str()))
        .cloned()
        .collect();
    reordered.sort_by_key(|record| {
        new_positions
            .get(record.id.as_str())
            .copied()
            .unwrap_or(usize::MAX)
    });

    reordered.extend(
        full.iter()
            .filter(|record| !new_positions.contains_key(record.id.as_str()))
            .cloned(),
    );
    reordered
}
