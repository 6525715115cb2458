//! Missing-parts checklist domain logic.
use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::storage::{KeyValueStore, MissingPartsRepository};

#[derive(Clone)]
pub struct MissingPartsService {
    repository: MissingPartsRepository,
}

impl MissingPartsService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            repository: MissingPartsRepository::new(store),
        }
    }

    pub fn list_parts(&self) -> Vec<String> {
        self.repository.load()
    }

    /// Append a part description and return the updated list.
    pub fn add_part(&self, part: &str) -> Result<Vec<String>> {
        let part = part.trim();
        if part.is_empty() {
            return Err(anyhow!("Missing part description must not be empty"));
        }
        let mut parts = self.repository.load();
        parts.push(part.to_string());
        self.repository.save(&parts)?;
        Ok(parts)
    }

    /// Remove the part at `index` and return the updated list. An
    /// out-of-range index is a no-op.
    pub fn remove_part(&self, index: usize) -> Result<Vec<String>> {
        let mut parts = self.repository.load();
        if index < parts.len() {
            parts.remove(index);
            self.repository.save(&parts)?;
        }
        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;

    fn setup_service() -> MissingPartsService {
        MissingPartsService::new(Arc::new(MemoryKeyValueStore::new()))
    }

    #[test]
    fn test_add_and_remove_parts() {
        let service = setup_service();
        service.add_part("Kompresör").unwrap();
        let parts = service.add_part("Termostat").unwrap();
        assert_eq!(parts, ["Kompresör", "Termostat"]);

        let parts = service.remove_part(0).unwrap();
        assert_eq!(parts, ["Termostat"]);
        assert_eq!(service.list_parts(), ["Termostat"]);
    }

    #[test]
    fn test_add_blank_part_is_rejected() {
        let service = setup_service();
        assert!(service.add_part("   ").is_err());
        assert!(service.list_parts().is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_a_no_op() {
        let service = setup_service();
        service.add_part("Fan motoru").unwrap();
        let parts = service.remove_part(5).unwrap();
        assert_eq!(parts, ["Fan motoru"]);
    }
}
