//! Note domain logic.
use anyhow::{anyhow, Result};
use chrono::Utc;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::commands::notes::{CreateNoteCommand, UpdateNoteCommand};
use crate::domain::models::note::Note;
use crate::storage::{KeyValueStore, NoteRepository};

#[derive(Clone)]
pub struct NoteService {
    repository: NoteRepository,
}

impl NoteService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            repository: NoteRepository::new(store),
        }
    }

    pub fn list_notes(&self) -> Vec<Note> {
        self.repository.load()
    }

    pub fn create_note(&self, command: CreateNoteCommand) -> Result<Note> {
        if command.title.trim().is_empty() || command.content.trim().is_empty() {
            return Err(anyhow!("Note title and content must not be empty"));
        }

        let now_millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
        let note = Note {
            id: Note::generate_id(now_millis),
            title: command.title,
            content: command.content,
            date: Utc::now().format("%Y-%m-%d").to_string(),
        };

        let mut notes = self.repository.load();
        notes.push(note.clone());
        self.repository.save(&notes)?;
        Ok(note)
    }

    /// Replace a note's title and content. The date is restamped, the
    /// same way a freshly submitted note is.
    pub fn update_note(&self, command: UpdateNoteCommand) -> Result<Note> {
        if command.title.trim().is_empty() || command.content.trim().is_empty() {
            return Err(anyhow!("Note title and content must not be empty"));
        }

        let mut notes = self.repository.load();
        let position = notes
            .iter()
            .position(|note| note.id == command.id)
            .ok_or_else(|| anyhow!("Note not found: {}", command.id))?;

        let updated = Note {
            id: command.id,
            title: command.title,
            content: command.content,
            date: Utc::now().format("%Y-%m-%d").to_string(),
        };
        notes[position] = updated.clone();
        self.repository.save(&notes)?;
        Ok(updated)
    }

    pub fn delete_note(&self, id: &str) -> Result<()> {
        let mut notes = self.repository.load();
        notes.retain(|note| note.id != id);
        self.repository.save(&notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;

    fn setup_service() -> NoteService {
        NoteService::new(Arc::new(MemoryKeyValueStore::new()))
    }

    #[test]
    fn test_create_note_stamps_date_and_id() {
        let service = setup_service();
        let note = service
            .create_note(CreateNoteCommand {
                title: "Sipariş".to_string(),
                content: "Kompresör parçası gelecek".to_string(),
            })
            .unwrap();
        assert!(note.id.starts_with("note_"));
        assert_eq!(note.date.len(), 10);
        assert_eq!(service.list_notes(), vec![note]);
    }

    #[test]
    fn test_create_note_rejects_blank_input() {
        let service = setup_service();
        assert!(service
            .create_note(CreateNoteCommand {
                title: "  ".to_string(),
                content: "body".to_string(),
            })
            .is_err());
        assert!(service
            .create_note(CreateNoteCommand {
                title: "title".to_string(),
                content: String::new(),
            })
            .is_err());
        assert!(service.list_notes().is_empty());
    }

    #[test]
    fn test_update_note_replaces_content() {
        let service = setup_service();
        let note = service
            .create_note(CreateNoteCommand {
                title: "before".to_string(),
                content: "old".to_string(),
            })
            .unwrap();

        let updated = service
            .update_note(UpdateNoteCommand {
                id: note.id.clone(),
                title: "after".to_string(),
                content: "new".to_string(),
            })
            .unwrap();
        assert_eq!(updated.id, note.id);
        assert_eq!(service.list_notes()[0].title, "after");
    }

    #[test]
    fn test_update_unknown_note_is_an_error() {
        let service = setup_service();
        assert!(service
            .update_note(UpdateNoteCommand {
                id: "note_404".to_string(),
                title: "t".to_string(),
                content: "c".to_string(),
            })
            .is_err());
    }

    #[test]
    fn test_delete_note() {
        let service = setup_service();
        let note = service
            .create_note(CreateNoteCommand {
                title: "t".to_string(),
                content: "c".to_string(),
            })
            .unwrap();
        service.delete_note(&note.id).unwrap();
        assert!(service.list_notes().is_empty());
    }
}
