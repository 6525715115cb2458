//! Command types for note operations.

#[derive(Debug, Clone)]
pub struct CreateNoteCommand {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct UpdateNoteCommand {
    pub id: String,
    pub title: String,
    pub content: String,
}
