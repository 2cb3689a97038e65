//! Note model matching the frontend Note shape.

use serde::{Deserialize, Serialize};

/// A note as persisted in the backing file and returned over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Fixed at creation, never modified afterwards.
    pub created_at: String,
    /// Set at creation, refreshed on every successful update.
    pub updated_at: String,
}

/// Request body for creating a new note.
///
/// Both fields are optional; the store substitutes defaults for anything
/// missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Request body for updating an existing note.
///
/// Omitted fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
