//! Flat-file persistence for the note collection.
//!
//! The backing file is the source of truth: every operation reloads it and
//! every mutating operation rewrites it in full.

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::models::Note;

/// Layout of `created_at`/`updated_at` strings.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Title given to notes created without one.
const DEFAULT_TITLE: &str = "Untitled";

/// File-backed note store.
///
/// The path is injected at construction so tests can point the store at a
/// temporary directory. One instance serializes its load-mutate-save
/// transactions behind a single lock; the file itself stays last-write-wins
/// against external writers.
pub struct NoteStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection. A missing file is an empty collection, not
    /// an error. A file that exists but fails to decode is surfaced as a
    /// storage error rather than silently reset.
    pub async fn load(&self) -> Result<Vec<Note>, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the backing file with the full serialized collection.
    /// Pretty-printed with 2-space indentation; non-ASCII text is written
    /// literally.
    pub async fn save(&self, notes: &[Note]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(notes)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// List all notes in insertion order.
    pub async fn list(&self) -> Result<Vec<Note>, AppError> {
        self.load().await
    }

    /// Create a new note, substituting defaults for missing fields.
    pub async fn create(
        &self,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.load().await?;

        // The next id derives from the ids currently present, so deleting
        // the highest-id note frees that id for reuse.
        let new_id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let now = Local::now().format(TIMESTAMP_FORMAT).to_string();

        let note = Note {
            id: new_id,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            content: content.unwrap_or_default(),
            created_at: now.clone(),
            updated_at: now,
        };

        notes.push(note.clone());
        self.save(&notes).await?;

        Ok(note)
    }

    /// Update an existing note, overwriting only the supplied fields and
    /// refreshing `updated_at`. No write is performed when the id is absent.
    pub async fn update(
        &self,
        id: u64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.load().await?;

        let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
            return Err(AppError::NotFound(format!("note {} not found", id)));
        };

        if let Some(title) = title {
            note.title = title;
        }
        if let Some(content) = content {
            note.content = content;
        }
        note.updated_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let updated = note.clone();

        self.save(&notes).await?;

        Ok(updated)
    }

    /// Delete a note by id. Deleting an absent id is not an error; the file
    /// is rewritten either way.
    pub async fn delete(&self, id: u64) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.load().await?;

        notes.retain(|n| n.id != id);
        self.save(&notes).await?;

        Ok(())
    }
}
