//! Note API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::DeleteResponse;
use crate::errors::AppError;
use crate::models::{CreateNoteRequest, Note, UpdateNoteRequest};
use crate::AppState;

/// GET /api/notes - List all notes.
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, AppError> {
    let notes = state.store.list().await?;
    Ok(Json(notes))
}

/// POST /api/notes - Create a new note.
///
/// A missing body behaves like an empty one: the store fills in defaults.
pub async fn create_note(
    State(state): State<AppState>,
    request: Option<Json<CreateNoteRequest>>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let Json(request) = request.unwrap_or_default();

    let note = state.store.create(request.title, request.content).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/notes/{id} - Update a note. Omitted fields keep their values.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    request: Option<Json<UpdateNoteRequest>>,
) -> Result<Json<Note>, AppError> {
    let Json(request) = request.unwrap_or_default();

    let note = state
        .store
        .update(id, request.title, request.content)
        .await?;
    Ok(Json(note))
}

/// DELETE /api/notes/{id} - Delete a note. Succeeds whether or not a note
/// with this id exists.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.store.delete(id).await?;

    Ok(Json(DeleteResponse {
        message: "note deleted".to_string(),
    }))
}
