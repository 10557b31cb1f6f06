use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::documents::storage::{delete_document, load_document, save_document, SaveParams};
use crate::errors::AppError;
use crate::models::document::{ResumeDocument, SectionVisibility};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEnvelope {
    pub document: ResumeDocument,
    pub visibility: SectionVisibility,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub user_id: Uuid,
    pub document: ResumeDocument,
    #[serde(default)]
    pub visibility: SectionVisibility,
    #[serde(default)]
    pub job_description: String,
}

/// GET /api/v1/document
/// An absent row serves the placeholder document without persisting it, the
/// way the editing surface falls back to its initial state on empty storage.
pub async fn handle_get_document(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DocumentEnvelope>, AppError> {
    let envelope = match load_document(&state.db, params.user_id).await? {
        Some(row) => {
            let visibility = row.visibility();
            DocumentEnvelope {
                // A row that no longer parses serves the placeholder instead
                // of failing the whole load.
                document: serde_json::from_value(row.document).unwrap_or_default(),
                visibility,
                job_description: row.job_description,
            }
        }
        None => DocumentEnvelope {
            document: ResumeDocument::default(),
            visibility: SectionVisibility::default(),
            job_description: String::new(),
        },
    };
    Ok(Json(envelope))
}

/// PUT /api/v1/document
pub async fn handle_save_document(
    State(state): State<AppState>,
    Json(req): Json<SaveRequest>,
) -> Result<StatusCode, AppError> {
    let document = serde_json::to_value(&req.document).map_err(|e| AppError::Internal(e.into()))?;
    save_document(
        &state.db,
        SaveParams {
            user_id: req.user_id,
            document: &document,
            show_projects: req.visibility.projects,
            show_leadership: req.visibility.leadership,
            show_publications: req.visibility.publications,
            job_description: &req.job_description,
        },
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/document
/// Start-over semantics: succeeds whether or not a row existed.
pub async fn handle_reset_document(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    delete_document(&state.db, params.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
