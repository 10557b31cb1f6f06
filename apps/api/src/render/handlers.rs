use axum::{extract::State, Json};
use serde::Deserialize;

use crate::models::document::{ResumeDocument, SectionVisibility};
use crate::render::preview::{build_preview, PreviewModel};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub document: ResumeDocument,
    #[serde(default)]
    pub visibility: SectionVisibility,
}

/// POST /api/v1/preview
/// Pure recomputation — the editing surface posts its in-memory snapshot on
/// every change and applies the returned scale and styles.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Json<PreviewModel> {
    Json(build_preview(&req.document, &req.visibility, &state.density))
}
