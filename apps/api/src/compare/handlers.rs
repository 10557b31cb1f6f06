use axum::Json;
use serde::{Deserialize, Serialize};

use crate::compare::summarize_changes;
use crate::models::document::{ResumeDocument, SectionVisibility};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub original: ResumeDocument,
    pub candidate: ResumeDocument,
    #[serde(default)]
    pub visibility: SectionVisibility,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub changes: Vec<String>,
}

/// POST /api/v1/compare
/// Pure computation — the comparison view calls this when it opens.
pub async fn handle_compare(Json(req): Json<CompareRequest>) -> Json<CompareResponse> {
    Json(CompareResponse {
        changes: summarize_changes(&req.original, &req.candidate, &req.visibility),
    })
}
