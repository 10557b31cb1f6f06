use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::compare::summarize_changes;
use crate::errors::AppError;
use crate::models::document::{ResumeDocument, SectionVisibility};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub document: ResumeDocument,
    #[serde(default)]
    pub visibility: SectionVisibility,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub candidate: ResumeDocument,
    pub changes: Vec<String>,
}

/// POST /api/v1/optimize
/// Returns the candidate plus its change report. Nothing is persisted:
/// "apply" is the client saving the candidate wholesale, "discard" is
/// dropping it.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job description must not be empty".to_string(),
        ));
    }

    let candidate = state
        .optimizer
        .optimize(&req.document, &req.job_description)
        .await?;
    let changes = summarize_changes(&req.document, &candidate, &req.visibility);

    Ok(Json(OptimizeResponse { candidate, changes }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::ResumeOptimizer;
    use async_trait::async_trait;

    /// Canned backend: uppercases the summary, leaves everything else alone.
    struct UppercaseOptimizer;

    #[async_trait]
    impl ResumeOptimizer for UppercaseOptimizer {
        async fn optimize(
            &self,
            document: &ResumeDocument,
            _job_description: &str,
        ) -> Result<ResumeDocument, AppError> {
            let mut candidate = document.clone();
            candidate.summary = candidate.summary.to_uppercase();
            Ok(candidate)
        }
    }

    #[tokio::test]
    async fn test_canned_backend_reports_summary_change() {
        let mut doc = ResumeDocument::default();
        doc.summary = "shipped resilient storage".to_string();

        let candidate = UppercaseOptimizer
            .optimize(&doc, "Senior Rust Engineer")
            .await
            .unwrap();
        let changes = summarize_changes(&doc, &candidate, &SectionVisibility::default());
        assert_eq!(changes, vec!["Professional Summary optimized"]);
    }
}
