use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::document::ResumeDocument;
use crate::optimize::prompts::{OPTIMIZE_PROMPT_TEMPLATE, OPTIMIZE_SYSTEM};

/// Pluggable optimization backend, carried in `AppState` as
/// `Arc<dyn ResumeOptimizer>` so handlers never name a concrete client.
#[async_trait]
pub trait ResumeOptimizer: Send + Sync {
    /// Returns a candidate document tailored to the job description. The
    /// candidate is never persisted here — applying it is the caller's
    /// decision.
    async fn optimize(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<ResumeDocument, AppError>;
}

/// Default backend: one LLM round-trip returning a same-shaped document.
/// The response shape is trusted, not validated — missing fields
/// deserialize as empty sections.
pub struct LlmResumeOptimizer(pub LlmClient);

#[async_trait]
impl ResumeOptimizer for LlmResumeOptimizer {
    async fn optimize(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<ResumeDocument, AppError> {
        let resume_json =
            serde_json::to_string_pretty(document).map_err(|e| AppError::Internal(e.into()))?;
        let prompt = OPTIMIZE_PROMPT_TEMPLATE
            .replace("{job_description}", job_description)
            .replace("{resume_json}", &resume_json);

        self.0
            .complete_json::<ResumeDocument>(OPTIMIZE_SYSTEM, &prompt)
            .await
            .map_err(|e| AppError::Llm(format!("resume optimization failed: {e}")))
    }
}
