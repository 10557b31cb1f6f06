use std::sync::Arc;

use sqlx::PgPool;

use crate::layout::DensityConfig;
use crate::optimize::ResumeOptimizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable optimization backend. Default: `LlmResumeOptimizer`.
    pub optimizer: Arc<dyn ResumeOptimizer>,
    /// Tuning constants for the one-page density heuristic.
    pub density: DensityConfig,
}
