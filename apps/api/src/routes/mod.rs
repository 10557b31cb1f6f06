pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::compare::handlers::handle_compare;
use crate::documents::handlers::{
    handle_get_document, handle_reset_document, handle_save_document,
};
use crate::optimize::handlers::handle_optimize;
use crate::render::handlers::handle_preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/document",
            get(handle_get_document)
                .put(handle_save_document)
                .delete(handle_reset_document),
        )
        .route("/api/v1/preview", post(handle_preview))
        .route("/api/v1/compare", post(handle_compare))
        .route("/api/v1/optimize", post(handle_optimize))
        .with_state(state)
}
