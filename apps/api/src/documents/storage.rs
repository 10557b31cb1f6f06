//! Per-user document persistence. One row per user, replaced wholesale on
//! every save — the editing surface saves everything at once, so last write
//! wins.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::document::DocumentRow;

/// Parameters for saving a user's document.
pub struct SaveParams<'a> {
    pub user_id: Uuid,
    pub document: &'a serde_json::Value,
    pub show_projects: bool,
    pub show_leadership: bool,
    pub show_publications: bool,
    pub job_description: &'a str,
}

pub async fn save_document(pool: &PgPool, params: SaveParams<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO resume_documents
            (user_id, document, show_projects, show_leadership, show_publications, job_description, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, now())
        ON CONFLICT (user_id) DO UPDATE SET
            document = EXCLUDED.document,
            show_projects = EXCLUDED.show_projects,
            show_leadership = EXCLUDED.show_leadership,
            show_publications = EXCLUDED.show_publications,
            job_description = EXCLUDED.job_description,
            updated_at = now()
        "#,
    )
    .bind(params.user_id)
    .bind(params.document)
    .bind(params.show_projects)
    .bind(params.show_leadership)
    .bind(params.show_publications)
    .bind(params.job_description)
    .execute(pool)
    .await?;

    info!("Saved resume document for user {}", params.user_id);
    Ok(())
}

pub async fn load_document(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<DocumentRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM resume_documents WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn delete_document(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM resume_documents WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() > 0 {
        info!("Reset resume document for user {user_id}");
    }
    Ok(())
}
