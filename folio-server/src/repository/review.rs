//! Review Repository
//!
//! Read side of the review relation; reviews enter the store through the
//! demo seed.

use folio_core::domain::Review;
use sqlx::PgPool;
use uuid::Uuid;

/// List the reviews left on a project, newest first
pub async fn list_for_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Review>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ReviewRow>(
        r#"
        SELECT id, project_id, body, created_at
        FROM reviews
        WHERE project_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    project_id: Uuid,
    body: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            project_id: row.project_id,
            body: row.body,
            created_at: row.created_at,
        }
    }
}
