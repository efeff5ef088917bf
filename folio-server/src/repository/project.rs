//! Project Repository
//!
//! Handles all database operations related to projects.

use folio_core::domain::Project;
use folio_core::dto::project::ProjectForm;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new project in the database
pub async fn create(pool: &PgPool, form: &ProjectForm) -> Result<Project, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    let project = Project {
        id,
        title: form.title.clone(),
        description: form.description.clone(),
        top_rated: form.top_rated,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO projects (id, title, description, top_rated, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(id)
    .bind(&form.title)
    .bind(&form.description)
    .bind(form.top_rated)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(project)
}

/// Find a project by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, title, description, top_rated, created_at, updated_at
        FROM projects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List all projects, newest first
pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, title, description, top_rated, created_at, updated_at
        FROM projects
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Update a project's mutable fields
pub async fn update(pool: &PgPool, id: Uuid, form: &ProjectForm) -> Result<bool, sqlx::Error> {
    let now = chrono::Utc::now();

    let result = sqlx::query(
        r#"
        UPDATE projects
        SET title = $1, description = $2, top_rated = $3, updated_at = $4
        WHERE id = $5
        "#,
    )
    .bind(&form.title)
    .bind(&form.description)
    .bind(form.top_rated)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a project by ID
///
/// Join rows and reviews go with it through the cascade rules.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    title: String,
    description: String,
    top_rated: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            top_rated: row.top_rated,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
