//! Tag Repository
//!
//! Handles tag storage and the project/tag join table.

use folio_core::domain::Tag;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a tag by name, or return the existing one
///
/// Names are unique; the upsert keeps the stored id stable for labels
/// that already exist.
pub async fn upsert(pool: &PgPool, name: &str) -> Result<Tag, sqlx::Error> {
    let row = sqlx::query_as::<_, TagRow>(
        r#"
        INSERT INTO tags (id, name)
        VALUES ($1, $2)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id, name
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Replace a project's tag set with the given tag ids
pub async fn set_for_project(
    pool: &PgPool,
    project_id: Uuid,
    tag_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM project_tags WHERE project_id = $1")
        .bind(project_id)
        .execute(pool)
        .await?;

    for tag_id in tag_ids {
        sqlx::query(
            r#"
            INSERT INTO project_tags (project_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(project_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
    }

    Ok(())
}

/// List the tags attached to a project, by name
pub async fn list_for_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Tag>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TagRow>(
        r#"
        SELECT t.id, t.name
        FROM tags t
        JOIN project_tags pt ON pt.tag_id = t.id
        WHERE pt.project_id = $1
        ORDER BY t.name
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
struct TagRow {
    id: Uuid,
    name: String,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: row.id,
            name: row.name,
        }
    }
}
