use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use uuid::Uuid;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create projects table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id UUID PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            top_rated BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create tags table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id UUID PRIMARY KEY,
            name VARCHAR(100) NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create project/tag join table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS project_tags (
            project_id UUID NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            tag_id UUID NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            PRIMARY KEY (project_id, tag_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create reviews table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id UUID PRIMARY KEY,
            project_id UUID NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            body TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for better query performance
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_created_at ON projects(created_at DESC)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_reviews_project_id ON reviews(project_id, created_at)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_project_tags_tag_id ON project_tags(tag_id)")
        .execute(pool)
        .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Seed the catalog with the demo projects when the store is empty.
///
/// Runs once against a fresh database; any existing project disables it.
pub async fn seed_demo_projects(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    let demos: [(&str, &str, bool, &[&str]); 3] = [
        (
            "Ecommerce Website",
            "Fully functional ecommerce website",
            true,
            &["web", "shop"],
        ),
        (
            "Portfolio Website",
            "A personal website to write articles and display work",
            false,
            &["web"],
        ),
        (
            "Social Network Website",
            "An open source project built by the community",
            true,
            &["web", "community"],
        ),
    ];

    let now = chrono::Utc::now();

    for (title, description, top_rated, tag_names) in demos {
        let project_id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO projects (id, title, description, top_rated, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(project_id)
        .bind(title)
        .bind(description)
        .bind(top_rated)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        for &tag_name in tag_names {
            let tag_id: Uuid = sqlx::query_scalar(
                r#"
                INSERT INTO tags (id, name)
                VALUES ($1, $2)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(tag_name)
            .fetch_one(pool)
            .await?;

            sqlx::query("INSERT INTO project_tags (project_id, tag_id) VALUES ($1, $2)")
                .bind(project_id)
                .bind(tag_id)
                .execute(pool)
                .await?;
        }

        if top_rated {
            sqlx::query(
                r#"
                INSERT INTO reviews (id, project_id, body, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(project_id)
            .bind("Great work, would use again.")
            .bind(now)
            .execute(pool)
            .await?;
        }
    }

    tracing::info!("Seeded demo projects");
    Ok(())
}
