//! Project Service
//!
//! Business logic for the project catalog.

use folio_core::domain::Project;
use folio_core::dto::project::{ProjectDetail, ProjectForm, ProjectSummary};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{project_repository, review_repository, tag_repository};

/// Service error type
#[derive(Debug)]
pub enum ProjectError {
    NotFound(Uuid),
    Validation(Vec<String>),
    Database(sqlx::Error),
}

impl From<sqlx::Error> for ProjectError {
    fn from(err: sqlx::Error) -> Self {
        ProjectError::Database(err)
    }
}

pub type Result<T> = std::result::Result<T, ProjectError>;

/// List all projects for the listing page
pub async fn list_projects(pool: &PgPool) -> Result<Vec<ProjectSummary>> {
    let projects = project_repository::list_all(pool).await?;
    Ok(projects.into_iter().map(ProjectSummary::from).collect())
}

/// Get a project with its tags and reviews
pub async fn get_project(pool: &PgPool, id: Uuid) -> Result<ProjectDetail> {
    let project = project_repository::find_by_id(pool, id)
        .await?
        .ok_or(ProjectError::NotFound(id))?;

    let tags = tag_repository::list_for_project(pool, id).await?;
    let reviews = review_repository::list_for_project(pool, id).await?;

    Ok(ProjectDetail {
        project,
        tags,
        reviews,
    })
}

/// Create a new project from submitted form data
pub async fn create_project(pool: &PgPool, form: ProjectForm) -> Result<Project> {
    // Validate request
    validate_project_form(&form)?;

    // Create project in database
    let project = project_repository::create(pool, &form).await?;

    // Attach tags
    set_project_tags(pool, project.id, &form).await?;

    tracing::info!("Project created: {} ({})", project.title, project.id);

    Ok(project)
}

/// Update an existing project from submitted form data
pub async fn update_project(pool: &PgPool, id: Uuid, form: ProjectForm) -> Result<Project> {
    // Validate request
    validate_project_form(&form)?;

    // Check if project exists
    let _existing = project_repository::find_by_id(pool, id)
        .await?
        .ok_or(ProjectError::NotFound(id))?;

    // Update project
    let updated = project_repository::update(pool, id, &form).await?;

    if !updated {
        return Err(ProjectError::NotFound(id));
    }

    // Replace tags with the submitted set
    set_project_tags(pool, id, &form).await?;

    // Return updated project
    let project = project_repository::find_by_id(pool, id)
        .await?
        .ok_or(ProjectError::NotFound(id))?;

    Ok(project)
}

/// Delete a project
pub async fn delete_project(pool: &PgPool, id: Uuid) -> Result<()> {
    let deleted = project_repository::delete(pool, id).await?;

    if !deleted {
        return Err(ProjectError::NotFound(id));
    }

    tracing::info!("Project deleted: {}", id);

    Ok(())
}

async fn set_project_tags(pool: &PgPool, project_id: Uuid, form: &ProjectForm) -> Result<()> {
    let mut tag_ids = Vec::new();

    for name in form.tag_names() {
        let tag = tag_repository::upsert(pool, &name).await?;
        tag_ids.push(tag.id);
    }

    tag_repository::set_for_project(pool, project_id, &tag_ids).await?;

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_project_form(form: &ProjectForm) -> Result<()> {
    let mut errors = Vec::new();

    if form.title.trim().is_empty() {
        errors.push("Project title cannot be empty".to_string());
    }

    if form.title.len() > 255 {
        errors.push("Project title is too long (max 255 characters)".to_string());
    }

    if form.description.trim().is_empty() {
        errors.push("Project description cannot be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ProjectError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_title() {
        let form = ProjectForm {
            title: "  ".to_string(),
            description: "A test project".to_string(),
            ..Default::default()
        };

        let result = validate_project_form(&form);
        assert!(matches!(result, Err(ProjectError::Validation(_))));
    }

    #[test]
    fn test_validate_long_title() {
        let form = ProjectForm {
            title: "x".repeat(256),
            description: "A test project".to_string(),
            ..Default::default()
        };

        match validate_project_form(&form) {
            Err(ProjectError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("too long")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_description() {
        let form = ProjectForm {
            title: "Ecommerce Website".to_string(),
            description: "".to_string(),
            ..Default::default()
        };

        let result = validate_project_form(&form);
        assert!(matches!(result, Err(ProjectError::Validation(_))));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let form = ProjectForm::default();

        match validate_project_form(&form) {
            Err(ProjectError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_valid_form() {
        let form = ProjectForm {
            title: "Portfolio Website".to_string(),
            description: "A personal website to display work".to_string(),
            top_rated: true,
            tags: "web, portfolio".to_string(),
        };

        let result = validate_project_form(&form);
        assert!(result.is_ok());
    }
}
