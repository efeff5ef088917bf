//! HTML views
//!
//! Askama template structs for every page the service renders. Each struct
//! pairs with a file under `templates/`; rendering is compile-time checked.

use askama::Template;
use folio_core::domain::{Project, Review, Tag};
use folio_core::dto::project::{ProjectForm, ProjectSummary};
use uuid::Uuid;

/// Listing page: all projects, newest first
#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectListPage {
    pub projects: Vec<ProjectSummary>,
}

/// Detail page: one project with its tags and reviews
#[derive(Template)]
#[template(path = "project.html")]
pub struct ProjectDetailPage {
    pub project: Project,
    pub tags: Vec<Tag>,
    pub reviews: Vec<Review>,
}

/// Create/update form page
///
/// Rendered blank for create, pre-populated for update, and re-rendered
/// with `errors` and the submitted values when validation fails.
#[derive(Template)]
#[template(path = "project_form.html")]
pub struct ProjectFormPage {
    pub heading: String,
    pub action: String,
    pub form: ProjectForm,
    pub errors: Vec<String>,
}

impl ProjectFormPage {
    pub fn create(form: ProjectForm, errors: Vec<String>) -> Self {
        Self {
            heading: "Add project".to_string(),
            action: "/project/create".to_string(),
            form,
            errors,
        }
    }

    pub fn edit(id: Uuid, form: ProjectForm, errors: Vec<String>) -> Self {
        Self {
            heading: "Edit project".to_string(),
            action: format!("/project/{id}/update"),
            form,
            errors,
        }
    }
}

/// Delete confirmation page
#[derive(Template)]
#[template(path = "project_delete.html")]
pub struct ProjectDeletePage {
    pub project: Project,
}

/// Error page shared by all failure responses
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project {
            id: Uuid::new_v4(),
            title: "Ecommerce Website".to_string(),
            description: "Fully functional ecommerce website".to_string(),
            top_rated: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_listing_renders_projects() {
        let page = ProjectListPage {
            projects: vec![sample_project().into()],
        };

        let html = page.render().unwrap();
        assert!(html.contains("Ecommerce Website"));
        assert!(html.contains("Top rated"));
    }

    #[test]
    fn test_listing_renders_empty_state() {
        let page = ProjectListPage { projects: vec![] };

        let html = page.render().unwrap();
        assert!(html.contains("No projects yet"));
    }

    #[test]
    fn test_detail_renders_tags_and_reviews() {
        let project = sample_project();
        let page = ProjectDetailPage {
            tags: vec![Tag {
                id: Uuid::new_v4(),
                name: "web".to_string(),
            }],
            reviews: vec![Review {
                id: Uuid::new_v4(),
                project_id: project.id,
                body: "Great work, would use again.".to_string(),
                created_at: chrono::Utc::now(),
            }],
            project,
        };

        let html = page.render().unwrap();
        assert!(html.contains("Ecommerce Website"));
        assert!(html.contains("web"));
        assert!(html.contains("Great work"));
    }

    #[test]
    fn test_form_rerender_shows_errors_and_values() {
        let form = ProjectForm {
            title: "".to_string(),
            description: "kept on re-render".to_string(),
            top_rated: true,
            tags: "web".to_string(),
        };
        let page =
            ProjectFormPage::create(form, vec!["Project title cannot be empty".to_string()]);

        let html = page.render().unwrap();
        assert!(html.contains("Project title cannot be empty"));
        assert!(html.contains("kept on re-render"));
        assert!(html.contains("checked"));
    }

    #[test]
    fn test_edit_form_action_targets_project() {
        let project = sample_project();
        let page = ProjectFormPage::edit(project.id, ProjectForm::default(), Vec::new());

        let html = page.render().unwrap();
        assert!(html.contains(&format!("/project/{}/update", project.id)));
    }

    #[test]
    fn test_delete_confirmation_names_project() {
        let project = sample_project();
        let id = project.id;
        let page = ProjectDeletePage { project };

        let html = page.render().unwrap();
        assert!(html.contains("Ecommerce Website"));
        assert!(html.contains(&format!("/project/{id}/delete")));
    }

    #[test]
    fn test_error_page_renders_status() {
        let page = ErrorPage {
            status: 404,
            message: "Project not found".to_string(),
        };

        let html = page.render().unwrap();
        assert!(html.contains("404"));
        assert!(html.contains("Project not found"));
    }
}
