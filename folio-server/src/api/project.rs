//! Project Page Handlers
//!
//! HTTP endpoints for the project catalog: listing, detail, and the
//! create / update / delete flows. Successful mutations redirect (303) to
//! the listing; validation failures re-render the form with errors and the
//! submitted values.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use folio_core::dto::project::ProjectForm;
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::error::{PageError, PageResult};
use crate::service::project_service::{self, ProjectError};
use crate::views::{ProjectDeletePage, ProjectDetailPage, ProjectFormPage, ProjectListPage};

const LISTING: &str = "/project/list";

fn render_page<T: Template>(page: &T) -> PageResult<Html<String>> {
    Ok(Html(page.render().map_err(PageError::Render)?))
}

/// GET / and GET /project/list
/// List all projects
pub async fn list_projects(State(pool): State<PgPool>) -> PageResult<Html<String>> {
    tracing::debug!("Listing all projects");

    let projects = project_service::list_projects(&pool).await?;

    render_page(&ProjectListPage { projects })
}

/// GET /project/{id}
/// Show a project with its tags and reviews
pub async fn get_project(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> PageResult<Html<String>> {
    tracing::debug!("Getting project: {}", id);

    let detail = project_service::get_project(&pool, id).await?;

    render_page(&ProjectDetailPage {
        project: detail.project,
        tags: detail.tags,
        reviews: detail.reviews,
    })
}

/// GET /project/create
/// Render a blank create form
pub async fn new_project() -> PageResult<Html<String>> {
    render_page(&ProjectFormPage::create(ProjectForm::default(), Vec::new()))
}

/// POST /project/create
/// Create a new project
pub async fn create_project(
    State(pool): State<PgPool>,
    Form(form): Form<ProjectForm>,
) -> PageResult<Response> {
    tracing::info!("Creating project: {}", form.title);

    match project_service::create_project(&pool, form.clone()).await {
        Ok(_) => Ok(Redirect::to(LISTING).into_response()),
        Err(ProjectError::Validation(errors)) => {
            let body = render_page(&ProjectFormPage::create(form, errors))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /project/{id}/update
/// Render the form pre-populated from the stored project
pub async fn edit_project(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> PageResult<Html<String>> {
    let detail = project_service::get_project(&pool, id).await?;
    let form = ProjectForm::from_existing(&detail.project, &detail.tags);

    render_page(&ProjectFormPage::edit(id, form, Vec::new()))
}

/// POST /project/{id}/update
/// Persist changes to an existing project
pub async fn update_project(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Form(form): Form<ProjectForm>,
) -> PageResult<Response> {
    tracing::info!("Updating project: {}", id);

    match project_service::update_project(&pool, id, form.clone()).await {
        Ok(_) => Ok(Redirect::to(LISTING).into_response()),
        Err(ProjectError::Validation(errors)) => {
            let body = render_page(&ProjectFormPage::edit(id, form, errors))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /project/{id}/delete
/// Render the delete confirmation page
pub async fn confirm_delete(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> PageResult<Html<String>> {
    let detail = project_service::get_project(&pool, id).await?;

    render_page(&ProjectDeletePage {
        project: detail.project,
    })
}

/// POST /project/{id}/delete
/// Delete the project and return to the listing
pub async fn delete_project(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> PageResult<Redirect> {
    tracing::info!("Deleting project: {}", id);

    project_service::delete_project(&pool, id).await?;

    Ok(Redirect::to(LISTING))
}
