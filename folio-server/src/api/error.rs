//! Page Error Handling
//!
//! Unified error type for page responses. Every failure renders the shared
//! error template; database and template faults are logged and hidden
//! behind a generic 500 body.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::service::project_service::ProjectError;
use crate::views::ErrorPage;

/// Page error type
#[derive(Debug)]
pub enum PageError {
    NotFound(String),
    BadRequest(String),
    Database(sqlx::Error),
    Render(askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PageError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            PageError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            PageError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            PageError::Render(err) => {
                tracing::error!("Template render error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let page = ErrorPage {
            status: status.as_u16(),
            message: message.clone(),
        };

        // Plain-text fallback when even the error template fails
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, message).into_response(),
        }
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        PageError::Database(err)
    }
}

impl From<ProjectError> for PageError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(id) => {
                PageError::NotFound(format!("Project {} not found", id))
            }
            ProjectError::Validation(errors) => PageError::BadRequest(errors.join("; ")),
            ProjectError::Database(err) => PageError::Database(err),
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_renders_404_page() {
        let response = PageError::NotFound("Project missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_hides_details() {
        let response = PageError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_service_not_found_maps_to_404() {
        let err = PageError::from(ProjectError::NotFound(Uuid::new_v4()));
        assert!(matches!(err, PageError::NotFound(_)));
    }
}
