//! API Module
//!
//! HTTP layer for the catalog.
//! Handlers render HTML pages; each submodule covers one concern.

pub mod error;
pub mod health;
pub mod project;

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

/// Create the main router with all page endpoints
pub fn create_router(pool: PgPool) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Listing
        .route("/", get(project::list_projects))
        .route("/project/list", get(project::list_projects))
        // Create flow
        .route("/project/create", get(project::new_project))
        .route("/project/create", post(project::create_project))
        // Detail
        .route("/project/{id}", get(project::get_project))
        // Update flow
        .route("/project/{id}/update", get(project::edit_project))
        .route("/project/{id}/update", post(project::update_project))
        // Delete flow
        .route("/project/{id}/delete", get(project::confirm_delete))
        .route("/project/{id}/delete", post(project::delete_project))
        // Add state and middleware
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
}
