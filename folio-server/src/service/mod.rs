//! Service Module
//!
//! Business logic layer for the catalog.
//! Services orchestrate between repositories and contain domain logic.

pub mod project;

// Re-export for convenience
pub use project as project_service;
