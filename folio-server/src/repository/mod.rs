//! Repository Module
//!
//! Data access layer for the catalog.
//! Each repository handles database operations for a specific domain entity.

pub mod project;
pub mod review;
pub mod tag;

// Re-export for convenience
pub use project as project_repository;
pub use review as review_repository;
pub use tag as tag_repository;
