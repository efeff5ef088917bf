//! Core domain types
//!
//! The fundamental catalog entities. These are shared between the
//! repository layer (for persistence) and the view layer (for rendering).

pub mod project;
pub mod review;
pub mod tag;

pub use project::Project;
pub use review::Review;
pub use tag::Tag;
