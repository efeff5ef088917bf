//! Data transfer objects
//!
//! Shapes exchanged between the HTTP layer and the service layer: submitted
//! form data on the way in, view models on the way out.

pub mod project;
