//! Project domain type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog project
///
/// Tags (many-to-many) and reviews (one-to-many) are related entities,
/// fetched alongside the project for the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, immutable once created
    pub id: Uuid,

    /// Display title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Whether the project is shown with the "top rated" badge
    pub top_rated: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
