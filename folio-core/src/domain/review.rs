//! Review domain type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Feedback left on a single project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,

    /// The project this review belongs to
    pub project_id: Uuid,

    /// Review text
    pub body: String,

    pub created_at: DateTime<Utc>,
}
