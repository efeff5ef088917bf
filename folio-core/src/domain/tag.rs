//! Tag domain type

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A label attached to zero or more projects
///
/// Tag names are unique; attaching an existing name to a project reuses
/// the stored tag rather than creating a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}
