//! Project DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Project, Review, Tag};

/// Submitted create/update form data
///
/// Deserialized from an `application/x-www-form-urlencoded` body. The
/// `top_rated` checkbox is absent from the body when unchecked, hence the
/// default. Tags arrive as a single comma-separated field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub top_rated: bool,
    #[serde(default)]
    pub tags: String,
}

impl ProjectForm {
    /// Parse the tags field into clean labels: trimmed, empties dropped,
    /// duplicates removed (first occurrence wins).
    pub fn tag_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for raw in self.tags.split(',') {
            let name = raw.trim();
            if name.is_empty() {
                continue;
            }
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Rebuild the form values shown when editing an existing project
    pub fn from_existing(project: &Project, tags: &[Tag]) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            top_rated: project.top_rated,
            tags: tags
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// One row of the listing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub top_rated: bool,
}

impl From<Project> for ProjectSummary {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            top_rated: project.top_rated,
        }
    }
}

/// A project together with its related entities, for the detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub tags: Vec<Tag>,
    pub reviews: Vec<Review>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_trims_and_drops_empties() {
        let form = ProjectForm {
            tags: " rust , web ,, backend ".to_string(),
            ..Default::default()
        };

        assert_eq!(form.tag_names(), vec!["rust", "web", "backend"]);
    }

    #[test]
    fn test_tag_names_dedupes() {
        let form = ProjectForm {
            tags: "rust,web,rust".to_string(),
            ..Default::default()
        };

        assert_eq!(form.tag_names(), vec!["rust", "web"]);
    }

    #[test]
    fn test_tag_names_empty_field() {
        let form = ProjectForm::default();
        assert!(form.tag_names().is_empty());
    }
}
