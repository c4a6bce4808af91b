//! Project entity model and record assembly.

use chrono::{DateTime, Utc};
use orangeslice_core::project::ProjectSubmission;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A project row from the `projects` table.
///
/// Serializes with camelCase field names to match the public API shape.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub github_link: String,
    pub project_link: String,
    pub tags: Vec<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Assemble a complete record from a validated submission.
    ///
    /// Assigns a fresh identifier and the current timestamp, derives the
    /// category from the first tag, and substitutes the documented defaults
    /// for description and image. The caller is expected to have run
    /// [`ProjectSubmission::validate`] first.
    pub fn from_submission(submission: ProjectSubmission) -> Self {
        let description = submission.description_or_default();
        let image = submission.image_or_default();
        let category = submission.category().to_string();

        Self {
            id: Uuid::new_v4(),
            name: submission.name,
            description,
            image,
            github_link: submission.github_link,
            project_link: submission.project_link,
            tags: submission.tags,
            category,
            created_at: Utc::now(),
        }
    }
}
