//! Client-side record types.
//!
//! The gallery keeps its own view of a project record, independent of the
//! server's row model. Wire names are camelCase; unknown fields (such as
//! `category` and `createdAt` on server-built records) are ignored.

use serde::{Deserialize, Serialize};

/// A project record as the gallery sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub github_link: String,
    pub project_link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Form contents for a new project, as captured by the create dialog.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub github_link: String,
    pub project_link: String,
    /// Optional image URL; the server substitutes a placeholder when empty.
    pub image: String,
    pub tags: Vec<String>,
}

impl ProjectDraft {
    /// Submission body for the write handler.
    ///
    /// An empty image field is omitted so the server generates its
    /// placeholder; the description is fixed, matching the create dialog
    /// which has no description input.
    pub fn to_request_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "name": self.name,
            "description": "New project",
            "githubLink": self.github_link,
            "projectLink": self.project_link,
            "tags": self.tags,
        });
        if !self.image.is_empty() {
            body["image"] = serde_json::Value::String(self.image.clone());
        }
        body
    }
}
