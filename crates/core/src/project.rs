//! Project submission rules.
//!
//! A submission arrives without identifier, category, or timestamp. This
//! module owns the rules that turn it into an acceptable record:
//!
//! - `name`, `githubLink`, and `projectLink` must be non-empty
//! - `category` = first tag, or [`FALLBACK_CATEGORY`] when no tags given
//! - `description` defaults to [`DEFAULT_DESCRIPTION`]
//! - `image` defaults to a placeholder URL embedding the project name

use serde::Deserialize;

use crate::error::CoreError;

/// Category assigned when a submission carries no tags.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Description substituted when a submission omits one.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Candidate record as posted by a client. Identifier, category, and
/// timestamp are assigned later, at acceptance.
///
/// Required fields default to empty when omitted from the request body,
/// so a missing field fails [`ProjectSubmission::validate`] the same way
/// an empty one does.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub project_link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProjectSubmission {
    /// Check the required fields. Missing and empty are treated alike.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() || self.github_link.is_empty() || self.project_link.is_empty() {
            return Err(CoreError::Validation("Missing required fields".into()));
        }
        Ok(())
    }

    /// Category for this submission: first tag, or the fallback.
    pub fn category(&self) -> &str {
        self.tags
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_CATEGORY)
    }

    /// Description with the default substituted.
    pub fn description_or_default(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
    }

    /// Image URL with the generated placeholder substituted.
    pub fn image_or_default(&self) -> String {
        self.image
            .clone()
            .unwrap_or_else(|| placeholder_image_url(&self.name))
    }
}

/// Placeholder image URL for a project with no image of its own.
///
/// The project name is embedded as the `text` query parameter.
pub fn placeholder_image_url(name: &str) -> String {
    format!(
        "https://via.placeholder.com/500x300/1e1e1e/ff7d00?text={}",
        encode_query_component(name)
    )
}

/// Percent-encode a string for use as a URL query component.
///
/// Unreserved characters (RFC 3986) pass through, everything else is
/// percent-encoded byte-wise.
fn encode_query_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, tags: &[&str]) -> ProjectSubmission {
        ProjectSubmission {
            name: name.to_string(),
            description: None,
            image: None,
            github_link: "https://github.com/example".to_string(),
            project_link: "https://example.com".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn category_is_first_tag() {
        let sub = submission("X", &["ML", "Analytics"]);
        assert_eq!(sub.category(), "ML");
    }

    #[test]
    fn category_falls_back_without_tags() {
        let sub = submission("X", &[]);
        assert_eq!(sub.category(), FALLBACK_CATEGORY);
    }

    #[test]
    fn empty_name_rejected() {
        let sub = submission("", &[]);
        assert!(sub.validate().is_err());
    }

    #[test]
    fn empty_github_link_rejected() {
        let mut sub = submission("X", &[]);
        sub.github_link = String::new();
        assert!(sub.validate().is_err());
    }

    #[test]
    fn empty_project_link_rejected() {
        let mut sub = submission("X", &[]);
        sub.project_link = String::new();
        assert!(sub.validate().is_err());
    }

    #[test]
    fn valid_submission_accepted() {
        assert!(submission("X", &["ML"]).validate().is_ok());
    }

    #[test]
    fn description_default_substituted() {
        let sub = submission("X", &[]);
        assert_eq!(sub.description_or_default(), DEFAULT_DESCRIPTION);

        let mut sub = submission("X", &[]);
        sub.description = Some("A real description".to_string());
        assert_eq!(sub.description_or_default(), "A real description");
    }

    #[test]
    fn image_default_embeds_encoded_name() {
        let sub = submission("AI Image Generator", &[]);
        assert_eq!(
            sub.image_or_default(),
            "https://via.placeholder.com/500x300/1e1e1e/ff7d00?text=AI%20Image%20Generator"
        );
    }

    #[test]
    fn provided_image_wins_over_default() {
        let mut sub = submission("X", &[]);
        sub.image = Some("https://example.com/shot.png".to_string());
        assert_eq!(sub.image_or_default(), "https://example.com/shot.png");
    }

    #[test]
    fn omitted_required_fields_fail_validation() {
        // An absent githubLink deserializes as empty and is rejected like
        // an explicitly empty one.
        let sub: ProjectSubmission =
            serde_json::from_str(r#"{"name":"X","projectLink":"p","tags":[]}"#).unwrap();
        assert!(sub.validate().is_err());
    }

    #[test]
    fn missing_fields_deserialize_as_defaults() {
        // `tags` may be omitted entirely; optional fields come back None.
        let sub: ProjectSubmission = serde_json::from_str(
            r#"{"name":"X","githubLink":"g","projectLink":"p"}"#,
        )
        .unwrap();
        assert!(sub.tags.is_empty());
        assert!(sub.description.is_none());
        assert!(sub.image.is_none());
    }
}
