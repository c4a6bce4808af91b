//! Static fallback records.
//!
//! Shown when every live data source fails, so the gallery grid is never
//! left empty.

use crate::model::Project;

const DEMO_IMAGE: &str =
    "https://es.unesco.org/youth/toptips/user/pages/images/home-feature-two_mobile.png";

/// The fixed example records used as the terminal fallback.
pub fn demo_projects() -> Vec<Project> {
    let entries: [(&str, &str, &str, &[&str]); 6] = [
        ("1", "AI Image Generator", "Generate images with AI", &["Generative AI", "ML"]),
        ("2", "Data Analytics Dashboard", "Interactive dashboard", &["Analytics"]),
        ("3", "AR Game Experience", "Augmented reality gaming", &["Games", "M&E"]),
        ("4", "ML Recommendation Engine", "ML recommendations", &["ML"]),
        ("5", "Video Processing App", "Media processing", &["Generative AI", "M&E"]),
        ("6", "Big Data Processing App", "Data processing", &["ML", "Analytics"]),
    ];

    entries
        .into_iter()
        .map(|(id, name, description, tags)| Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image: DEMO_IMAGE.to_string(),
            github_link: "https://github.com".to_string(),
            project_link: "https://google.com".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

/// Tags offered by the gallery's filter dropdown and create dialog.
pub const AVAILABLE_TAGS: [&str; 5] = ["Games", "M&E", "Analytics", "ML", "Generative AI"];
