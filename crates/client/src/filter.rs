//! Client-side project filtering.
//!
//! Two independent filters, applied conjunctively when both are active:
//!
//! - free-text: case-insensitive substring match on the name field only
//! - tags: a record passes if it carries at least one selected tag (OR)
//!
//! Recomputed synchronously on every change; no debouncing, no server
//! round-trip.

use crate::model::Project;

/// Filter `projects` by a search term and a set of selected tags.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    search_term: &str,
    selected_tags: &[String],
) -> Vec<&'a Project> {
    let term = search_term.to_lowercase();

    projects
        .iter()
        .filter(|project| term.is_empty() || project.name.to_lowercase().contains(&term))
        .filter(|project| {
            selected_tags.is_empty() || selected_tags.iter().any(|tag| project.tags.contains(tag))
        })
        .collect()
}
