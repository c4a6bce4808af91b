//! Gallery view state.
//!
//! An explicit state struct owned by the UI layer; rendering and event
//! handlers take it by reference. Every mutation re-runs the filter
//! synchronously so `filtered` always reflects the current term, tag
//! selection, and record list.

use crate::filter::filter_projects;
use crate::model::Project;

/// State behind the gallery grid and its filter controls.
#[derive(Debug, Default)]
pub struct GalleryState {
    projects: Vec<Project>,
    filtered: Vec<Project>,
    search_term: String,
    selected_tags: Vec<String>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The records currently visible in the grid.
    pub fn filtered(&self) -> &[Project] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    /// Replace the underlying record list (after a fetch or a submit).
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.refilter();
    }

    /// Append a record locally (submit fallback path).
    pub fn push_project(&mut self, project: Project) {
        self.projects.push(project);
        self.refilter();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    /// Add a tag to the selection. Selecting an already-selected tag is a
    /// no-op.
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.selected_tags.contains(&tag) {
            self.selected_tags.push(tag);
            self.refilter();
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.selected_tags.retain(|t| t != tag);
        self.refilter();
    }

    /// Clear the search term and tag selection.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.selected_tags.clear();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_projects(&self.projects, &self.search_term, &self.selected_tags)
            .into_iter()
            .cloned()
            .collect();
    }
}
