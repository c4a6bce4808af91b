//! Handlers for the `/projects` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use orangeslice_core::project::ProjectSubmission;
use orangeslice_db::models::project::Project;
use orangeslice_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::{AppJson, AppResult};
use crate::state::AppState;

/// Query parameters for the read handler (`?category=`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

/// GET /projects
///
/// With `?category=`, returns every record whose category equals the
/// filter via the category index; without, returns the whole store.
/// Always a bare JSON array, unordered, unpaginated.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = match params.category.as_deref() {
        Some(category) => ProjectRepo::list_by_category(&state.pool, category).await?,
        None => ProjectRepo::list(&state.pool).await?,
    };
    Ok(Json(projects))
}

/// POST /projects
///
/// Validates the submission, assembles the complete record (identifier,
/// derived category, timestamp, defaults), and persists it with a single
/// unconditional insert.
pub async fn create(
    State(state): State<AppState>,
    AppJson(submission): AppJson<ProjectSubmission>,
) -> AppResult<(StatusCode, Json<Project>)> {
    submission.validate()?;

    let project = Project::from_submission(submission);
    ProjectRepo::insert(&state.pool, &project).await?;

    tracing::info!(id = %project.id, category = %project.category, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}
