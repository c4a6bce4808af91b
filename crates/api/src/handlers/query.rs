//! Handlers for the structured-query interface.
//!
//! Mirrors the plain-HTTP handlers with the structured surface's response
//! shape: `listProjects` wraps the records in an `{ "items": [...] }`
//! envelope, `createProject` takes the same submission body.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use orangeslice_core::project::ProjectSubmission;
use orangeslice_db::models::project::Project;
use orangeslice_db::repositories::ProjectRepo;

use crate::error::{AppJson, AppResult};
use crate::response::ItemsResponse;
use crate::state::AppState;

/// GET /query/listProjects
pub async fn list_projects(
    State(state): State<AppState>,
) -> AppResult<Json<ItemsResponse<Project>>> {
    let items = ProjectRepo::list(&state.pool).await?;
    Ok(Json(ItemsResponse { items }))
}

/// POST /query/createProject
pub async fn create_project(
    State(state): State<AppState>,
    AppJson(submission): AppJson<ProjectSubmission>,
) -> AppResult<(StatusCode, Json<Project>)> {
    submission.validate()?;

    let project = Project::from_submission(submission);
    ProjectRepo::insert(&state.pool, &project).await?;

    tracing::info!(id = %project.id, "Project created via structured query");

    Ok((StatusCode::CREATED, Json(project)))
}
