//! Route definitions for the structured-query interface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::query;
use crate::state::AppState;

/// Routes mounted at `/query`.
///
/// ```text
/// GET  /listProjects    -> list, items wrapper
/// POST /createProject   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/listProjects", get(query::list_projects))
        .route("/createProject", post(query::create_project))
}
