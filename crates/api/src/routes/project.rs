//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /   -> list (optional ?category= filter)
/// POST /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(project::list).post(project::create))
}
