pub mod health;
pub mod project;
pub mod query;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /health                 service + db health
///
/// GET  /projects               list (optional ?category= filter)
/// POST /projects               create
///
/// GET  /query/listProjects     list, items wrapper
/// POST /query/createProject    create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router())
        .nest("/query", query::router())
}
