//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /featured               -> list_featured
/// GET    /stats                  -> stats
/// GET    /health                 -> health
/// GET    /category/{category}    -> list_by_category
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/featured", get(project::list_featured))
        .route("/stats", get(project::stats))
        .route("/health", get(project::health))
        .route("/category/{category}", get(project::list_by_category))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
}
