pub mod contact;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                              liveness
///
/// /projects                            list (?category=, ?featured=true), create
/// /projects/{id}                       get, update, delete
/// /projects/category/{category}        list by category
/// /projects/featured                   list featured
/// /projects/stats                      totals per category
/// /projects/health                     service liveness
///
/// /contact/send                        submit contact form (POST)
/// /contact/messages                    list (?read=true|false)
/// /contact/messages/{id}               get (marks read), delete
/// /contact/messages/{id}/read          mark read (PUT)
/// /contact/stats                       read/unread counters
/// /contact/health                      service liveness
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::api_router())
        .nest("/projects", project::router())
        .nest("/contact", contact::router())
}
