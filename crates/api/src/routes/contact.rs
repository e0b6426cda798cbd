//! Route definitions for the `/contact` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST   /send                   -> send
/// GET    /messages               -> list_messages
/// GET    /messages/{id}          -> get_message
/// DELETE /messages/{id}          -> delete_message
/// PUT    /messages/{id}/read     -> mark_read
/// GET    /stats                  -> stats
/// GET    /health                 -> health
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send", post(contact::send))
        .route("/messages", get(contact::list_messages))
        .route(
            "/messages/{id}",
            get(contact::get_message).delete(contact::delete_message),
        )
        .route("/messages/{id}/read", put(contact::mark_read))
        .route("/stats", get(contact::stats))
        .route("/health", get(contact::health))
}
