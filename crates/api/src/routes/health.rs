use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Service banner, mounted at the root (NOT under `/api/v1`).
///
/// ```text
/// GET /   -> home
/// ```
pub fn root_router() -> Router<AppState> {
    Router::new().route("/", get(health::home))
}

/// Liveness probe under `/api/v1`.
///
/// ```text
/// GET /health   -> health_check
/// ```
pub fn api_router() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
