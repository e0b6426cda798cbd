use std::sync::Arc;

use folio_db::repositories::{MessageRepo, ProjectRepo};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The repositories
/// are created once per process and dropped with it. Server configuration is
/// consumed by the router builder and is not part of handler state.
#[derive(Clone, Default)]
pub struct AppState {
    /// Portfolio projects.
    pub projects: Arc<ProjectRepo>,
    /// Contact form inbox.
    pub messages: Arc<MessageRepo>,
}

impl AppState {
    /// Build state with empty repositories.
    pub fn new() -> Self {
        Self::default()
    }
}
