//! Service banner, liveness probes and the unknown-route fallback.

use axum::Json;
use serde::Serialize;

use crate::error::AppError;

/// Version reported by every probe.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root banner payload.
#[derive(Serialize)]
pub struct HomeResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// Liveness payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Per-resource liveness payload.
#[derive(Serialize)]
pub struct ServiceHealth {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Stored message count (contact service only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<usize>,
}

impl ServiceHealth {
    pub fn healthy(service: &'static str) -> Self {
        Self {
            status: "healthy",
            service,
            version: API_VERSION,
            messages: None,
        }
    }
}

/// GET /
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        status: "ok",
        message: "Backend funcionando correctamente",
        version: API_VERSION,
    })
}

/// GET /api/v1/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Backend is running!",
    })
}

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
