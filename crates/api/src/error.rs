use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::response::Envelope;

/// Message returned for every 500 response. Details stay in the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Message returned for unknown routes and unparseable ids.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Endpoint no encontrado";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    (StatusCode::NOT_FOUND, not_found_message(entity, id), None)
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
                CoreError::InvalidEntity { entity, errors } => (
                    StatusCode::BAD_REQUEST,
                    invalid_entity_message(entity),
                    Some(errors),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_ERROR_MESSAGE.to_string(),
                        None,
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                ROUTE_NOT_FOUND_MESSAGE.to_string(),
                None,
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                    None,
                )
            }
        };

        (status, axum::Json(Envelope::error(message, errors))).into_response()
    }
}

fn not_found_message(entity: &str, id: DbId) -> String {
    match entity {
        "Project" => format!("Proyecto con ID {id} no encontrado"),
        "Message" => format!("Mensaje {id} no encontrado"),
        other => format!("{other} {id} no encontrado"),
    }
}

fn invalid_entity_message(entity: &str) -> String {
    match entity {
        "Project" => "Error al validar los datos del proyecto".to_string(),
        other => format!("Error al validar los datos de {other}"),
    }
}
