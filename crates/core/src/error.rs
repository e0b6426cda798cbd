use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A request-shape check failed. Carries the first violation only.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity-level validation failed. Carries every violation found.
    #[error("Invalid {entity}: {}", errors.join("; "))]
    InvalidEntity {
        entity: &'static str,
        errors: Vec<String>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
