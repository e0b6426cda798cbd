//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `folio_db`, wrap results in the
//! [`Envelope`](crate::response::Envelope) and map failures via
//! [`AppError`](crate::error::AppError).

pub mod contact;
pub mod health;
pub mod project;
