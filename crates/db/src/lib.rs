//! In-memory storage for portfolio projects and contact messages.
//!
//! State lives for the lifetime of the process; nothing is written to disk.

pub mod models;
pub mod repositories;
