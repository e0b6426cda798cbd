//! Repository layer.
//!
//! Each repository owns one in-memory collection plus its ID counter behind
//! a single `RwLock`, and is shared across handlers through an `Arc`.

pub mod message_repo;
pub mod project_repo;

pub use message_repo::MessageRepo;
pub use project_repo::ProjectRepo;
