//! Domain rules shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O: it only knows what a valid project or
//! contact message looks like and how failures are classified.

pub mod contact;
pub mod error;
pub mod project;
pub mod types;
