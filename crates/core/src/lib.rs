//! `labkit-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no locking).

pub mod error;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use money::Dollars;
