//! `stowage-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;

pub use error::{DomainError, DomainResult};
