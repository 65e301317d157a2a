//! `storefront-core` — shared building blocks for the storefront client.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId};
