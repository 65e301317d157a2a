//! `storefront-gateway`
//!
//! **Responsibility:** read-only access to the catalog service.
//!
//! This crate provides:
//! - the [`CatalogGateway`] seam the browse page fetches through
//! - an HTTP implementation over `reqwest`
//! - an in-memory fake with latency and failure injection, for tests and demos

pub mod error;
pub mod fake;
pub mod http;

use async_trait::async_trait;
use storefront_catalog::{Category, Product};

pub use error::{GatewayError, Resource};
pub use fake::{FakeBehavior, FakeCatalogGateway};
pub use http::HttpCatalogGateway;

/// Async read interface to the catalog service.
///
/// The two fetches are independent: an implementation must not make one wait
/// on the other. A failed fetch is terminal; callers do not retry.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch every category, in service order.
    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError>;

    /// Fetch every product, in service order.
    async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError>;
}
