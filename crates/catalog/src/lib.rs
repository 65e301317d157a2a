//! Catalog domain module.
//!
//! Categories, products and the client-side category filter, implemented purely
//! as deterministic logic (no IO, no HTTP, no rendering).

pub mod category;
pub mod product;
pub mod selection;

pub use category::Category;
pub use product::Product;
pub use selection::{CategorySelection, filter_products};
