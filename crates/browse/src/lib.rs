//! `storefront-browse`
//!
//! **Responsibility:** the product browsing page, minus the UI framework.
//!
//! This crate provides:
//! - per-resource fetch state and category selection ([`BrowseController`])
//! - concurrent fetch driving on a single task ([`BrowseSession`])
//! - a framework-independent view model with a plain-text rendering ([`BrowseView`])
//! - environment configuration for the `storefront-browse` binary
//!
//! Category fetch failures degrade the page silently (no selector); product
//! fetch failures are surfaced as a visible error.

pub mod config;
pub mod controller;
pub mod error;
pub mod session;
pub mod view;

pub use config::{BrowseConfig, ConfigError};
pub use controller::{BrowseController, FetchOutcome, FetchState};
pub use error::BrowseError;
pub use session::BrowseSession;
pub use view::{
    ALL_OPTION_LABEL, BrowseView, CategoriesPanel, ErrorIndicator, LoadingIndicator, ProductRow,
    ProductTable, ProductsPanel, Selector, SelectorOption,
};
