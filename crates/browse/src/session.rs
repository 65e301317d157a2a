//! Drives the two catalog fetches for a mounted browse page.
//!
//! Both fetches are polled concurrently from the caller's task; whichever
//! finishes first is applied first. Between outcomes the caller is free to read
//! the view or change the selection, which is how loading indicators are observed.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;

use storefront_catalog::CategorySelection;
use storefront_gateway::{CatalogGateway, Resource};

use crate::controller::{BrowseController, FetchOutcome};
use crate::error::BrowseError;
use crate::view::BrowseView;

pub struct BrowseSession {
    controller: BrowseController,
    pending: FuturesUnordered<BoxFuture<'static, FetchOutcome>>,
}

impl BrowseSession {
    /// Mount the page: both resources start loading.
    pub fn mount(gateway: Arc<dyn CatalogGateway>) -> Self {
        tracing::info!("mounting browse page");

        let pending = FuturesUnordered::new();

        let categories_gateway = Arc::clone(&gateway);
        pending.push(
            async move { FetchOutcome::Categories(categories_gateway.fetch_categories().await) }
                .boxed(),
        );
        pending.push(async move { FetchOutcome::Products(gateway.fetch_products().await) }.boxed());

        Self {
            controller: BrowseController::new(),
            pending,
        }
    }

    /// Wait for the next fetch to resolve and apply it.
    ///
    /// Returns the resource that resolved, or `None` once both have. Stays
    /// pending for as long as an outstanding fetch does. Cancel-safe: dropping
    /// the returned future keeps the outstanding fetches in the session.
    pub async fn next_outcome(&mut self) -> Option<Resource> {
        let outcome = self.pending.next().await?;
        let resource = outcome.resource();
        self.controller.apply(outcome);
        Some(resource)
    }

    /// Drive until both fetches have resolved.
    pub async fn settle(&mut self) {
        while self.next_outcome().await.is_some() {}
    }

    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn controller(&self) -> &BrowseController {
        &self.controller
    }

    pub fn view(&self) -> BrowseView {
        self.controller.view()
    }

    pub fn select(&mut self, selection: CategorySelection) -> Result<(), BrowseError> {
        self.controller.select(selection)
    }

    pub fn select_option(&mut self, label: &str) -> Result<(), BrowseError> {
        self.controller.select_option(label)
    }
}
