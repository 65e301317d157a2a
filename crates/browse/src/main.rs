//! `storefront-browse`: fetch the catalog and print the browse page.

use std::sync::Arc;

use anyhow::Context;
use storefront_browse::{BrowseConfig, BrowseSession};
use storefront_gateway::{CatalogGateway, HttpCatalogGateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BrowseConfig::from_env().context("invalid storefront configuration")?;

    storefront_observability::init(config.log_format);

    let gateway: Arc<dyn CatalogGateway> = match &config.auth_token {
        Some(token) => {
            tracing::info!(api_url = %config.api_url, "using authenticated catalog gateway");
            Arc::new(HttpCatalogGateway::with_token(config.api_url.clone(), token.clone()))
        }
        None => {
            tracing::info!(api_url = %config.api_url, "using anonymous catalog gateway");
            Arc::new(HttpCatalogGateway::new(config.api_url.clone()))
        }
    };

    let mut session = BrowseSession::mount(gateway);
    session.settle().await;

    if !config.initial_selection.is_all() {
        // Fetch failures are part of the rendered page, not process errors.
        if let Err(err) = session.select(config.initial_selection) {
            tracing::warn!(
                error = %err,
                selection = %config.initial_selection,
                "initial selection not applied"
            );
        }
    }

    print!("{}", session.view());
    Ok(())
}
