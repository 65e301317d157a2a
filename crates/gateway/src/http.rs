//! HTTP access to the catalog service.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use storefront_catalog::{Category, Product};

use crate::{CatalogGateway, GatewayError, Resource};

/// Catalog gateway backed by `GET {api_url}/categories` and `GET {api_url}/products`.
#[derive(Debug, Clone)]
pub struct HttpCatalogGateway {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl HttpCatalogGateway {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::new(api_url)
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url_for(&self, resource: Resource) -> String {
        format!("{}/{}", self.api_url, resource.path())
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, GatewayError> {
        let url = self.url_for(resource);
        let mut req = self.client.get(&url);

        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        tracing::debug!(%url, "fetching catalog resource");

        let resp = req.send().await.map_err(|e| GatewayError::Network {
            resource,
            message: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::Api {
                resource,
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        resp.json().await.map_err(|e| GatewayError::Parse {
            resource,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.get_json(Resource::Categories).await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.get_json(Resource::Products).await
    }
}
