//! In-memory catalog gateway with injectable latency and failures.
//!
//! Stands in for the catalog service in tests: seed it, pick a behavior per
//! resource, hand it to the browse page.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use storefront_catalog::{Category, Product};
use storefront_core::{CategoryId, DomainResult, ProductId};

use crate::{CatalogGateway, GatewayError, Resource};

/// How a fake fetch resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FakeBehavior {
    /// Resolve immediately with the seeded data.
    #[default]
    Respond,
    /// Resolve with the seeded data after the given delay.
    Delay(Duration),
    /// Never resolve.
    Hang,
    /// Reject with an API error carrying this status.
    Fail(u16),
}

#[derive(Debug, Default)]
pub struct FakeCatalogGateway {
    categories: Vec<Category>,
    products: Vec<Product>,
    next_category_id: u64,
    next_product_id: u64,
    categories_behavior: FakeBehavior,
    products_behavior: FakeBehavior,
    categories_calls: AtomicUsize,
    products_calls: AtomicUsize,
}

impl FakeCatalogGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with the next sequential id.
    pub fn seed_category(&mut self, name: impl Into<String>) -> DomainResult<Category> {
        self.next_category_id += 1;
        let category = Category::new(CategoryId::new(self.next_category_id), name)?;
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Add a product in `category` with the next sequential id.
    pub fn seed_product(
        &mut self,
        name: impl Into<String>,
        price: f64,
        category: CategoryId,
    ) -> DomainResult<Product> {
        self.next_product_id += 1;
        let product = Product::new(ProductId::new(self.next_product_id), name, price, category)?;
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn set_behavior(&mut self, resource: Resource, behavior: FakeBehavior) {
        match resource {
            Resource::Categories => self.categories_behavior = behavior,
            Resource::Products => self.products_behavior = behavior,
        }
    }

    pub fn with_behavior(mut self, resource: Resource, behavior: FakeBehavior) -> Self {
        self.set_behavior(resource, behavior);
        self
    }

    /// Number of fetches issued against `resource` so far.
    pub fn calls(&self, resource: Resource) -> usize {
        match resource {
            Resource::Categories => self.categories_calls.load(Ordering::SeqCst),
            Resource::Products => self.products_calls.load(Ordering::SeqCst),
        }
    }

    async fn resolve<T: Clone>(
        &self,
        resource: Resource,
        behavior: FakeBehavior,
        data: &[T],
    ) -> Result<Vec<T>, GatewayError> {
        match behavior {
            FakeBehavior::Respond => {}
            FakeBehavior::Delay(delay) => tokio::time::sleep(delay).await,
            FakeBehavior::Hang => std::future::pending::<()>().await,
            FakeBehavior::Fail(status) => {
                return Err(GatewayError::Api {
                    resource,
                    status,
                    body: format!("simulated failure for /{}", resource.path()),
                });
            }
        }
        Ok(data.to_vec())
    }
}

#[async_trait]
impl CatalogGateway for FakeCatalogGateway {
    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.categories_calls.fetch_add(1, Ordering::SeqCst);
        self.resolve(Resource::Categories, self.categories_behavior, &self.categories)
            .await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.products_calls.fetch_add(1, Ordering::SeqCst);
        self.resolve(Resource::Products, self.products_behavior, &self.products)
            .await
    }
}
