//! Browse page state: one fetch state per resource plus the category selection.

use storefront_catalog::{Category, CategorySelection, Product, filter_products};
use storefront_gateway::{GatewayError, Resource};

use crate::error::BrowseError;
use crate::view::{
    ALL_OPTION_LABEL, BrowseView, CategoriesPanel, ErrorIndicator, LoadingIndicator, ProductRow,
    ProductTable, ProductsPanel, Selector, SelectorOption,
};

/// Lifecycle of one asynchronous read.
///
/// `Loaded` and `Failed` are terminal for the session.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(GatewayError),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Completion of one of the two fetches.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Categories(Result<Vec<Category>, GatewayError>),
    Products(Result<Vec<Product>, GatewayError>),
}

impl FetchOutcome {
    pub fn resource(&self) -> Resource {
        match self {
            FetchOutcome::Categories(_) => Resource::Categories,
            FetchOutcome::Products(_) => Resource::Products,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowseController {
    categories: FetchState<Vec<Category>>,
    products: FetchState<Vec<Product>>,
    selection: CategorySelection,
}

impl Default for BrowseController {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseController {
    /// A freshly mounted page: both resources loading, every category shown.
    pub fn new() -> Self {
        Self {
            categories: FetchState::Loading,
            products: FetchState::Loading,
            selection: CategorySelection::All,
        }
    }

    pub fn categories(&self) -> &FetchState<Vec<Category>> {
        &self.categories
    }

    pub fn products(&self) -> &FetchState<Vec<Product>> {
        &self.products
    }

    pub fn selection(&self) -> CategorySelection {
        self.selection
    }

    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Categories(result) => self.categories_resolved(result),
            FetchOutcome::Products(result) => self.products_resolved(result),
        }
    }

    pub fn categories_resolved(&mut self, result: Result<Vec<Category>, GatewayError>) {
        if !self.categories.is_loading() {
            tracing::debug!("ignoring categories outcome; fetch already resolved");
            return;
        }

        self.categories = match result {
            Ok(categories) => {
                tracing::info!(count = categories.len(), "categories loaded");
                FetchState::Loaded(categories)
            }
            Err(err) => {
                // Not surfaced to the user: the page just renders without a selector.
                tracing::warn!(error = %err, "category fetch failed; hiding selector");
                FetchState::Failed(err)
            }
        };
    }

    pub fn products_resolved(&mut self, result: Result<Vec<Product>, GatewayError>) {
        if !self.products.is_loading() {
            tracing::debug!("ignoring products outcome; fetch already resolved");
            return;
        }

        self.products = match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "products loaded");
                FetchState::Loaded(products)
            }
            Err(err) => {
                tracing::warn!(error = %err, "product fetch failed");
                FetchState::Failed(err)
            }
        };
    }

    /// Narrow the listing. Only possible once the selector is rendered.
    ///
    /// Filtering happens against the products already fetched; nothing is refetched.
    pub fn select(&mut self, selection: CategorySelection) -> Result<(), BrowseError> {
        if self.categories.loaded().is_none() {
            return Err(BrowseError::SelectorUnavailable);
        }
        tracing::debug!(%selection, "category selected");
        self.selection = selection;
        Ok(())
    }

    /// Select by option label, the way a user picks an entry from the selector.
    pub fn select_option(&mut self, label: &str) -> Result<(), BrowseError> {
        let categories = self
            .categories
            .loaded()
            .ok_or(BrowseError::SelectorUnavailable)?;

        // Exact labels win, so a category literally named "all" stays reachable.
        let selection = if label == ALL_OPTION_LABEL {
            CategorySelection::All
        } else if let Some(category) = categories.iter().find(|c| c.name() == label) {
            CategorySelection::Category(category.id())
        } else if label.eq_ignore_ascii_case(ALL_OPTION_LABEL) {
            CategorySelection::All
        } else {
            return Err(BrowseError::UnknownOption(label.to_string()));
        };

        self.select(selection)
    }

    /// Products passing the current selection; empty until products are loaded.
    pub fn visible_products(&self) -> Vec<&Product> {
        match &self.products {
            FetchState::Loaded(products) => filter_products(products, self.selection),
            _ => Vec::new(),
        }
    }

    pub fn view(&self) -> BrowseView {
        let categories = match &self.categories {
            FetchState::Loading => CategoriesPanel::Loading(LoadingIndicator::new("categories")),
            FetchState::Failed(_) => CategoriesPanel::Hidden,
            FetchState::Loaded(categories) => {
                let mut options = Vec::with_capacity(categories.len() + 1);
                options.push(SelectorOption::new(ALL_OPTION_LABEL, CategorySelection::All));
                options.extend(categories.iter().map(|c| {
                    SelectorOption::new(c.name(), CategorySelection::Category(c.id()))
                }));
                CategoriesPanel::Selector(Selector::new(options, self.selection))
            }
        };

        let products = match &self.products {
            FetchState::Loading => ProductsPanel::Loading(LoadingIndicator::new("products")),
            FetchState::Failed(err) => ProductsPanel::Error(ErrorIndicator::from_gateway(err)),
            FetchState::Loaded(_) => ProductsPanel::Table(ProductTable::new(
                self.visible_products()
                    .into_iter()
                    .map(ProductRow::from_product)
                    .collect(),
            )),
        };

        BrowseView::new(categories, products)
    }
}
