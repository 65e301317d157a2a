//! Framework-independent view model of the browse page.
//!
//! A UI layer maps these types onto widgets; [`BrowseView`]'s `Display` impl
//! is the plain-text rendering used by the binary and by text queries.

use core::fmt;

use storefront_catalog::{CategorySelection, Product};
use storefront_gateway::GatewayError;

/// Label of the selector option that clears the category filter.
pub const ALL_OPTION_LABEL: &str = "All";

const TABLE_HEADER: [&str; 2] = ["Name", "Price"];

/// A progress indicator labelled with what it waits for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingIndicator {
    label: String,
}

impl LoadingIndicator {
    pub(crate) fn new(resource: &str) -> Self {
        Self {
            label: format!("Loading {resource}"),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    label: String,
    value: CategorySelection,
}

impl SelectorOption {
    pub(crate) fn new(label: impl Into<String>, value: CategorySelection) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> CategorySelection {
        self.value
    }
}

/// The category selector: "All" first, then one option per category in fetch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    options: Vec<SelectorOption>,
    selected: CategorySelection,
}

impl Selector {
    pub(crate) fn new(options: Vec<SelectorOption>, selected: CategorySelection) -> Self {
        Self { options, selected }
    }

    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    pub fn selected(&self) -> CategorySelection {
        self.selected
    }

    pub fn option_labels(&self) -> Vec<&str> {
        self.options.iter().map(SelectorOption::label).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoriesPanel {
    Loading(LoadingIndicator),
    /// Category fetch failed: nothing is rendered, not even an error.
    Hidden,
    Selector(Selector),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorIndicator {
    message: String,
}

impl ErrorIndicator {
    /// Response bodies stay out of the message; they are logged instead.
    pub(crate) fn from_gateway(err: &GatewayError) -> Self {
        let reason = match err {
            GatewayError::Api { status, .. } => format!("HTTP {status}"),
            GatewayError::Network { .. } => "service unreachable".to_string(),
            GatewayError::Parse { .. } => "unexpected response".to_string(),
        };
        Self {
            message: format!("Error: could not load {} ({reason})", err.resource()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    name: String,
    price: String,
}

impl ProductRow {
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: format!("${:.2}", product.price()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTable {
    rows: Vec<ProductRow>,
}

impl ProductTable {
    pub(crate) fn new(rows: Vec<ProductRow>) -> Self {
        Self { rows }
    }

    pub fn header(&self) -> &'static [&'static str] {
        &TABLE_HEADER
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    /// Data rows, excluding the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductsPanel {
    Loading(LoadingIndicator),
    Error(ErrorIndicator),
    Table(ProductTable),
}

/// Snapshot of everything the browse page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView {
    pub categories: CategoriesPanel,
    pub products: ProductsPanel,
}

impl BrowseView {
    pub fn new(categories: CategoriesPanel, products: ProductsPanel) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Find a visible loading indicator whose label contains `needle` (case-insensitive).
    pub fn loading_indicator(&self, needle: &str) -> Option<&LoadingIndicator> {
        let needle = needle.to_lowercase();
        [
            match &self.categories {
                CategoriesPanel::Loading(indicator) => Some(indicator),
                _ => None,
            },
            match &self.products {
                ProductsPanel::Loading(indicator) => Some(indicator),
                _ => None,
            },
        ]
        .into_iter()
        .flatten()
        .find(|indicator| indicator.label.to_lowercase().contains(&needle))
    }

    pub fn selector(&self) -> Option<&Selector> {
        match &self.categories {
            CategoriesPanel::Selector(selector) => Some(selector),
            _ => None,
        }
    }

    /// Option labels of the selector; empty when no selector is rendered.
    pub fn option_labels(&self) -> Vec<&str> {
        self.selector()
            .map(Selector::option_labels)
            .unwrap_or_default()
    }

    pub fn error(&self) -> Option<&ErrorIndicator> {
        match &self.products {
            ProductsPanel::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&ProductTable> {
        match &self.products {
            ProductsPanel::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Whether the rendered text contains `needle`, ignoring case.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.to_string()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl fmt::Display for BrowseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.categories {
            CategoriesPanel::Loading(indicator) => writeln!(f, "{}...", indicator.label)?,
            CategoriesPanel::Hidden => {}
            CategoriesPanel::Selector(selector) => {
                let options: Vec<String> = selector
                    .options
                    .iter()
                    .map(|o| {
                        if o.value == selector.selected {
                            format!("[{}]", o.label)
                        } else {
                            o.label.clone()
                        }
                    })
                    .collect();
                writeln!(f, "Category: {}", options.join(" | "))?;
            }
        }

        match &self.products {
            ProductsPanel::Loading(indicator) => writeln!(f, "{}...", indicator.label),
            ProductsPanel::Error(error) => writeln!(f, "{}", error.message),
            ProductsPanel::Table(table) => {
                let width = table
                    .rows
                    .iter()
                    .map(|r| r.name.chars().count())
                    .chain(std::iter::once(TABLE_HEADER[0].len()))
                    .max()
                    .unwrap_or(0);
                writeln!(f, "{:<width$}  {}", TABLE_HEADER[0], TABLE_HEADER[1])?;
                for row in &table.rows {
                    writeln!(f, "{:<width$}  {}", row.name, row.price)?;
                }
                Ok(())
            }
        }
    }
}
