//! Category selection and the client-side product filter.

use core::str::FromStr;

use storefront_core::{CategoryId, DomainError};

use crate::product::Product;

/// Which category the product listing is narrowed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    /// No narrowing: every fetched product is listed.
    #[default]
    All,
    /// Only products whose `category_id` equals this id.
    Category(CategoryId),
}

impl CategorySelection {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Category(id) => product.category_id() == *id,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

impl From<CategoryId> for CategorySelection {
    fn from(value: CategoryId) -> Self {
        CategorySelection::Category(value)
    }
}

impl core::fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CategorySelection::All => f.write_str("all"),
            CategorySelection::Category(id) => core::fmt::Display::fmt(id, f),
        }
    }
}

/// Parses `all` (any case) or a category id.
impl FromStr for CategorySelection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategorySelection::All);
        }
        s.parse::<CategoryId>().map(CategorySelection::Category)
    }
}

/// Products visible under `selection`, in their original order.
pub fn filter_products<'a>(
    products: &'a [Product],
    selection: CategorySelection,
) -> Vec<&'a Product> {
    products.iter().filter(|p| selection.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    fn product(id: u64, category: u64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            1.0,
            CategoryId::new(category),
        )
        .unwrap()
    }

    fn sample() -> Vec<Product> {
        vec![product(1, 1), product(2, 1), product(3, 2), product(4, 2)]
    }

    #[test]
    fn all_keeps_every_product() {
        let products = sample();
        assert_eq!(filter_products(&products, CategorySelection::All).len(), 4);
    }

    #[test]
    fn category_keeps_only_its_products_in_order() {
        let products = sample();
        let visible = filter_products(&products, CategoryId::new(2).into());
        let ids: Vec<u64> = visible.iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let products = sample();
        assert!(filter_products(&products, CategoryId::new(99).into()).is_empty());
    }

    #[test]
    fn parses_all_and_ids() {
        assert_eq!("ALL".parse::<CategorySelection>().unwrap(), CategorySelection::All);
        assert_eq!(
            "5".parse::<CategorySelection>().unwrap(),
            CategorySelection::Category(CategoryId::new(5))
        );
        assert!("electronics".parse::<CategorySelection>().is_err());
    }

    #[test]
    fn default_is_all() {
        assert!(CategorySelection::default().is_all());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the filter keeps exactly the products of the selected category.
            #[test]
            fn filter_is_exact_subset(
                categories in proptest::collection::vec(0u64..5, 0..40),
                selected in 0u64..6,
            ) {
                let products: Vec<Product> = categories
                    .iter()
                    .enumerate()
                    .map(|(i, c)| product(i as u64, *c))
                    .collect();
                let selection = CategorySelection::Category(CategoryId::new(selected));

                let visible = filter_products(&products, selection);
                let expected = categories.iter().filter(|c| **c == selected).count();

                prop_assert_eq!(visible.len(), expected);
                prop_assert!(visible.iter().all(|p| p.category_id().get() == selected));
                prop_assert!(visible.windows(2).all(|w| w[0].id() < w[1].id()));
            }

            /// Property: per-category counts add up to the unfiltered count.
            #[test]
            fn categories_partition_all(categories in proptest::collection::vec(0u64..5, 0..40)) {
                let products: Vec<Product> = categories
                    .iter()
                    .enumerate()
                    .map(|(i, c)| product(i as u64, *c))
                    .collect();

                let total: usize = (0u64..5)
                    .map(|c| filter_products(&products, CategoryId::new(c).into()).len())
                    .sum();
                prop_assert_eq!(total, filter_products(&products, CategorySelection::All).len());
            }
        }
    }
}
