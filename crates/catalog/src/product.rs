use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, DomainError, DomainResult, ProductId};

/// A product as served by the catalog service.
///
/// Every product belongs to exactly one category via `category_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    category_id: CategoryId,
}

/// Product as it arrives on the wire, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: ProductId,
    name: String,
    #[serde(default)]
    price: f64,
    category_id: CategoryId,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.id, record.name, record.price, record.category_id)
    }
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        category_id: CategoryId,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "product price must be a non-negative number, got {price}"
            )));
        }
        Ok(Self {
            id,
            name,
            price,
            category_id,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_name() {
        let err = Product::new(ProductId::new(1), "", 1.0, CategoryId::new(1)).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn new_rejects_negative_price() {
        assert!(Product::new(ProductId::new(1), "Lamp", -3.0, CategoryId::new(1)).is_err());
        assert!(Product::new(ProductId::new(1), "Lamp", f64::NAN, CategoryId::new(1)).is_err());
    }

    #[test]
    fn decodes_camel_case_payload() {
        let product: Product = serde_json::from_str(
            r#"{"id": 10, "name": "Desk Lamp", "price": 24.5, "categoryId": 2}"#,
        )
        .unwrap();
        assert_eq!(product.id(), ProductId::new(10));
        assert_eq!(product.category_id(), CategoryId::new(2));
        assert_eq!(product.price(), 24.5);
    }

    #[test]
    fn missing_price_defaults_to_zero() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "name": "Mug", "categoryId": 1}"#).unwrap();
        assert_eq!(product.price(), 0.0);
    }

    #[test]
    fn decoding_rejects_blank_name_and_negative_price() {
        let blank = serde_json::from_str::<Product>(
            r#"{"id": 1, "name": "", "price": 5, "categoryId": 1}"#,
        );
        assert!(blank.is_err());

        let negative = serde_json::from_str::<Product>(
            r#"{"id": 1, "name": "Mug", "price": -3, "categoryId": 1}"#,
        );
        let err = negative.unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }
}
