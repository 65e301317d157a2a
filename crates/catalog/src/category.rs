use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, DomainError, DomainResult};

/// A product category as served by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CategoryRecord")]
pub struct Category {
    id: CategoryId,
    name: String,
}

/// Category as it arrives on the wire, before validation.
#[derive(Deserialize)]
struct CategoryRecord {
    id: CategoryId,
    name: String,
}

impl TryFrom<CategoryRecord> for Category {
    type Error = DomainError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        Category::new(record.id, record.name)
    }
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_name() {
        let err = Category::new(CategoryId::new(1), "   ").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn decodes_service_payload() {
        let category: Category =
            serde_json::from_str(r#"{"id": 4, "name": "Electronics"}"#).unwrap();
        assert_eq!(category.id(), CategoryId::new(4));
        assert_eq!(category.name(), "Electronics");
    }

    #[test]
    fn decoding_rejects_blank_name() {
        let res = serde_json::from_str::<Category>(r#"{"id": 1, "name": "   "}"#);
        let err = res.unwrap_err();
        assert!(err.to_string().contains("category name cannot be empty"));
    }
}
