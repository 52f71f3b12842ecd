//! Product category entity.

use crate::{Entity, ProductCategoryId};
use serde::{Deserialize, Serialize};

/// A named grouping of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: ProductCategoryId,
    pub name: String,
}

impl ProductCategory {
    /// Creates a category that has not been stored yet.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: ProductCategoryId::UNSET,
            name,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: ProductCategoryId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for ProductCategory {
    type Id = ProductCategoryId;

    const RESOURCE: &'static str = "product_category";
    const NAME: &'static str = "ProductCategory";

    fn id(&self) -> ProductCategoryId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = ProductCategory::new("Tools".to_string());
        assert!(category.id.is_unset());

        let stored = category.with_id(ProductCategoryId::new(3));
        assert!(!stored.id.is_unset());
        assert_eq!(stored.id(), ProductCategoryId::new(3));
    }

    #[test]
    fn test_json_round_trip() {
        let category = ProductCategory::new("Tools".to_string()).with_id(ProductCategoryId::new(3));
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Tools"}"#);
    }
}
