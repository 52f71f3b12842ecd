//! Product entity.

use crate::{Entity, ProductCategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// A sellable item belonging to a product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier; `ProductId::UNSET` until inserted.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Unit price.
    pub price: f64,

    /// Units on hand.
    pub stock: i32,

    /// Owning category.
    pub category_id: ProductCategoryId,
}

impl Product {
    /// Creates a product that has not been stored yet.
    #[must_use]
    pub fn new(
        name: String,
        description: String,
        price: f64,
        stock: i32,
        category_id: ProductCategoryId,
    ) -> Self {
        Self {
            id: ProductId::UNSET,
            name,
            description,
            price,
            stock,
            category_id,
        }
    }

    /// Returns a copy carrying the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Product {
    type Id = ProductId;

    const RESOURCE: &'static str = "product";
    const NAME: &'static str = "Product";

    fn id(&self) -> ProductId {
        self.id
    }
}
