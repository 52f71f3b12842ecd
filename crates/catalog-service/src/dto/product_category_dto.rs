//! Product category DTOs.

use catalog_core::ProductCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new product category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

/// Partial update of a product category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
}

impl UpdateProductCategoryRequest {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    pub fn apply_to(self, category: &mut ProductCategory) {
        if let Some(name) = self.name {
            category.name = name;
        }
    }
}

/// Product category response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductCategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<ProductCategory> for ProductCategoryResponse {
    fn from(category: ProductCategory) -> Self {
        Self {
            id: category.id.into_inner(),
            name: category.name,
        }
    }
}
