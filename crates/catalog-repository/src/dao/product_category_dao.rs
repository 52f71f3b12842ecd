//! `ProductCategoryDao` trait: low-level category data access.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, ProductCategory, ProductCategoryId};

/// Low-level product category data access object.
#[async_trait]
pub trait ProductCategoryDao: Interface + Send + Sync {
    async fn find_by_id(&self, id: ProductCategoryId) -> CatalogResult<Option<ProductCategory>>;

    async fn insert(&self, category: &ProductCategory) -> CatalogResult<ProductCategoryId>;

    /// `NotFound` if no row matched.
    async fn update(&self, category: &ProductCategory) -> CatalogResult<ProductCategory>;

    async fn delete(&self, id: ProductCategoryId) -> CatalogResult<bool>;
}
