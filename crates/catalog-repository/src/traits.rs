//! Repository traits consumed by the service layer.

use async_trait::async_trait;
use catalog_core::{
    CatalogResult, Interface, Product, ProductCategory, ProductCategoryId, ProductId,
};

/// Product repository.
///
/// Lookups return `Ok(None)` when no product has the given id; the unset
/// id is never stored, so looking it up is always `Ok(None)`.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Finds a product by ID, consulting the cache first.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Stores a new product and returns its assigned ID.
    async fn insert(&self, product: &Product) -> CatalogResult<ProductId>;

    /// Replaces an existing product. Fails with `NotFound` if it does not exist.
    async fn update(&self, product: &Product) -> CatalogResult<Product>;

    /// Deletes a product by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: ProductId) -> CatalogResult<bool>;
}

/// Product category repository.
#[async_trait]
pub trait ProductCategoryRepository: Interface + Send + Sync {
    /// Finds a category by ID, consulting the cache first.
    async fn find_by_id(&self, id: ProductCategoryId) -> CatalogResult<Option<ProductCategory>>;

    /// Stores a new category and returns its assigned ID.
    async fn insert(&self, category: &ProductCategory) -> CatalogResult<ProductCategoryId>;

    /// Replaces an existing category. Fails with `NotFound` if it does not exist.
    async fn update(&self, category: &ProductCategory) -> CatalogResult<ProductCategory>;

    /// Deletes a category by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: ProductCategoryId) -> CatalogResult<bool>;
}
