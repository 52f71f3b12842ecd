//! `ProductDao` trait: low-level product data access.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, Product, ProductId};

/// Low-level product data access object.
#[async_trait]
pub trait ProductDao: Interface + Send + Sync {
    /// Finds a product by ID.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Inserts a product, ignoring its `id`, and returns the assigned ID.
    async fn insert(&self, product: &Product) -> CatalogResult<ProductId>;

    /// Overwrites the product with the same ID. `NotFound` if no row matched.
    async fn update(&self, product: &Product) -> CatalogResult<Product>;

    /// Deletes a product by ID. Returns `true` if deleted.
    async fn delete(&self, id: ProductId) -> CatalogResult<bool>;
}
