//! Cache key generators for consistent key naming.

use catalog_core::{Entity, Product, ProductCategory, ProductCategoryId, ProductId};

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "catalog:cache";

/// Generate the cache key for any entity by ID.
#[must_use]
pub fn entity_by_id<E: Entity>(id: E::Id) -> String {
    format!("{}:{}:id:{}", CACHE_PREFIX, E::RESOURCE, id)
}

/// Generate a cache key for a product by ID.
#[must_use]
pub fn product_by_id(id: ProductId) -> String {
    entity_by_id::<Product>(id)
}

/// Generate a cache key for a product category by ID.
#[must_use]
pub fn product_category_by_id(id: ProductCategoryId) -> String {
    entity_by_id::<ProductCategory>(id)
}
