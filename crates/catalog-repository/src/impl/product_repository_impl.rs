//! `ProductRepositoryImpl`: read-through cached product repository.
//!
//! ```text
//! Service
//!   ↓ Arc<dyn ProductRepository>
//! ProductRepositoryImpl        ← cache first on reads, evict on writes
//!   ↓ Arc<dyn ProductDao>        Arc<dyn CacheInterface>
//! PgProductDao                 RedisCacheService / MemoryCacheService
//! ```

use super::read_through::ReadThrough;
use crate::{
    cache::{CacheInterface, DEFAULT_TTL},
    dao::ProductDao,
    traits::ProductRepository,
};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, Product, ProductId};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Product repository coordinating [`ProductDao`] with a cache.
#[derive(Component)]
#[shaku(interface = ProductRepository)]
pub struct ProductRepositoryImpl {
    #[shaku(inject)]
    product_dao: Arc<dyn ProductDao>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    /// Lifetime of entries written by lookups.
    #[shaku(default = DEFAULT_TTL)]
    ttl: Duration,
}

impl ProductRepositoryImpl {
    #[must_use]
    pub fn new(
        product_dao: Arc<dyn ProductDao>,
        cache: Arc<dyn CacheInterface>,
        ttl: Duration,
    ) -> Self {
        Self {
            product_dao,
            cache,
            ttl,
        }
    }

    fn read_through(&self) -> ReadThrough<'_> {
        ReadThrough::new(self.cache.as_ref(), self.ttl)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Repository: find_by_id product {}", id);
        if id.is_unset() {
            return Ok(None);
        }

        self.read_through()
            .find(id, || self.product_dao.find_by_id(id))
            .await
    }

    async fn insert(&self, product: &Product) -> CatalogResult<ProductId> {
        debug!("Repository: insert product {}", product.name);
        self.product_dao.insert(product).await
    }

    async fn update(&self, product: &Product) -> CatalogResult<Product> {
        debug!("Repository: update product {}", product.id);
        if product.id.is_unset() {
            return Err(CatalogError::validation("product id is required for update"));
        }

        let updated = self.product_dao.update(product).await?;
        self.read_through().evict::<Product>(product.id).await;
        Ok(updated)
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        debug!("Repository: delete product {}", id);
        if id.is_unset() {
            return Ok(false);
        }

        let deleted = self.product_dao.delete(id).await?;
        self.read_through().evict::<Product>(id).await;
        Ok(deleted)
    }
}

impl std::fmt::Debug for ProductRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductRepositoryImpl")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
