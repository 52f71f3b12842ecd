//! `ProductCategoryRepositoryImpl`: read-through cached category repository.

use super::read_through::ReadThrough;
use crate::{
    cache::{CacheInterface, DEFAULT_TTL},
    dao::ProductCategoryDao,
    traits::ProductCategoryRepository,
};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, ProductCategory, ProductCategoryId};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Product category repository coordinating [`ProductCategoryDao`] with a cache.
#[derive(Component)]
#[shaku(interface = ProductCategoryRepository)]
pub struct ProductCategoryRepositoryImpl {
    #[shaku(inject)]
    category_dao: Arc<dyn ProductCategoryDao>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(default = DEFAULT_TTL)]
    ttl: Duration,
}

impl ProductCategoryRepositoryImpl {
    #[must_use]
    pub fn new(
        category_dao: Arc<dyn ProductCategoryDao>,
        cache: Arc<dyn CacheInterface>,
        ttl: Duration,
    ) -> Self {
        Self {
            category_dao,
            cache,
            ttl,
        }
    }

    fn read_through(&self) -> ReadThrough<'_> {
        ReadThrough::new(self.cache.as_ref(), self.ttl)
    }
}

#[async_trait]
impl ProductCategoryRepository for ProductCategoryRepositoryImpl {
    async fn find_by_id(&self, id: ProductCategoryId) -> CatalogResult<Option<ProductCategory>> {
        debug!("Repository: find_by_id product_category {}", id);
        if id.is_unset() {
            return Ok(None);
        }

        self.read_through()
            .find(id, || self.category_dao.find_by_id(id))
            .await
    }

    async fn insert(&self, category: &ProductCategory) -> CatalogResult<ProductCategoryId> {
        debug!("Repository: insert product_category {}", category.name);
        self.category_dao.insert(category).await
    }

    async fn update(&self, category: &ProductCategory) -> CatalogResult<ProductCategory> {
        debug!("Repository: update product_category {}", category.id);
        if category.id.is_unset() {
            return Err(CatalogError::validation(
                "product category id is required for update",
            ));
        }

        let updated = self.category_dao.update(category).await?;
        self.read_through()
            .evict::<ProductCategory>(category.id)
            .await;
        Ok(updated)
    }

    async fn delete(&self, id: ProductCategoryId) -> CatalogResult<bool> {
        debug!("Repository: delete product_category {}", id);
        if id.is_unset() {
            return Ok(false);
        }

        let deleted = self.category_dao.delete(id).await?;
        self.read_through().evict::<ProductCategory>(id).await;
        Ok(deleted)
    }
}

impl std::fmt::Debug for ProductCategoryRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCategoryRepositoryImpl")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
