//! `PgProductCategoryDao`: [`ProductCategoryDao`] backed by PostgreSQL.

use crate::{dao::ProductCategoryDao, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, Entity, ProductCategory, ProductCategoryId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL product category DAO.
#[derive(Component, Clone)]
#[shaku(interface = ProductCategoryDao)]
pub struct PgProductCategoryDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgProductCategoryDao {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductCategoryRow {
    id: i32,
    name: String,
}

impl From<ProductCategoryRow> for ProductCategory {
    fn from(row: ProductCategoryRow) -> Self {
        Self {
            id: ProductCategoryId::new(row.id),
            name: row.name,
        }
    }
}

#[async_trait]
impl ProductCategoryDao for PgProductCategoryDao {
    async fn find_by_id(&self, id: ProductCategoryId) -> CatalogResult<Option<ProductCategory>> {
        debug!("Finding product category by id: {}", id);

        let row = sqlx::query_as::<_, ProductCategoryRow>(
            "SELECT id, name FROM product_category WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(ProductCategory::from))
    }

    async fn insert(&self, category: &ProductCategory) -> CatalogResult<ProductCategoryId> {
        debug!("Inserting product category: {}", category.name);

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO product_category (name) VALUES ($1) RETURNING id",
        )
        .bind(&category.name)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(ProductCategoryId::new(id))
    }

    async fn update(&self, category: &ProductCategory) -> CatalogResult<ProductCategory> {
        debug!("Updating product category: {}", category.id);

        let row = sqlx::query_as::<_, ProductCategoryRow>(
            "UPDATE product_category SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(ProductCategory::from)
            .ok_or_else(|| CatalogError::not_found(ProductCategory::NAME, category.id))
    }

    async fn delete(&self, id: ProductCategoryId) -> CatalogResult<bool> {
        debug!("Deleting product category: {}", id);

        let result = sqlx::query("DELETE FROM product_category WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PgProductCategoryDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgProductCategoryDao").finish_non_exhaustive()
    }
}
