//! `PgProductDao`: [`ProductDao`] backed by PostgreSQL.

use crate::{dao::ProductDao, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, Entity, Product, ProductCategoryId, ProductId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL product DAO.
#[derive(Component, Clone)]
#[shaku(interface = ProductDao)]
pub struct PgProductDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgProductDao {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    stock: i32,
    category_id: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            category_id: ProductCategoryId::new(row.category_id),
        }
    }
}

#[async_trait]
impl ProductDao for PgProductDao {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, stock, category_id
            FROM product
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn insert(&self, product: &Product) -> CatalogResult<ProductId> {
        debug!("Inserting product: {}", product.name);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO product (name, description, price, stock, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id.into_inner())
        .fetch_one(self.pool.inner())
        .await?;

        Ok(ProductId::new(id))
    }

    async fn update(&self, product: &Product) -> CatalogResult<Product> {
        debug!("Updating product: {}", product.id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE product
            SET name = $2, description = $3, price = $4, stock = $5, category_id = $6
            WHERE id = $1
            RETURNING id, name, description, price, stock, category_id
            "#,
        )
        .bind(product.id.into_inner())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Product::from)
            .ok_or_else(|| CatalogError::not_found(Product::NAME, product.id))
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PgProductDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgProductDao").finish_non_exhaustive()
    }
}
