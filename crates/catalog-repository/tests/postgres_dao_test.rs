//! Integration tests for the PostgreSQL DAOs and the cached repositories
//! on top of them.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use catalog_core::{CatalogError, Product, ProductCategory, ProductCategoryId, ProductId};
use catalog_repository::{
    DatabasePoolInterface, MemoryCacheService, PgProductCategoryDao, PgProductDao,
    ProductCategoryDao, ProductDao, ProductRepository, ProductRepositoryImpl, DEFAULT_TTL,
};
use common::TestDatabase;
use std::sync::Arc;

async fn seed_category(dao: &PgProductCategoryDao, name: &str) -> ProductCategoryId {
    dao.insert(&ProductCategory::new(name.to_string()))
        .await
        .expect("Failed to insert category")
}

fn widget(category_id: ProductCategoryId) -> Product {
    Product::new("Widget".to_string(), "A widget".to_string(), 9.99, 10, category_id)
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_health_check() {
    let db = TestDatabase::new().await;
    db.pool().health_check().await.expect("Health check failed");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_category_crud() {
    let db = TestDatabase::new().await;
    let dao = PgProductCategoryDao::new(db.pool());

    let id = seed_category(&dao, "Tools").await;
    assert!(!id.is_unset());

    let found = dao.find_by_id(id).await.expect("Query failed").expect("Category not found");
    assert_eq!(found.name, "Tools");

    let updated = dao
        .update(&ProductCategory::new("Hand Tools".to_string()).with_id(id))
        .await
        .expect("Failed to update");
    assert_eq!(updated.name, "Hand Tools");

    assert!(dao.delete(id).await.expect("Failed to delete"));
    assert!(dao.find_by_id(id).await.expect("Query failed").is_none());
    assert!(!dao.delete(id).await.expect("Failed to delete"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_product_crud() {
    let db = TestDatabase::new().await;
    let categories = PgProductCategoryDao::new(db.pool());
    let dao = PgProductDao::new(db.pool());
    let category_id = seed_category(&categories, "Tools").await;

    let id = dao.insert(&widget(category_id)).await.expect("Failed to insert");
    let found = dao.find_by_id(id).await.expect("Query failed").expect("Product not found");
    assert_eq!(found, widget(category_id).with_id(id));

    let mut changed = found.clone();
    changed.name = "Widget-v2".to_string();
    changed.stock = 3;
    let updated = dao.update(&changed).await.expect("Failed to update");
    assert_eq!(updated, changed);

    assert!(dao.delete(id).await.expect("Failed to delete"));
    assert!(dao.find_by_id(id).await.expect("Query failed").is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_row_is_not_found() {
    let db = TestDatabase::new().await;
    let dao = PgProductDao::new(db.pool());

    let err = dao
        .update(&widget(ProductCategoryId::new(1)).with_id(ProductId::new(404)))
        .await
        .expect_err("Update should fail");
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unknown_category_is_a_validation_error() {
    let db = TestDatabase::new().await;
    let dao = PgProductDao::new(db.pool());

    let err = dao
        .insert(&widget(ProductCategoryId::new(999)))
        .await
        .expect_err("Insert should violate the foreign key");
    assert!(matches!(err, CatalogError::Validation(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_cached_repository_over_postgres() {
    let db = TestDatabase::new().await;
    let categories = PgProductCategoryDao::new(db.pool());
    let category_id = seed_category(&categories, "Tools").await;

    let repo = ProductRepositoryImpl::new(
        Arc::new(PgProductDao::new(db.pool())),
        Arc::new(MemoryCacheService::new(64).expect("capacity")),
        DEFAULT_TTL,
    );

    let id = repo.insert(&widget(category_id)).await.expect("Failed to insert");
    assert_eq!(
        repo.find_by_id(id).await.expect("Query failed").map(|p| p.name),
        Some("Widget".to_string())
    );

    let mut renamed = widget(category_id).with_id(id);
    renamed.name = "Widget-v2".to_string();
    repo.update(&renamed).await.expect("Failed to update");
    assert_eq!(
        repo.find_by_id(id).await.expect("Query failed").map(|p| p.name),
        Some("Widget-v2".to_string())
    );

    assert!(repo.delete(id).await.expect("Failed to delete"));
    assert!(repo.find_by_id(id).await.expect("Query failed").is_none());
}
