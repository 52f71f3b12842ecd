//! In-memory test doubles for DAOs and caches.

use crate::cache::CacheInterface;
use crate::dao::{ProductCategoryDao, ProductDao};
use async_trait::async_trait;
use catalog_core::{
    CatalogError, CatalogResult, Entity, Product, ProductCategory, ProductCategoryId, ProductId,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

fn store_down() -> CatalogError {
    CatalogError::Database("store unavailable".to_string())
}

/// In-memory product DAO that counts reads and can be made to fail.
pub(crate) struct InMemoryProductDao {
    rows: Mutex<HashMap<ProductId, Product>>,
    next_id: AtomicI64,
    reads: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryProductDao {
    pub(crate) fn new() -> Self {
        Self::starting_at(1)
    }

    pub(crate) fn starting_at(first_id: i64) -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(first_id),
            reads: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> CatalogResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        Ok(())
    }
}

#[async_trait]
impl ProductDao for InMemoryProductDao {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, product: &Product) -> CatalogResult<ProductId> {
        self.check()?;
        let id = ProductId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.rows
            .lock()
            .unwrap()
            .insert(id, product.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, product: &Product) -> CatalogResult<Product> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(product.clone())
            }
            None => Err(CatalogError::not_found(Product::NAME, product.id)),
        }
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

/// In-memory category DAO that counts reads and can be made to fail.
pub(crate) struct InMemoryProductCategoryDao {
    rows: Mutex<HashMap<ProductCategoryId, ProductCategory>>,
    next_id: AtomicI64,
    reads: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryProductCategoryDao {
    pub(crate) fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            reads: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> CatalogResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        Ok(())
    }
}

#[async_trait]
impl ProductCategoryDao for InMemoryProductCategoryDao {
    async fn find_by_id(&self, id: ProductCategoryId) -> CatalogResult<Option<ProductCategory>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, category: &ProductCategory) -> CatalogResult<ProductCategoryId> {
        self.check()?;
        let raw = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = ProductCategoryId::new(i32::try_from(raw).unwrap());
        self.rows
            .lock()
            .unwrap()
            .insert(id, category.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, category: &ProductCategory) -> CatalogResult<ProductCategory> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&category.id) {
            Some(row) => {
                *row = category.clone();
                Ok(category.clone())
            }
            None => Err(CatalogError::not_found(ProductCategory::NAME, category.id)),
        }
    }

    async fn delete(&self, id: ProductCategoryId) -> CatalogResult<bool> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

/// Enabled cache whose every operation fails.
#[derive(Default)]
pub(crate) struct FailingCache {
    calls: AtomicUsize,
}

impl FailingCache {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> CatalogResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::cache("connection refused"))
    }
}

#[async_trait]
impl CacheInterface for FailingCache {
    async fn get_raw(&self, _key: &str) -> CatalogResult<Option<String>> {
        self.fail()
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> CatalogResult<()> {
        self.fail()
    }

    async fn delete(&self, _key: &str) -> CatalogResult<bool> {
        self.fail()
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
