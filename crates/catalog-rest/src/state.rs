//! Application state for Axum handlers.

use async_trait::async_trait;
use catalog_core::CatalogResult;
use catalog_repository::DatabasePoolInterface;
use catalog_service::ProductService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Answers whether the service can take traffic.
#[async_trait]
pub trait ReadinessCheck: Send + Sync {
    async fn check(&self) -> CatalogResult<()>;
}

/// Readiness backed by a `SELECT 1` against the database pool.
pub struct DatabaseReadiness(pub Arc<dyn DatabasePoolInterface>);

#[async_trait]
impl ReadinessCheck for DatabaseReadiness {
    async fn check(&self) -> CatalogResult<()> {
        self.0.health_check().await
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    pub readiness: Arc<dyn ReadinessCheck>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        product_service: Arc<dyn ProductService>,
        readiness: Arc<dyn ReadinessCheck>,
    ) -> Self {
        Self {
            product_service,
            readiness,
        }
    }

    /// Resolves the service and the database pool from a shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn ProductService> + HasComponent<dyn DatabasePoolInterface>,
    {
        let product_service: Arc<dyn ProductService> = module.resolve();
        let pool: Arc<dyn DatabasePoolInterface> = module.resolve();
        Self::new(product_service, Arc::new(DatabaseReadiness(pool)))
    }
}
