//! Dependency injection module using Shaku.
//!
//! `CatalogModule` holds the whole stack: database pool, PostgreSQL DAOs,
//! the cache selected by `cache.backend`, the read-through repositories
//! and the product service.

use catalog_config::{AppConfig, CacheBackend};
use catalog_core::CatalogResult;
use catalog_repository::{
    CacheInterface, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    MemoryCacheService, PgProductCategoryDao, PgProductDao, ProductCategoryRepositoryImpl,
    ProductCategoryRepositoryImplParameters, ProductRepositoryImpl,
    ProductRepositoryImplParameters, RedisCacheService, RedisCacheServiceParameters,
};
use catalog_service::ProductServiceImpl;
use shaku::module;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

module! {
    pub CatalogModule {
        components = [
            DatabasePool,
            PgProductDao,
            PgProductCategoryDao,
            RedisCacheService,
            ProductRepositoryImpl,
            ProductCategoryRepositoryImpl,
            ProductServiceImpl,
        ],
        providers = [],
    }
}

/// Connects to the database and builds the module.
pub async fn build_catalog_module(config: &AppConfig) -> CatalogResult<Arc<CatalogModule>> {
    let db_pool = DatabasePool::connect(&config.database).await?;
    assemble_catalog_module(db_pool.inner().clone(), config)
}

/// Builds the module around an existing pool.
///
/// Redis pools are created lazily, so nothing here touches the network.
pub fn assemble_catalog_module(pool: PgPool, config: &AppConfig) -> CatalogResult<Arc<CatalogModule>> {
    let ttl = config.cache.ttl();
    let backend = config.cache.effective_backend(&config.redis);
    info!(backend = ?backend, ttl_secs = config.cache.ttl_secs, "Configuring cache");

    let mut builder = CatalogModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool })
        .with_component_parameters::<ProductRepositoryImpl>(ProductRepositoryImplParameters {
            ttl,
        })
        .with_component_parameters::<ProductCategoryRepositoryImpl>(
            ProductCategoryRepositoryImplParameters { ttl },
        );

    builder = match backend {
        CacheBackend::Redis => {
            let redis_pool = RedisCacheService::create_pool(
                &config.redis.url,
                config.redis.pool_size as usize,
            )?;
            builder.with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
                pool: Some(redis_pool),
            })
        }
        CacheBackend::Memory => {
            let cache: Box<dyn CacheInterface> =
                Box::new(MemoryCacheService::new(config.cache.memory_capacity)?);
            builder.with_component_override::<dyn CacheInterface>(cache)
        }
        CacheBackend::None => builder
            .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
                pool: None,
            }),
    };

    Ok(Arc::new(builder.build()))
}
