//! # Catalog Repository
//!
//! Data access for products and product categories:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>      (domain interface)
//! ProductRepositoryImpl                (read-through cache + invalidate-on-write)
//!   ↓  Arc<dyn ProductDao>             Arc<dyn CacheInterface>
//! PgProductDao                         RedisCacheService / MemoryCacheService
//!   ↓                                    ↓
//! PostgreSQL                           Redis / process memory
//! ```
//!
//! The database is the system of record. Cache failures never reach the
//! caller; they are logged and counted, and the lookup falls back to the
//! database.

pub mod cache;
pub mod dao;
pub mod pool;
pub mod traits;
pub mod r#impl;

pub use cache::outcome::register_metrics;
pub use cache::{
    BestEffort, CacheInterface, CacheLookup, MemoryCacheService, RedisCacheService,
    RedisCacheServiceParameters, DEFAULT_TTL,
};
pub use dao::{PgProductCategoryDao, PgProductDao, ProductCategoryDao, ProductDao};
pub use pool::*;
pub use r#impl::{
    ProductCategoryRepositoryImpl, ProductCategoryRepositoryImplParameters, ProductRepositoryImpl,
    ProductRepositoryImplParameters,
};
pub use traits::*;

#[cfg(test)]
pub(crate) mod test_support;
