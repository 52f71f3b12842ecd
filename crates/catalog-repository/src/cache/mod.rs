//! Caching infrastructure for the repository layer.
//!
//! Values are stored as JSON strings behind [`CacheInterface`] so that any
//! backend with get/set-with-TTL/delete can serve the repositories.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
pub mod outcome;
mod redis_cache;

pub use cache_interface::CacheInterface;
pub use memory_cache::MemoryCacheService;
pub use outcome::{BestEffort, CacheLookup};
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters, DEFAULT_TTL};
