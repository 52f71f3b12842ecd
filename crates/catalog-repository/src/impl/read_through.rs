//! Read-through caching over a DAO lookup.
//!
//! Reads try the cache, fall back to the loader, and populate the cache
//! from what the loader returned. Writes evict. Every cache call is best
//! effort: its outcome is observed and then dropped.

use crate::cache::{cache_keys, BestEffort, CacheInterface, CacheLookup};
use catalog_core::{CatalogError, CatalogResult, Entity};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::time::Duration;

pub(crate) struct ReadThrough<'a> {
    cache: &'a dyn CacheInterface,
    ttl: Duration,
}

impl<'a> ReadThrough<'a> {
    pub(crate) fn new(cache: &'a dyn CacheInterface, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    pub(crate) async fn lookup<E: DeserializeOwned>(&self, key: &str) -> CacheLookup<E> {
        if !self.cache.is_enabled() {
            return CacheLookup::Skipped;
        }

        match self.cache.get_raw(key).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => CacheLookup::Hit(value),
                Err(e) => CacheLookup::Unavailable(CatalogError::cache(format!(
                    "Undecodable payload: {}",
                    e
                ))),
            },
            Ok(None) => CacheLookup::Miss,
            Err(e) => CacheLookup::Unavailable(e),
        }
    }

    pub(crate) async fn populate<E: Serialize + Sync>(&self, key: &str, entity: &E) -> BestEffort {
        if !self.cache.is_enabled() {
            return BestEffort::Skipped;
        }

        match serde_json::to_string(entity) {
            Ok(json) => BestEffort::from_result(self.cache.set_raw(key, &json, self.ttl).await),
            Err(e) => BestEffort::Failed(e.into()),
        }
    }

    pub(crate) async fn invalidate(&self, key: &str) -> BestEffort {
        if !self.cache.is_enabled() {
            return BestEffort::Skipped;
        }

        BestEffort::from_result(self.cache.delete(key).await)
    }

    /// Serves `id` from the cache, or from `load` on any kind of miss.
    ///
    /// Errors from `load` propagate; cache errors never do.
    pub(crate) async fn find<E, F, Fut>(&self, id: E::Id, load: F) -> CatalogResult<Option<E>>
    where
        E: Entity + Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = CatalogResult<Option<E>>> + Send,
    {
        let key = cache_keys::entity_by_id::<E>(id);

        if let Some(cached) = self.lookup::<E>(&key).await.observe(E::RESOURCE, &key) {
            return Ok(Some(cached));
        }

        let found = load().await?;

        if let Some(entity) = &found {
            self.populate(&key, entity)
                .await
                .observe(E::RESOURCE, "populate", &key);
        }

        Ok(found)
    }

    /// Drops the cached copy of `id` after a successful write.
    pub(crate) async fn evict<E: Entity>(&self, id: E::Id) {
        let key = cache_keys::entity_by_id::<E>(id);
        self.invalidate(&key)
            .await
            .observe(E::RESOURCE, "invalidate", &key);
    }
}
