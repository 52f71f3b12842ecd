//! In-process cache with LRU eviction and per-entry TTL.

use super::CacheInterface;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    /// `None` when the TTL is too large to represent; such entries never expire.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// In-memory cache service.
///
/// Entries expire lazily: an expired entry is dropped when it is next read.
/// When full, the least recently used entry is evicted.
pub struct MemoryCacheService {
    store: Mutex<LruCache<String, CacheEntry>>,
}

impl MemoryCacheService {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> CatalogResult<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            CatalogError::Configuration("memory cache capacity must be > 0".to_string())
        })?;
        Ok(Self {
            store: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// Number of entries currently held, including expired ones not yet read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheInterface for MemoryCacheService {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        let now = Instant::now();
        let mut store = self.store.lock();

        let expired = match store.get(key) {
            Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            store.pop(key);
        }
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CatalogResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now().checked_add(ttl),
        };
        self.store.lock().put(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CatalogResult<bool> {
        Ok(self.store.lock().pop(key).is_some())
    }
}

impl std::fmt::Debug for MemoryCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let store = self.store.lock();
        f.debug_struct("MemoryCacheService")
            .field("len", &store.len())
            .field("capacity", &store.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(
            MemoryCacheService::new(0),
            Err(CatalogError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = MemoryCacheService::new(8).unwrap();
        assert_eq!(cache.get_raw("a").await.unwrap(), None);

        cache.set_raw("a", "1", TTL).await.unwrap();
        assert_eq!(cache.get_raw("a").await.unwrap().as_deref(), Some("1"));

        cache.set_raw("a", "2", TTL).await.unwrap();
        assert_eq!(cache.get_raw("a").await.unwrap().as_deref(), Some("2"));

        assert!(cache.delete("a").await.unwrap());
        assert!(!cache.delete("a").await.unwrap());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_expired_entries_are_dropped_on_read() {
        let cache = MemoryCacheService::new(8).unwrap();
        cache.set_raw("a", "1", Duration::ZERO).await.unwrap();
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.get_raw("a").await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_unrepresentable_ttl_never_expires() {
        let cache = MemoryCacheService::new(8).unwrap();
        cache
            .set_raw("a", "1", Duration::from_secs(u64::MAX))
            .await
            .unwrap();
        assert_eq!(cache.get_raw("a").await.unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_least_recently_used_is_evicted() {
        let cache = MemoryCacheService::new(2).unwrap();
        cache.set_raw("a", "1", TTL).await.unwrap();
        cache.set_raw("b", "2", TTL).await.unwrap();

        // touch "a" so "b" becomes the eviction candidate
        cache.get_raw("a").await.unwrap();
        cache.set_raw("c", "3", TTL).await.unwrap();

        assert!(cache.get_raw("a").await.unwrap().is_some());
        assert!(cache.get_raw("b").await.unwrap().is_none());
        assert!(cache.get_raw("c").await.unwrap().is_some());
    }
}
