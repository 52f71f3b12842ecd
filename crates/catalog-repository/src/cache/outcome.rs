//! Outcomes of best-effort cache operations.
//!
//! Cache calls made by the repositories never fail the request. Their
//! results are folded into [`CacheLookup`] or [`BestEffort`] and consumed
//! by `observe`, which logs and counts them.

use catalog_core::{CatalogError, CatalogResult};
use metrics::{counter, describe_counter};
use tracing::{debug, warn};

/// Metric names for cache behaviour.
pub mod names {
    /// Cache lookups by entity and outcome (hit, miss, skipped, unavailable).
    pub const CACHE_LOOKUPS_TOTAL: &str = "catalog_cache_lookups_total";
    /// Failed cache writes by entity and operation (populate, invalidate).
    pub const CACHE_WRITE_FAILURES_TOTAL: &str = "catalog_cache_write_failures_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_LOOKUPS_TOTAL,
        "Total number of read-through cache lookups"
    );
    describe_counter!(
        names::CACHE_WRITE_FAILURES_TOTAL,
        "Total number of cache writes that failed and were ignored"
    );
}

/// Result of reading one key through the cache.
#[derive(Debug)]
pub enum CacheLookup<T> {
    /// The key was cached and decoded.
    Hit(T),
    /// The key was not cached.
    Miss,
    /// The cache is disabled.
    Skipped,
    /// The backend failed or held a payload that did not decode.
    Unavailable(CatalogError),
}

impl<T> CacheLookup<T> {
    /// Label used for the `outcome` metric dimension.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hit(_) => "hit",
            Self::Miss => "miss",
            Self::Skipped => "skipped",
            Self::Unavailable(_) => "unavailable",
        }
    }

    /// Returns true for `Hit`.
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// Records the outcome and returns the cached value, if any.
    pub fn observe(self, entity: &'static str, key: &str) -> Option<T> {
        counter!(
            names::CACHE_LOOKUPS_TOTAL,
            "entity" => entity,
            "outcome" => self.label()
        )
        .increment(1);

        match self {
            Self::Hit(value) => {
                debug!("Cache hit for {}", key);
                Some(value)
            }
            Self::Miss => {
                debug!("Cache miss for {}", key);
                None
            }
            Self::Skipped => None,
            Self::Unavailable(error) => {
                warn!(key, %error, "Cache lookup failed, reading from database");
                None
            }
        }
    }
}

/// Result of a cache write that must not affect the caller.
#[derive(Debug)]
pub enum BestEffort {
    /// The write reached the cache.
    Applied,
    /// The cache is disabled.
    Skipped,
    /// The write failed and was dropped.
    Failed(CatalogError),
}

impl BestEffort {
    /// Folds a cache call result into an outcome.
    #[must_use]
    pub fn from_result<T>(result: CatalogResult<T>) -> Self {
        match result {
            Ok(_) => Self::Applied,
            Err(error) => Self::Failed(error),
        }
    }

    /// Returns true for `Failed`.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Records a failure, if any. Never propagates.
    pub fn observe(self, entity: &'static str, operation: &'static str, key: &str) {
        if let Self::Failed(error) = self {
            counter!(
                names::CACHE_WRITE_FAILURES_TOTAL,
                "entity" => entity,
                "operation" => operation
            )
            .increment(1);
            warn!(key, operation, %error, "Cache write failed, ignoring");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_labels() {
        assert_eq!(CacheLookup::Hit(1).label(), "hit");
        assert_eq!(CacheLookup::<i32>::Miss.label(), "miss");
        assert_eq!(CacheLookup::<i32>::Skipped.label(), "skipped");
        assert_eq!(
            CacheLookup::<i32>::Unavailable(CatalogError::cache("down")).label(),
            "unavailable"
        );
    }

    #[test]
    fn test_observe_only_yields_hits() {
        assert_eq!(CacheLookup::Hit(5).observe("product", "k"), Some(5));
        assert_eq!(CacheLookup::<i32>::Miss.observe("product", "k"), None);
        assert_eq!(CacheLookup::<i32>::Skipped.observe("product", "k"), None);
        assert_eq!(
            CacheLookup::<i32>::Unavailable(CatalogError::cache("down")).observe("product", "k"),
            None
        );
    }

    #[test]
    fn test_best_effort_from_result() {
        assert!(matches!(BestEffort::from_result(Ok(())), BestEffort::Applied));
        let failed = BestEffort::from_result::<()>(Err(CatalogError::cache("down")));
        assert!(failed.is_failed());
        failed.observe("product", "invalidate", "k");
    }
}
