//! Route classification caching.
//!
//! This module provides [`RouteCache`] — an LRU-based cache over
//! [`RouteRegistry`](crate::RouteRegistry) classification results, so the
//! 404 fallback can ask "is this path known?" on every render without
//! re-walking the pattern table. It is gated behind the `cache` feature
//! flag and uses the [`lru`] crate internally.
//!
//! [`CacheStats`] tracks hits, misses, and invalidations so cache
//! effectiveness can be monitored at runtime. The cache is invalidated
//! whenever the registry gains a route, since a previously-unknown path may
//! have become known.
//!
//! # Examples
//!
//! ```
//! use marketplace_navigator::cache::RouteCache;
//!
//! let mut cache = RouteCache::new();
//! assert_eq!(cache.get("/job/1"), None);
//!
//! cache.set("/job/1".to_string(), true);
//! assert_eq!(cache.get("/job/1"), Some(true));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of full invalidations (via [`RouteCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of path → "is a known route" classification results.
///
/// Default capacity is 256 entries — far more than the distinct paths a
/// client session touches, small enough to be irrelevant in memory terms.
#[derive(Debug)]
pub struct RouteCache {
    entries: LruCache<String, bool>,
    stats: CacheStats,
}

impl RouteCache {
    const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache with a custom capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).expect("Cache capacity must be non-zero");
        Self {
            entries: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Look up a cached classification for `path`.
    ///
    /// Returns `None` on a cache miss. Updates hit/miss stats.
    pub fn get(&mut self, path: &str) -> Option<bool> {
        if let Some(known) = self.entries.get(path) {
            self.stats.hits += 1;
            trace_log!("Classification cache hit for '{}'", path);
            Some(*known)
        } else {
            self.stats.misses += 1;
            trace_log!("Classification cache miss for '{}'", path);
            None
        }
    }

    /// Insert a classification result.
    pub fn set(&mut self, path: String, known: bool) {
        self.entries.push(path, known);
    }

    /// Drop every entry and increment the invalidation counter.
    ///
    /// Called when the registry gains a route.
    pub fn clear(&mut self) {
        let evicted = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Classification cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            evicted,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteCache {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_creation() {
        let cache = RouteCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_cache_miss() {
        let mut cache = RouteCache::new();
        assert_eq!(cache.get("/job/1"), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_cache_hit() {
        let mut cache = RouteCache::new();
        cache.set("/job/1".to_string(), true);
        cache.set("/nope".to_string(), false);

        assert_eq!(cache.get("/job/1"), Some(true));
        assert_eq!(cache.get("/nope"), Some(false));
        assert_eq!(cache.stats().hits, 2);
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = RouteCache::new();
        cache.set("/job/1".to_string(), true);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
        assert_eq!(cache.get("/job/1"), None);
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = RouteCache::with_capacity(2);
        cache.set("/a".to_string(), true);
        cache.set("/b".to_string(), true);
        cache.set("/c".to_string(), true);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("/a"), None);
        assert_eq!(cache.get("/c"), Some(true));
    }

    #[test]
    fn test_hit_rate_calculation() {
        let mut cache = RouteCache::new();
        cache.get("/a");
        cache.get("/b");
        cache.get("/c");

        cache.set("/a".to_string(), true);
        cache.set("/b".to_string(), false);

        cache.get("/a");
        cache.get("/b");

        assert_eq!(cache.stats().hits, 2);
        assert_eq!(cache.stats().misses, 3);
        assert!((cache.stats().hit_rate() - 0.4).abs() < 0.001);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_capacity_panics() {
        let _ = RouteCache::with_capacity(0);
    }
}
