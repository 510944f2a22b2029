//! Cache Metrics System
//!
//! Counters for the observable events of the cache: requests, hits,
//! capacity evictions, and lazy expirations. Misses are derived as
//! `requests - cache_hits`.
//!
//! # Why BTreeMap over HashMap?
//!
//! Metrics reporting uses `BTreeMap` so that keys always appear in a
//! deterministic order: reproducible test output, stable serialization,
//! readable logs. The O(log n) lookup cost is irrelevant at this key count.

use std::collections::BTreeMap;

/// Counters tracked by the LRU cache.
///
/// Every `get` counts as a request; live lookups count as hits, while both
/// absent keys and lazily expired entries count as misses. Evictions count
/// entries displaced by capacity, expirations count entries removed because
/// a read found them past their deadline.
#[derive(Debug, Default, Clone)]
pub struct LruCacheMetrics {
    /// Total number of lookups made against the cache.
    pub requests: u64,

    /// Number of lookups that found a live entry.
    pub cache_hits: u64,

    /// Number of entries evicted to make room for new insertions.
    pub evictions: u64,

    /// Number of entries removed because a lookup found them expired.
    pub expirations: u64,
}

impl LruCacheMetrics {
    /// Creates a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found a live entry.
    #[inline]
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that found nothing usable (absent or expired key).
    #[inline]
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records an entry displaced by a capacity-triggered eviction.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an entry removed because a lookup found it past its deadline.
    #[inline]
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    /// Fraction of requests that hit, in `0.0..=1.0`. Zero when idle.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of requests that missed, in `0.0..=1.0`. Zero when idle.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a `BTreeMap` for reporting.
    ///
    /// Keys are stable and sorted, so output is deterministic across runs.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("expirations".to_string(), self.expirations as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics
    }
}

/// Uniform metrics-reporting interface for cache implementations.
///
/// Implemented by [`LruCache`](crate::LruCache) and, with the `concurrent`
/// feature, by [`ConcurrentLruCache`](crate::ConcurrentLruCache).
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU").
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
