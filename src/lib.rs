//! A bounded in-memory key/value cache with least-recently-used eviction
//! and optional per-entry time-based expiration.
//!
//! `ttlru` is for callers that need fast repeated lookups over a working
//! set larger than they want to keep fully in memory, trading exactness
//! for a fixed memory ceiling. The cache holds at most `capacity` entries;
//! inserting beyond that evicts the least recently used entry. Entries may
//! carry an absolute expiration deadline, checked lazily whenever a lookup
//! touches them — there is no background sweeper thread.
//!
//! # Quick Reference
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LruCache`] | Single-threaded engine: O(1) get/put/remove |
//! | [`ConcurrentLruCache`] | One engine behind one mutex (requires `concurrent` feature) |
//!
//! # Examples
//!
//! ## LRU eviction
//!
//! ```rust
//! use ttlru::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Per-entry expiration
//!
//! Deadlines are absolute (`Instant`), compared against "now" at each
//! lookup. An expired entry disappears on the read that discovers it:
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use ttlru::LruCache;
//!
//! let mut cache = LruCache::new(100).unwrap();
//! cache.put_with_expiry("session", "token", Instant::now() + Duration::from_secs(30));
//! assert_eq!(cache.get(&"session"), Some(&"token"));
//! ```
//!
//! Note one deliberate asymmetry: updating an existing key with
//! [`LruCache::put`] (no expiration argument) keeps whatever deadline the
//! entry already had. Clearing a deadline requires removing and
//! re-inserting the key.
//!
//! ## Concurrent use
//!
//! Enable the `concurrent` feature for the thread-safe wrapper:
//!
//! ```toml
//! [dependencies]
//! ttlru = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ```rust,ignore
//! use ttlru::ConcurrentLruCache;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(10_000).unwrap());
//!
//! // Safe to share across threads
//! let cache_clone = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     cache_clone.put("key".to_string(), 42);
//! });
//! ```
//!
//! # Error Handling
//!
//! The only fallible operation is construction: a zero capacity yields
//! [`CacheError::InvalidCapacity`]. Absence, expiry, and eviction are
//! normal control-flow outcomes reported through `Option` returns.

/// Cache entry type.
///
/// Provides the `CacheEntry<K, V>` structure that holds a key, a value,
/// and an optional expiration deadline.
pub mod entry;

/// Doubly linked recency list.
///
/// **Note**: This module is internal infrastructure and should not be used
/// directly by library consumers. It exposes unsafe raw pointer operations
/// that require careful invariant maintenance. Use the high-level cache
/// types instead.
pub(crate) mod list;

/// Cache configuration structure.
pub mod config;

/// Construction error types.
pub mod error;

/// Least Recently Used (LRU) cache engine with per-entry expiration.
pub mod lru;

/// Cache metrics system.
///
/// Counters for hits, misses, evictions, and lazy expirations, reported
/// through the common [`CacheMetrics`] interface.
pub mod metrics;

/// Concurrent cache wrapper.
///
/// Guards a single cache engine with a mutex so that simultaneous callers
/// observe a total order of operations. Available when the `concurrent`
/// feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

// Re-export the cache types
pub use lru::LruCache;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;

// Re-export supporting types
pub use config::CacheConfig;
pub use entry::CacheEntry;
pub use error::CacheError;
pub use metrics::{CacheMetrics, LruCacheMetrics};
