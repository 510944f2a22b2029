//! Cache Configuration Module
//!
//! This module provides the configuration structure for the cache.
//! The struct has public fields for simple instantiation: create it with
//! the fields set and hand it to [`LruCache::init`](crate::LruCache::init).
//!
//! # Sizing
//!
//! The cache is bounded by entry count only. Each entry carries the key
//! (stored twice: in the lookup index and in the recency list), the value,
//! two list pointers, and an optional deadline — roughly 64-96 bytes of
//! overhead beyond key and value. Budget capacity accordingly:
//!
//! ```text
//! Total Memory ≈ capacity × (key + value + ~64-96 bytes)
//! ```
//!
//! # Examples
//!
//! ```
//! use ttlru::config::CacheConfig;
//! use ttlru::LruCache;
//!
//! let config = CacheConfig { capacity: 10_000 };
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None).unwrap();
//! assert_eq!(cache.cap().get(), 10_000);
//! ```

use core::fmt;

/// Configuration for an LRU cache with per-entry expiration.
///
/// The capacity is a plain integer rather than `NonZeroUsize` so that a
/// zero reaches the constructor and is rejected there with
/// [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity);
/// validation is a construction concern, not a configuration one.
#[derive(Clone, Copy)]
pub struct CacheConfig {
    /// Maximum number of key-value pairs the cache can hold. Must be
    /// strictly positive; construction fails otherwise.
    pub capacity: usize,
}

impl CacheConfig {
    /// Creates a configuration with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
