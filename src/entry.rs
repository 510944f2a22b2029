//! Cache Entry Type
//!
//! This module provides the `CacheEntry<K, V>` structure stored in the
//! recency list: a key, a value, and an optional expiration deadline.
//!
//! # Expiration Model
//!
//! Expiration is an absolute point in time (`std::time::Instant`), not a
//! duration. `None` means the entry never expires. An entry whose deadline
//! is strictly after "now" is live; a deadline at-or-before "now" makes the
//! entry stale. Staleness is only ever discovered lazily, when the cache
//! reads the entry — there is no background sweeper.

use core::fmt;
use std::time::Instant;

/// A single cached record: key, value, and optional expiration deadline.
///
/// Recency is not stored here; it is implicit in the entry's position in
/// the cache's eviction list.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use ttlru::CacheEntry;
///
/// // An entry that never expires
/// let entry = CacheEntry::new("key", 42, None);
/// assert!(!entry.is_expired_at(Instant::now()));
///
/// // An entry with a deadline one minute out
/// let deadline = Instant::now() + Duration::from_secs(60);
/// let entry = CacheEntry::new("session", "token", Some(deadline));
/// assert!(!entry.is_expired_at(Instant::now()));
/// assert!(entry.is_expired_at(deadline));
/// ```
pub struct CacheEntry<K, V> {
    /// The cached key.
    pub key: K,

    /// The cached value.
    pub value: V,

    /// Absolute expiration deadline. `None` means the entry never expires.
    pub expires_at: Option<Instant>,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new cache entry with an optional expiration deadline.
    #[inline]
    pub fn new(key: K, value: V, expires_at: Option<Instant>) -> Self {
        Self {
            key,
            value,
            expires_at,
        }
    }

    /// Returns true if this entry is stale as of `now`.
    ///
    /// An entry is stale when it has a deadline at-or-before `now`. An entry
    /// with no deadline, or with a deadline strictly after `now`, is live.
    /// The boundary matters: an entry expiring exactly "now" is already
    /// stale, so once the full TTL has elapsed the entry is gone.
    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => deadline <= now,
            None => false,
        }
    }
}

impl<K: Clone, V: Clone> Clone for CacheEntry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            expires_at: self.expires_at,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
