//! Least Recently Used (LRU) Cache with Per-Entry Expiration
//!
//! This module provides a bounded, memory-resident LRU cache with O(1)
//! lookups, insertions, and removals, plus optional time-based expiration
//! per entry.
//!
//! # Algorithm
//!
//! The cache keeps items in order of recency of use and evicts the least
//! recently used item when capacity is reached. Every successful lookup and
//! every write promotes the touched entry to the most-recently-used
//! position. Entries may carry an absolute expiration deadline; a lookup
//! that finds the deadline at-or-before "now" removes the entry and reports
//! a miss, exactly as if the key had never been set.
//!
//! Expiration is checked lazily, on access. There is no background sweeper:
//! a stale entry occupies its slot until a lookup discovers it or capacity
//! pressure evicts it.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe; it is a passive data structure
//! safe for one logical caller at a time. For concurrent access use
//! [`ConcurrentLruCache`](crate::ConcurrentLruCache) (requires the
//! `concurrent` feature), which guards one instance of this cache with a
//! mutex.

use crate::config::CacheConfig;
use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::list::{List, Node};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use core::num::NonZeroUsize;
use std::collections::BTreeMap;
use std::time::Instant;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Stable handle to an entry's node in the recency list.
type NodePtr<K, V> = *mut Node<CacheEntry<K, V>>;

/// A bounded LRU cache with optional per-entry expiration.
///
/// The cache has a fixed capacity set at construction and supports O(1)
/// lookup, insertion, and removal. When an insertion would exceed capacity,
/// the least recently used entry is evicted. Entries may carry an absolute
/// expiration deadline; expired entries are removed lazily when a lookup
/// touches them.
///
/// # Safety
///
/// The lookup index stores raw pointers into the recency list. Those
/// pointers are always valid because the index and the list are updated
/// together: a pointer enters the index only when the node enters the list,
/// and leaves it whenever the node is unlinked (removal, expiry, eviction).
///
/// # Examples
///
/// ```
/// use ttlru::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing an item updates its recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
///
/// With expiration:
///
/// ```
/// use std::time::{Duration, Instant};
/// use ttlru::LruCache;
///
/// let mut cache = LruCache::new(16).unwrap();
///
/// cache.put_with_expiry("session", 42, Instant::now() + Duration::from_secs(30));
/// assert_eq!(cache.get(&"session"), Some(&42));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    cap: NonZeroUsize,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, NodePtr<K, V>, S>,
    metrics: LruCacheMetrics,
}

// SAFETY: LruCache owns all of its data; the raw pointers in `map` point
// only at nodes owned by `list`, and moving the cache moves that ownership
// wholesale.
unsafe impl<K: Send, V: Send, S: Send> Send for LruCache<K, V, S> {}

// SAFETY: all mutation requires &mut self; shared references expose no
// interior mutability and therefore cannot race.
unsafe impl<K: Send, V: Send, S: Sync> Sync for LruCache<K, V, S> {}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a cache bounded to `capacity` entries, with the default
    /// hasher.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero. A
    /// cache that failed to construct must not be used; there is nothing to
    /// recover.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a cache from a [`CacheConfig`] and an optional hasher.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] when the configured capacity
    /// is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttlru::config::CacheConfig;
    /// use ttlru::LruCache;
    ///
    /// let config = CacheConfig { capacity: 100 };
    /// let cache: LruCache<String, i32> = LruCache::init(config, None).unwrap();
    /// assert_eq!(cache.cap().get(), 100);
    /// ```
    pub fn init(
        config: CacheConfig,
        hasher: Option<DefaultHashBuilder>,
    ) -> Result<Self, CacheError> {
        Self::with_hasher(config.capacity, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a cache bounded to `capacity` entries with a custom hash
    /// builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self, CacheError> {
        let cap = NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity(capacity))?;
        Ok(LruCache {
            cap,
            list: List::new(),
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            metrics: LruCacheMetrics::new(),
        })
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Returns the current number of entries.
    ///
    /// Entries past their deadline still count until a lookup discovers
    /// them; expiration is lazy.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Looks up a key, promoting it to most-recently-used on a hit.
    ///
    /// Returns `None` for absent keys. If the entry's deadline is
    /// at-or-before now, the entry is removed as part of this call and
    /// `None` is returned, as if the key had never been set. A lookup never
    /// evicts any other entry.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&node) = self.map.get(key) else {
            self.metrics.record_miss();
            return None;
        };

        // SAFETY: node comes from our map, so it is a live entry in `list`
        if unsafe { (*node).value().is_expired_at(Instant::now()) } {
            self.remove_stale(key, node);
            return None;
        }

        // SAFETY: node comes from our map, so it is a live entry in `list`
        unsafe { self.list.move_to_front(node) };
        self.metrics.record_hit();
        // SAFETY: move_to_front relinks the node without freeing it
        Some(unsafe { &(*node).value().value })
    }

    /// Looks up a key mutably, promoting it to most-recently-used on a hit.
    ///
    /// Same contract as [`get`](Self::get), including lazy removal of
    /// expired entries.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&node) = self.map.get(key) else {
            self.metrics.record_miss();
            return None;
        };

        // SAFETY: node comes from our map, so it is a live entry in `list`
        if unsafe { (*node).value().is_expired_at(Instant::now()) } {
            self.remove_stale(key, node);
            return None;
        }

        // SAFETY: node comes from our map, so it is a live entry in `list`
        unsafe { self.list.move_to_front(node) };
        self.metrics.record_hit();
        // SAFETY: move_to_front relinks the node without freeing it
        Some(unsafe { &mut (*node).value_mut().value })
    }

    /// Removes an entry whose deadline has passed, as part of a lookup.
    fn remove_stale<Q>(&mut self, key: &Q, node: NodePtr<K, V>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove(key);
        // SAFETY: node was just removed from the map, so the list still
        // owns it and it is unlinked exactly once.
        unsafe {
            self.list.unlink(node);
        }
        self.metrics.record_expiration();
        self.metrics.record_miss();
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// Removing an absent key is a no-op, not an error.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        // SAFETY: node comes from our map, so it is a live entry in `list`
        let entry = unsafe { self.list.unlink(node) };
        entry.map(|e| e.value)
    }

    /// Removes all entries. Metrics counters are not reset.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates a key without touching its expiration.
    ///
    /// For an existing key the value is replaced in place, the entry is
    /// promoted to most-recently-used, and **any existing expiration stays
    /// as it was** — an update without an expiration argument never clears
    /// a previously set deadline. The only way to drop a deadline is to
    /// [`remove`](Self::remove) the key and insert it again. For a new key
    /// the entry is inserted with no expiration.
    ///
    /// Returns the replaced pair for an existing key, or the evicted
    /// least-recently-used pair if the insertion displaced one. At most one
    /// entry is evicted per call.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.put_inner(key, value, None)
    }

    /// Inserts or updates a key and sets its expiration deadline.
    ///
    /// As [`put`](Self::put), except the entry's deadline is set (or
    /// replaced) with `expires_at`. The deadline is absolute and compared
    /// against "now" at each subsequent lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, Instant};
    /// use ttlru::LruCache;
    ///
    /// let mut cache = LruCache::new(8).unwrap();
    /// cache.put_with_expiry("token", "abc", Instant::now() + Duration::from_secs(60));
    /// ```
    pub fn put_with_expiry(&mut self, key: K, value: V, expires_at: Instant) -> Option<(K, V)> {
        self.put_inner(key, value, Some(expires_at))
    }

    fn put_inner(&mut self, key: K, value: V, expires_at: Option<Instant>) -> Option<(K, V)> {
        if let Some(&node) = self.map.get(&key) {
            // SAFETY: node comes from our map, so it is a live entry in `list`
            unsafe {
                self.list.move_to_front(node);
                let entry = (*node).value_mut();
                let old = mem::replace(&mut entry.value, value);
                if expires_at.is_some() {
                    entry.expires_at = expires_at;
                }
                return Some((key, old));
            }
        }

        let mut evicted = None;
        if self.map.len() >= self.cap.get() {
            // Make room first so the structures never exceed capacity,
            // even transiently. The victim is the current back of the list.
            if let Some(entry) = self.list.pop_back() {
                self.map.remove(&entry.key);
                self.metrics.record_eviction();
                evicted = Some((entry.key, entry.value));
            }
        }

        let node = self
            .list
            .push_front(CacheEntry::new(key.clone(), value, expires_at));
        self.map.insert(key, node);

        debug_assert_eq!(self.map.len(), self.list.len());
        evicted
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.cap)
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_new_rejects_zero_capacity() {
        let cache: Result<LruCache<&str, i32>, _> = LruCache::new(0);
        assert_eq!(cache.unwrap_err(), CacheError::InvalidCapacity(0));
    }

    #[test]
    fn test_init_rejects_zero_capacity() {
        let config = CacheConfig { capacity: 0 };
        let cache: Result<LruCache<&str, i32>, _> = LruCache::init(config, None);
        assert_eq!(cache.unwrap_err(), CacheError::InvalidCapacity(0));
    }

    #[test]
    fn test_lru_get_put() {
        let mut cache = LruCache::new(2).unwrap();
        assert_eq!(cache.put("apple", 1), None);
        assert_eq!(cache.put("banana", 2), None);
        assert_eq!(cache.get(&"apple"), Some(&1));
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), None);
        assert_eq!(cache.put("apple", 3).unwrap().1, 1);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.put("cherry", 4).unwrap().1, 2);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_get_mut() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("apple", 1);
        cache.put("banana", 2);
        if let Some(v) = cache.get_mut(&"apple") {
            *v = 3;
        }
        assert_eq!(cache.get(&"apple"), Some(&3));
        cache.put("cherry", 4);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_remove() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.remove(&"apple"), Some(1));
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.len(), 1);
        // Removing an absent key is a no-op
        assert_eq!(cache.remove(&"cherry"), None);
        assert_eq!(cache.len(), 1);
        let evicted = cache.put("cherry", 3);
        assert_eq!(evicted, None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        cache.put("cherry", 3);
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_capacity_limits() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.put("cherry", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = LruCache::new(1).unwrap();
        cache.put("a", 1);
        assert_eq!(cache.get(&"a"), Some(&1));
        let evicted = cache.put("b", 2);
        assert_eq!(evicted, Some(("a", 1)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
    }

    #[test]
    fn test_eviction_returns_lru_pair() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("a", 1);
        cache.put("b", 2);
        // "a" is now least recently used; inserting evicts it
        let evicted = cache.put("c", 3);
        assert_eq!(evicted, Some(("a", 1)));
    }

    #[test]
    fn test_lru_string_keys() {
        let mut cache = LruCache::new(2).unwrap();
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        cache.put(key1.clone(), 1);
        cache.put(key2.clone(), 2);
        assert_eq!(cache.get(&key1), Some(&1));
        assert_eq!(cache.get(&key2), Some(&2));
        // Borrowed lookups work through Borrow<str>
        assert_eq!(cache.get("apple"), Some(&1));
        assert_eq!(cache.remove("banana"), Some(2));
    }

    #[test]
    fn test_expired_entry_removed_on_get() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put("keep", 1);
        cache.put_with_expiry("gone", 2, Instant::now());
        assert_eq!(cache.len(), 2);

        sleep(Duration::from_millis(5));

        // The stale entry vanishes as part of the read
        assert_eq!(cache.get(&"gone"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"gone"), None);
        assert_eq!(cache.get(&"keep"), Some(&1));
    }

    #[test]
    fn test_expired_entry_removed_on_get_mut() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put_with_expiry("gone", 2, Instant::now());

        sleep(Duration::from_millis(5));

        assert_eq!(cache.get_mut(&"gone"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_future_deadline_is_live() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put_with_expiry("k", 7, Instant::now() + Duration::from_secs(60));
        assert_eq!(cache.get(&"k"), Some(&7));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_update_preserves_expiration() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put_with_expiry("k", 1, Instant::now() + Duration::from_millis(40));

        // Update without an expiration argument: value changes, deadline stays
        cache.put("k", 2);
        assert_eq!(cache.get(&"k"), Some(&2));

        sleep(Duration::from_millis(50));

        // The original deadline still applies
        assert_eq!(cache.get(&"k"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_put_with_expiry_replaces_deadline() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put_with_expiry("k", 1, Instant::now() + Duration::from_millis(20));
        cache.put_with_expiry("k", 2, Instant::now() + Duration::from_secs(60));

        sleep(Duration::from_millis(30));

        // The replaced deadline is the one that counts
        assert_eq!(cache.get(&"k"), Some(&2));
    }

    #[test]
    fn test_updating_expired_key_keeps_stale_deadline() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put_with_expiry("k", 1, Instant::now());
        sleep(Duration::from_millis(5));

        // The deadline is already past; a plain update does not revive it
        cache.put("k", 2);
        assert_eq!(cache.get(&"k"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_expiry_does_not_disturb_other_entries() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put("a", 1);
        cache.put_with_expiry("b", 2, Instant::now());
        cache.put("c", 3);

        sleep(Duration::from_millis(5));

        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.len(), 2);
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    struct ComplexValue {
        val: i32,
        description: String,
    }

    #[test]
    fn test_lru_complex_values() {
        let mut cache = LruCache::new(2).unwrap();
        let fruit1 = ComplexValue {
            val: 1,
            description: String::from("First fruit"),
        };
        let fruit2 = ComplexValue {
            val: 2,
            description: String::from("Second fruit"),
        };
        cache.put(String::from("apple"), fruit1.clone());
        cache.put(String::from("banana"), fruit2.clone());
        assert_eq!(cache.get("apple").unwrap().val, 1);

        let evicted = cache.put(String::from("cherry"), fruit1.clone());
        // "banana" was least recently used after the "apple" read
        assert_eq!(evicted.unwrap().1, fruit2);
    }

    #[test]
    fn test_lru_metrics() {
        let mut cache = LruCache::new(2).unwrap();
        let report = cache.metrics();
        assert_eq!(report.get("requests"), Some(&0.0));

        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.get(&"apple");
        cache.get(&"missing");
        cache.put("cherry", 3);

        let report = cache.metrics();
        assert_eq!(report.get("cache_hits"), Some(&1.0));
        assert_eq!(report.get("cache_misses"), Some(&1.0));
        assert_eq!(report.get("requests"), Some(&2.0));
        assert_eq!(report.get("evictions"), Some(&1.0));
        assert_eq!(cache.algorithm_name(), "LRU");
    }

    #[test]
    fn test_expiration_metrics() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put_with_expiry("k", 1, Instant::now());
        sleep(Duration::from_millis(5));
        cache.get(&"k");

        let report = cache.metrics();
        assert_eq!(report.get("expirations"), Some(&1.0));
        assert_eq!(report.get("cache_misses"), Some(&1.0));
    }

    #[test]
    fn test_debug_impl() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("a", 1);
        let debug_str = format!("{:?}", cache);
        assert!(debug_str.contains("LruCache"));
        assert!(debug_str.contains("capacity"));
    }
}
