//! Concurrent Cache Wrapper
//!
//! A thread-safe wrapper that guards one [`LruCache`] with a single
//! `parking_lot::Mutex`, preserving the whole-cache capacity bound and the
//! single global recency order. This is the multi-threaded counterpart to
//! [`LruCache`](crate::LruCache).
//!
//! # Why Mutex Instead of RwLock?
//!
//! LRU lookups require **mutable access even though they read**: every
//! `get()` promotes the touched entry to the most-recently-used position,
//! and a lookup that finds an expired entry removes it on the spot. Since
//! `get()` is inherently a write operation, an `RwLock` would provide no
//! benefit — every access would still need the exclusive lock. `Mutex` is
//! preferred because:
//!
//! 1. **Lower overhead**: `Mutex` has less bookkeeping than `RwLock`
//! 2. **No false promises**: Makes it clear that all operations are
//!    mutually exclusive
//! 3. **Serializability**: each call holds the lock for its full duration,
//!    so concurrent callers observe a total order of operations — no
//!    partial interleaving of one get/put/remove with another is visible
//!
//! A design that used a genuinely shared read lock for `get` would have to
//! either drop promotions and expiry-removals under contention or make them
//! eventually consistent; this wrapper does neither.
//!
//! The lock is released on every exit path, including panics in caller
//! closures: `parking_lot` guards are not poisoning, and unlocking happens
//! in the guard's destructor.
//!
//! # Example
//!
//! ```rust,ignore
//! use ttlru::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(10_000).unwrap());
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             let key = format!("key-{}-{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```

use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::lru::LruCache;
use crate::metrics::CacheMetrics;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::time::Instant;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache with per-entry expiration.
///
/// Holds exactly one [`LruCache`] behind one mutex and exposes the same
/// operation contract through `&self`. All engine mutation happens only
/// while the lock is held, and the engine is never exposed by reference
/// outside a critical section.
///
/// Unlike striped designs, eviction order here is the true global LRU
/// order and the capacity bound applies to the cache as a whole.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq + Clone + Send`.
/// - `V`: Value type. Must implement `Send` (`Clone` for [`get`](Self::get)).
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// # Example
///
/// ```rust,ignore
/// use ttlru::ConcurrentLruCache;
/// use std::sync::Arc;
///
/// let cache = Arc::new(ConcurrentLruCache::new(1000).unwrap());
///
/// // Safe to use from multiple threads
/// cache.put("key".to_string(), 42);
/// assert_eq!(cache.get(&"key".to_string()), Some(42));
/// ```
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<LruCache<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V> {
    /// Creates a thread-safe cache bounded to `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        Ok(Self {
            inner: Mutex::new(LruCache::new(capacity)?),
        })
    }

    /// Creates a thread-safe cache from a [`CacheConfig`] and an optional
    /// hasher.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] when the configured capacity
    /// is zero.
    pub fn init(
        config: CacheConfig,
        hasher: Option<DefaultHashBuilder>,
    ) -> Result<Self, CacheError> {
        Ok(Self {
            inner: Mutex::new(LruCache::init(config, hasher)?),
        })
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Creates a thread-safe cache with a custom hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self, CacheError> {
        Ok(Self {
            inner: Mutex::new(LruCache::with_hasher(capacity, hash_builder)?),
        })
    }

    /// Returns the maximum number of entries the cache can hold.
    pub fn cap(&self) -> NonZeroUsize {
        self.inner.lock().cap()
    }

    /// Returns the current number of entries.
    ///
    /// The value may be stale by the time the caller reads it if other
    /// threads are mutating the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Looks up a key, promoting it on a hit and removing it if expired.
    ///
    /// Returns a **clone** of the value so the lock is not held after the
    /// call returns. For read-only access without cloning, use
    /// [`get_with`](Self::get_with).
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Looks up a key and applies `f` to the value while the lock is held.
    ///
    /// More efficient than [`get`](Self::get) when ownership of the value
    /// is not needed. The lock is released when `f` returns. Promotion and
    /// lazy expiry behave exactly as in [`get`](Self::get).
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Looks up a key mutably and applies `f` while the lock is held.
    ///
    /// Allows in-place modification of cached values without removing them.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Increment a counter in place
    /// cache.get_mut_with(&"counter".to_string(), |v| *v += 1);
    /// ```
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.lock().get_mut(key).map(f)
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// Removing an absent key is a no-op, not an error.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Inserts or updates a key without touching its expiration.
    ///
    /// Same contract as [`LruCache::put`]: an update never clears a
    /// previously set deadline, and at most one entry is evicted per call.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().put(key, value)
    }

    /// Inserts or updates a key and sets its expiration deadline.
    ///
    /// Same contract as [`LruCache::put_with_expiry`].
    pub fn put_with_expiry(&self, key: K, value: V, expires_at: Instant) -> Option<(K, V)> {
        self.inner.lock().put_with_expiry(key, value, expires_at)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for ConcurrentLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentLruCache")
            .field("inner", &self.inner)
            .finish()
    }
}
