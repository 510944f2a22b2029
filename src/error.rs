//! Error types for cache construction.
//!
//! The error surface is deliberately small: the only failure in this crate
//! is constructing a cache with a capacity of zero. Absence, expiry, and
//! eviction are all normal outcomes of a bounded, expiring cache and are
//! reported through `Option` returns, never as errors.

use thiserror::Error;

/// Errors raised when constructing a cache.
///
/// A cache that failed to construct must not be used; there is no way to
/// recover the construction attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity was not strictly positive.
    #[error("cache capacity must be greater than zero (got {0})")]
    InvalidCapacity(usize),
}
