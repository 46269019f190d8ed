//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use chrono::{DateTime, Utc};

/// Source of timestamps for cache entries.
pub type Clock = fn() -> DateTime<Utc>;

// == Cache Entry ==
/// A cached value and the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// When the value was cached
    pub cached_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry stamped with the given clock.
    pub fn new(value: T, clock: Clock) -> Self {
        Self {
            value,
            cached_at: clock(),
        }
    }
}
