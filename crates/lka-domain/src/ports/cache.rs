//! Shared Cache Port
//!
//! Port for the process-wide bounded cache of resolved store payloads.
//! The cache deduplicates identical lookups across instances and calls:
//! for a given key, an enabled cache holding an entry means no store call
//! is issued.
//!
//! Entries are immutable once written. Two concurrent misses for the same
//! key may both reach the store; the second write wins and both callers
//! observe a consistent payload. That brief window is accepted - "at most
//! one store call per key" is a performance goal, not a hard guarantee.

use crate::error::Result;
use crate::value_objects::StoredValue;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Cache Operation Statistics
///
/// Tracks hit/miss counts for the shared cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache entries currently held
    pub entries: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit and refresh the hit rate
    pub fn record_hit(&mut self) {
        self.hits += 1;
        self.refresh_rate();
    }

    /// Record a miss and refresh the hit rate
    pub fn record_miss(&mut self) {
        self.misses += 1;
        self.refresh_rate();
    }

    fn refresh_rate(&mut self) {
        let total = self.hits + self.misses;
        self.hit_rate = if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        };
    }
}

/// Process-wide bounded lookup cache
///
/// Keys are rendered `bucket/id` strings; values are raw store payloads
/// including the explicit [`StoredValue::Missing`] marker, so a "fetched
/// and empty" result is never re-fetched.
#[async_trait]
pub trait LookupCache: Send + Sync {
    /// Look up a cached payload; `None` means not yet fetched
    async fn get(&self, key: &str) -> Result<Option<StoredValue>>;

    /// Store a payload under a key
    async fn put(&self, key: &str, value: StoredValue) -> Result<()>;

    /// Number of entries currently held
    async fn len(&self) -> Result<usize>;

    /// Drop every entry
    async fn clear(&self) -> Result<()>;

    /// Hit/miss statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Unique provider name (e.g. "memory", "null")
    fn provider_name(&self) -> &str;
}
