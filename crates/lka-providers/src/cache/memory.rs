//! Bounded in-memory cache provider
//!
//! The shared lookup cache: a capacity-bounded map from rendered lookup
//! keys to raw store payloads, evicting the least-recently-used entry on
//! overflow. A `get` refreshes an entry's recency; entries are immutable
//! once written (a later `put` for the same key is the
//! concurrent-double-miss case, where the last write wins).

use async_trait::async_trait;
use lka_domain::constants::CACHE_DEFAULT_CAPACITY;
use lka_domain::error::Result;
use lka_domain::ports::{CacheStats, LookupCache};
use lka_domain::value_objects::StoredValue;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use tracing::trace;

struct Inner {
    entries: LruCache<String, StoredValue>,
    stats: CacheStats,
}

/// Bounded LRU cache for resolved lookups
pub struct LruLookupCache {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl Default for LruLookupCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LruLookupCache {
    /// Create a cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(CACHE_DEFAULT_CAPACITY)
    }

    /// Create a cache bounded to the given number of entries
    ///
    /// A zero capacity is clamped to one entry; disabling the cache is the
    /// null provider's job, not a degenerate bound.
    pub fn with_capacity(capacity: usize) -> Self {
        let bound = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(bound),
                stats: CacheStats::new(),
            }),
            capacity: bound.get(),
        }
    }

    /// The maximum number of entries the cache may hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl LookupCache for LruLookupCache {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>> {
        let mut inner = self.inner.lock();
        match inner.entries.get(key).cloned() {
            Some(value) => {
                inner.stats.record_hit();
                Ok(Some(value))
            }
            None => {
                inner.stats.record_miss();
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, value: StoredValue) -> Result<()> {
        let mut inner = self.inner.lock();
        if let Some((evicted, _)) = inner.entries.push(key.to_string(), value) {
            if evicted != key {
                trace!(key = %evicted, "evicted least-recently-used cache entry");
            }
        }
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.inner.lock().entries.len())
    }

    async fn clear(&self) -> Result<()> {
        self.inner.lock().entries.clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        let inner = self.inner.lock();
        let mut stats = inner.stats.clone();
        stats.entries = inner.entries.len() as u64;
        Ok(stats)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for LruLookupCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruLookupCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.inner.lock().entries.len())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use lka_application::ports::registry::{CacheProviderConfig, CacheProviderEntry, LOOKUP_CACHES};
use std::sync::Arc;

#[linkme::distributed_slice(LOOKUP_CACHES)]
static MEMORY_CACHE: CacheProviderEntry = CacheProviderEntry {
    name: "memory",
    description: "Bounded in-memory LRU cache",
    factory: |config: &CacheProviderConfig| {
        let cache = match config.capacity {
            Some(capacity) => LruLookupCache::with_capacity(capacity),
            None => LruLookupCache::new(),
        };
        Ok(Arc::new(cache))
    },
};
