//! Null cache provider
//!
//! A cache provider that doesn't store anything. This is the
//! caching-disabled path: every `get` reports a miss and every `put` is
//! accepted and dropped, so each resolution issues a fresh store call
//! with no deduplication.

use async_trait::async_trait;
use lka_domain::error::Result;
use lka_domain::ports::{CacheStats, LookupCache};
use lka_domain::value_objects::StoredValue;

/// Null cache provider that doesn't store anything
///
/// # Example
///
/// ```rust
/// use lka_providers::cache::NullLookupCache;
///
/// let cache = NullLookupCache::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullLookupCache;

impl NullLookupCache {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LookupCache for NullLookupCache {
    async fn get(&self, _key: &str) -> Result<Option<StoredValue>> {
        // Always a miss
        Ok(None)
    }

    async fn put(&self, _key: &str, _value: StoredValue) -> Result<()> {
        // Accept the put but don't store anything
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(0)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use lka_application::ports::registry::{CacheProviderConfig, CacheProviderEntry, LOOKUP_CACHES};
use std::sync::Arc;

#[linkme::distributed_slice(LOOKUP_CACHES)]
static NULL_CACHE: CacheProviderEntry = CacheProviderEntry {
    name: "null",
    description: "Always-miss cache (caching disabled)",
    factory: |_config: &CacheProviderConfig| Ok(Arc::new(NullLookupCache::new())),
};
