//! In-memory lookup store provider
//!
//! A process-local key-value store backed by a concurrent map. Serves as
//! the embedded backend for development and as the store double in tests;
//! the fetch counter makes call-deduplication assertions possible without
//! a mock layer.

use async_trait::async_trait;
use dashmap::DashMap;
use lka_domain::error::Result;
use lka_domain::ports::LookupStore;
use lka_domain::value_objects::LookupKey;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-process lookup store
///
/// Keys are rendered `bucket/id` strings; payloads are stored verbatim.
#[derive(Debug, Default)]
pub struct MemoryLookupStore {
    entries: DashMap<String, String>,
    fetches: AtomicU64,
}

impl MemoryLookupStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with rendered-key/payload pairs
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (key, payload) in entries {
            store.insert(key, payload);
        }
        store
    }

    /// Insert or replace a payload under a rendered key
    pub fn insert(&self, key: impl Into<String>, payload: impl Into<String>) {
        self.entries.insert(key.into(), payload.into());
    }

    /// Number of fetch calls served so far (single and batched each count
    /// as one)
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupStore for MemoryLookupStore {
    async fn fetch_one(&self, key: &LookupKey) -> Result<Option<String>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .entries
            .get(&key.render())
            .map(|entry| entry.value().clone()))
    }

    async fn fetch_many(&self, keys: &[LookupKey]) -> Result<Vec<Option<String>>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(keys
            .iter()
            .map(|key| {
                self.entries
                    .get(&key.render())
                    .map(|entry| entry.value().clone())
            })
            .collect())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use lka_application::ports::registry::{LOOKUP_STORES, StoreProviderConfig, StoreProviderEntry};
use std::sync::Arc;

#[linkme::distributed_slice(LOOKUP_STORES)]
static MEMORY_STORE: StoreProviderEntry = StoreProviderEntry {
    name: "memory",
    description: "In-process lookup store",
    factory: |_config: &StoreProviderConfig| Ok(Arc::new(MemoryLookupStore::new())),
};
