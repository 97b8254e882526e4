//! Cache Provider Registry
//!
//! Auto-registration system for lookup cache providers, mirroring the
//! store registry: providers submit linkme entries at compile time and
//! are resolved by name at configuration time.

use std::collections::HashMap;
use std::sync::Arc;

use lka_domain::ports::LookupCache;

/// Configuration for cache provider creation
#[derive(Debug, Clone, Default)]
pub struct CacheProviderConfig {
    /// Provider name (e.g. "memory", "null")
    pub provider: String,
    /// Maximum number of entries the cache may hold
    pub capacity: Option<usize>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl CacheProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the entry capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for cache providers
pub struct CacheProviderEntry {
    /// Unique provider name (e.g. "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&CacheProviderConfig) -> Result<Arc<dyn LookupCache>, String>,
}

// Auto-collection via linkme - providers submit entries at compile time
#[linkme::distributed_slice]
pub static LOOKUP_CACHES: [CacheProviderEntry] = [..];

/// Resolve a cache provider by name from the registry
pub fn resolve_cache_provider(
    config: &CacheProviderConfig,
) -> Result<Arc<dyn LookupCache>, String> {
    for entry in LOOKUP_CACHES {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = LOOKUP_CACHES.iter().map(|entry| entry.name).collect();
    Err(format!(
        "Unknown cache provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered cache providers as (name, description) pairs
pub fn list_cache_providers() -> Vec<(&'static str, &'static str)> {
    LOOKUP_CACHES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
