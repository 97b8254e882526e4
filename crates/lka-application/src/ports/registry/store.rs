//! Lookup Store Provider Registry
//!
//! Auto-registration system for lookup store providers. Providers register
//! themselves via a linkme distributed slice and are discovered at runtime
//! by name.

use std::collections::HashMap;
use std::sync::Arc;

use lka_domain::ports::LookupStore;

/// Configuration for store provider creation
///
/// Contains all configuration options a store provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct StoreProviderConfig {
    /// Provider name (e.g. "memory", "redis")
    pub provider: String,
    /// Connection URL (for remote stores)
    pub url: Option<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl StoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the connection URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for lookup store providers
///
/// Each store implementation registers itself with this entry using a
/// linkme distributed slice. The entry contains metadata and a factory
/// function to create provider instances.
pub struct StoreProviderEntry {
    /// Unique provider name (e.g. "memory", "redis")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&StoreProviderConfig) -> Result<Arc<dyn LookupStore>, String>,
}

// Auto-collection via linkme - providers submit entries at compile time
#[linkme::distributed_slice]
pub static LOOKUP_STORES: [StoreProviderEntry] = [..];

/// Resolve a store provider by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn LookupStore>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_store_provider(
    config: &StoreProviderConfig,
) -> Result<Arc<dyn LookupStore>, String> {
    for entry in LOOKUP_STORES {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = LOOKUP_STORES.iter().map(|entry| entry.name).collect();
    Err(format!(
        "Unknown store provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered store providers as (name, description) pairs
pub fn list_store_providers() -> Vec<(&'static str, &'static str)> {
    LOOKUP_STORES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
