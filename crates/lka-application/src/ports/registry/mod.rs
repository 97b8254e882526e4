//! Provider Registries
//!
//! Auto-registration system for lookup store and cache providers.
//! Providers submit entries into linkme distributed slices at compile
//! time and are resolved by name at configuration time.

/// Cache provider registry
pub mod cache;
/// Store provider registry
pub mod store;

pub use cache::{
    CacheProviderConfig, CacheProviderEntry, LOOKUP_CACHES, list_cache_providers,
    resolve_cache_provider,
};
pub use store::{
    LOOKUP_STORES, StoreProviderConfig, StoreProviderEntry, list_store_providers,
    resolve_store_provider,
};
