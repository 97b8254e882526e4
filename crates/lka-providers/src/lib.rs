//! Provider Implementations for lookaside
//!
//! Concrete backends for the domain ports: lookup stores, shared caches,
//! and serialization drivers. Store and cache providers self-register into
//! the linkme registries declared by `lka-application`, so depending on
//! this crate is enough to make them resolvable by name.

/// Shared cache providers
pub mod cache;
/// Provider-level constants
pub mod constants;
/// Serialization drivers
pub mod serializer;
/// Lookup store providers
pub mod store;

// Re-export for convenience
#[cfg(feature = "cache-memory")]
pub use cache::LruLookupCache;
pub use cache::NullLookupCache;
pub use serializer::{JsonDriver, NoopDriver};
#[cfg(feature = "store-memory")]
pub use store::MemoryLookupStore;
#[cfg(feature = "store-redis")]
pub use store::RedisLookupStore;
