//! Cache Providers
//!
//! Backends for the process-wide shared lookup cache.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullLookupCache`] | Disabled | Always-miss stub; the caching-off path |
//! | [`LruLookupCache`] | Local | Bounded in-memory cache with LRU eviction |
//!
//! ## Provider Selection Guide
//!
//! - **Caching disabled**: `NullLookupCache` makes every resolution hit
//!   the store, with no deduplication.
//! - **Normal operation**: `LruLookupCache` bounded by the configured
//!   capacity.

#[cfg(feature = "cache-memory")]
pub mod memory;
pub mod null;

// Re-export for convenience
#[cfg(feature = "cache-memory")]
pub use memory::LruLookupCache;
pub use null::NullLookupCache;
