//! Configuration
//!
//! Process-wide resolution settings: the store backend, the shared cache
//! bounds, the serialization integration, and logging. Loaded once at
//! startup by the [`ConfigLoader`] and never mutated during request
//! handling.

/// Configuration loader
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CacheConfig, LoggingConfig, SerializerConfig, StoreConfig};
