//! # lookaside
//!
//! Augments record-like objects with attributes resolved from an external
//! key-value lookup store, minimizing redundant remote calls through
//! batching and a bounded shared cache.
//!
//! Types declare which of their fields map to which remote buckets
//! (`employee_id` resolves through `employees/<id>`); attribute access is
//! lazy, tolerant of missing ids, and deduplicated by a process-wide LRU
//! cache. A deep injection engine walks into nested documents, batches the
//! foreign ids it finds at a path, and populates derived fields in place.
//!
//! ## Example
//!
//! ```no_run
//! use lka::{AppConfig, AttributeMemo, LookupRegistry, LookupSpec};
//! use serde_json::json;
//!
//! struct Employee;
//!
//! # async fn example() -> lka::Result<()> {
//! // At type-definition time
//! LookupRegistry::global()
//!     .register_lookup::<Employee>(LookupSpec::single("name", "employee_id"));
//!
//! // At process startup
//! let engine = lka::configure(&AppConfig::default())?;
//!
//! // On first attribute access
//! let record = json!({"employee_id": 1});
//! let memo = AttributeMemo::new();
//! let name = engine.attribute::<Employee>(&record, &memo, "name").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered split:
//!
//! - `domain` - error taxonomy, value objects, and port traits
//! - `application` - attribute registry, lazy resolver, injection engine
//! - `providers` - store, cache, and serialization driver backends
//! - `infrastructure` - configuration loading and runtime assembly

/// Domain layer - core types and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use lka_domain::*;
}

/// Application layer - registry, resolver, and injection engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use lka_application::*;
}

/// Provider implementations - stores, caches, and drivers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use lka_providers::*;
}

/// Infrastructure layer - configuration and runtime assembly
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use lka_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{
    Error, FieldSource, LookupCache, LookupKey, LookupStore, Result, SerializationDriver,
    StoredValue,
};

// Re-export the application surface at the crate root
pub use application::{
    AttributeMemo, InjectionSpec, LookupEngine, LookupEngineBuilder, LookupRegistry, LookupSpec,
};

// Re-export the configuration and runtime surface at the crate root
pub use infrastructure::{AppConfig, ConfigLoader, build_engine, configure, engine, init_logging};
