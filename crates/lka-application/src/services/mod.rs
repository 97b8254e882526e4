//! Application Services
//!
//! The lazy resolver serves single-attribute access through the shared
//! cache, the injection engine rewrites nested documents with batched
//! fetches, and the engine facade ties both to the attribute registry and
//! the serialization driver.

/// Engine facade and builder
pub mod engine;
/// Deep injection engine
pub mod injection;
/// Lazy attribute resolver
pub mod resolver;

pub use engine::{LookupEngine, LookupEngineBuilder};
pub use injection::InjectionEngine;
pub use resolver::{AttributeMemo, LazyResolver};
