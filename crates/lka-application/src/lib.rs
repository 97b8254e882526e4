//! Application layer for lookaside
//!
//! Orchestrates the lookup domain: the attribute registry declares which
//! fields map to which remote buckets, the lazy resolver serves attribute
//! access through the shared cache, and the deep injection engine rewrites
//! nested documents with batched fetches. The [`LookupEngine`] facade ties
//! the pieces together behind one entry point.
//!
//! Provider implementations live in `lka-providers` and self-register into
//! the linkme slices declared under [`ports::registry`].

pub mod ports;
pub mod registry;
pub mod services;

// Re-export the main surface at the crate root
pub use registry::{InjectionSpec, LookupRegistry, LookupSpec};
pub use services::{AttributeMemo, InjectionEngine, LazyResolver, LookupEngine, LookupEngineBuilder};
