//! Collaborator Ports
//!
//! Interfaces for the external services the engine depends on. The core
//! never talks to a concrete backend; implementations live in
//! `lka-providers` and are wired in by `lka-infrastructure`.
//!
//! ## Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`LookupStore`] | Remote key-value store with single and batched gets |
//! | [`LookupCache`] | Process-wide bounded cache of resolved payloads |
//! | [`SerializationDriver`] | Integration that merges resolved attributes into emitted documents |

/// Shared cache port
pub mod cache;
/// Serialization integration port
pub mod serializer;
/// Lookup store port
pub mod store;

// Re-export ports
pub use cache::{CacheStats, LookupCache};
pub use serializer::SerializationDriver;
pub use store::LookupStore;
