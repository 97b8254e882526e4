//! Domain layer for lookaside
//!
//! Core types shared by every other layer: the error taxonomy, the value
//! objects that describe lookup keys and semi-structured documents, the
//! record abstraction, and the port traits for the external collaborators
//! (lookup store, shared cache, serialization driver).
//!
//! This crate has no provider or runtime dependencies; implementations of
//! the ports live in `lka-providers`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod record;
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use ports::{CacheStats, LookupCache, LookupStore, SerializationDriver};
pub use record::FieldSource;
pub use value_objects::{DocumentPath, LookupKey, StoredValue, derive_bucket, render_id};
