//! Value objects of the lookup domain
//!
//! Small immutable types with no identity of their own: lookup keys and
//! bucket derivation, document path expressions, and the raw payloads the
//! shared cache holds.

/// Lookup key construction and bucket derivation
pub mod key;
/// Path expressions into semi-structured documents
pub mod path;
/// Raw store payloads as held by the shared cache
pub mod value;

// Re-export value objects
pub use key::{LookupKey, derive_bucket, render_id};
pub use path::DocumentPath;
pub use value::StoredValue;
