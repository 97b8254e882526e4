//! Record abstraction
//!
//! The resolver reads foreign-key identifiers off "record-like" instances:
//! application structs, deserialized documents, or plain JSON objects.
//! [`FieldSource`] is the seam between those shapes and the engine; it only
//! ever needs read access to named fields.

use serde_json::{Map, Value};

/// Named-field read access on a record-like instance
///
/// Returning `None` (or an explicit JSON null) for an id field triggers
/// tolerant lookup: the attribute resolves to null with zero store calls.
pub trait FieldSource: Send + Sync {
    /// Read a field by name
    fn field(&self, name: &str) -> Option<Value>;
}

impl FieldSource for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Object-shaped values expose their members; every other shape has no
/// named fields.
impl FieldSource for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(name)).cloned()
    }
}
