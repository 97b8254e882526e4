//! JSON serialization driver
//!
//! Decorates an emitted JSON document with a model's resolved attributes:
//! every resolved, aliased attribute lands under its exposed name,
//! overwriting a same-named base field. Attributes that resolved to null
//! are omitted, so a record with an absent id serializes exactly as it
//! would without any lookups registered.

use lka_domain::ports::SerializationDriver;
use serde_json::{Map, Value};

/// Merges resolved attributes into emitted JSON documents
#[derive(Debug, Clone, Default)]
pub struct JsonDriver;

impl JsonDriver {
    /// Create a new JSON driver
    pub fn new() -> Self {
        Self
    }
}

impl SerializationDriver for JsonDriver {
    fn decorate(&self, document: &mut Map<String, Value>, resolved: &Map<String, Value>) {
        for (name, value) in resolved {
            if !value.is_null() {
                document.insert(name.clone(), value.clone());
            }
        }
    }

    fn driver_name(&self) -> &str {
        "json"
    }
}

/// Driver that leaves emitted documents untouched
#[derive(Debug, Clone, Default)]
pub struct NoopDriver;

impl NoopDriver {
    /// Create a new no-op driver
    pub fn new() -> Self {
        Self
    }
}

impl SerializationDriver for NoopDriver {
    fn decorate(&self, _document: &mut Map<String, Value>, _resolved: &Map<String, Value>) {}

    fn driver_name(&self) -> &str {
        "noop"
    }
}
