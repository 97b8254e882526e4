//! Serialization Integration Port
//!
//! Port for the external serialization/ORM integration. The core does not
//! interpret the driver beyond handing it the resolved attributes for a
//! type so the integration can include them in an emitted document; which
//! exposed attributes exist comes from the attribute registry.

use serde_json::{Map, Value};

/// Serialization driver consulted when a model's resolved attributes are
/// emitted
pub trait SerializationDriver: Send + Sync {
    /// Merge resolved, aliased attributes into an emitted document
    ///
    /// `resolved` maps exposed attribute names to their values, null for
    /// attributes whose lookup resolved to absent. The driver owns the
    /// merge policy (overwrite, skip-null, ignore entirely).
    fn decorate(&self, document: &mut Map<String, Value>, resolved: &Map<String, Value>);

    /// Unique driver name (e.g. "json", "noop")
    fn driver_name(&self) -> &str;
}
