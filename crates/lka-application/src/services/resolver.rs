//! Lazy Resolver
//!
//! Resolves a registered lookup for one instance: reads the driving id,
//! consults the shared cache, falls back to the store, and projects the
//! raw payload into exposed attribute values. Resolution happens on first
//! attribute access, never at construction.

use crate::registry::LookupSpec;
use lka_domain::error::{Error, Result};
use lka_domain::ports::{LookupCache, LookupStore};
use lka_domain::record::FieldSource;
use lka_domain::value_objects::{LookupKey, StoredValue, render_id};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Resolves registered lookups against the cache and store
pub struct LazyResolver {
    store: Arc<dyn LookupStore>,
    cache: Arc<dyn LookupCache>,
}

impl LazyResolver {
    /// Create a resolver over a store and a shared cache
    pub fn new(store: Arc<dyn LookupStore>, cache: Arc<dyn LookupCache>) -> Self {
        Self { store, cache }
    }

    /// Resolve a lookup spec for one instance
    ///
    /// Returns a mapping of exposed attribute name to value. An absent or
    /// null id resolves every exposed name to null without touching the
    /// cache or the store (tolerant lookup).
    pub async fn resolve(
        &self,
        record: &dyn FieldSource,
        spec: &LookupSpec,
    ) -> Result<Map<String, Value>> {
        let id = record
            .field(spec.id_field())
            .as_ref()
            .and_then(render_id);

        let Some(id) = id else {
            trace!(id_field = spec.id_field(), "id absent, tolerant lookup");
            return Ok(Self::absent(spec));
        };

        let key = spec.key_for(&id);
        let raw = self.fetch_raw(&key).await?;
        Self::project(spec, &key, &raw)
    }

    /// Fetch a raw payload, cache-first
    ///
    /// A store failure propagates without writing to the cache; an empty
    /// store response is cached as [`StoredValue::Missing`] so it is not
    /// re-fetched.
    async fn fetch_raw(&self, key: &LookupKey) -> Result<StoredValue> {
        let rendered = key.render();

        if let Some(hit) = self.cache.get(&rendered).await? {
            trace!(key = %rendered, "cache hit");
            return Ok(hit);
        }

        debug!(key = %rendered, "cache miss, fetching from store");
        let fetched = StoredValue::from_response(self.store.fetch_one(key).await?);
        self.cache.put(&rendered, fetched.clone()).await?;
        Ok(fetched)
    }

    /// Project a raw payload into exposed attribute values
    fn project(spec: &LookupSpec, key: &LookupKey, raw: &StoredValue) -> Result<Map<String, Value>> {
        let Some(payload) = raw.payload() else {
            return Ok(Self::absent(spec));
        };

        if spec.is_single() {
            // A structured payload where a scalar is declared is a
            // mismatch, not something to coerce silently.
            if let Ok(parsed) = serde_json::from_str::<Value>(payload) {
                if parsed.is_object() || parsed.is_array() {
                    return Err(Error::shape_mismatch(
                        key.render(),
                        "single-field lookup received a structured payload",
                    ));
                }
            }
            let mut out = Map::new();
            let field = &spec.source_fields()[0];
            out.insert(
                spec.exposed_name(field).to_string(),
                Value::String(payload.to_string()),
            );
            return Ok(out);
        }

        let parsed: Value = serde_json::from_str(payload).map_err(|_| {
            Error::shape_mismatch(
                key.render(),
                "multi-field lookup received a payload that is not a record",
            )
        })?;
        let Some(fields) = parsed.as_object() else {
            return Err(Error::shape_mismatch(
                key.render(),
                "multi-field lookup received a non-record payload",
            ));
        };

        // Pluck only the declared fields; extras in the payload are ignored
        let mut out = Map::new();
        for field in spec.source_fields() {
            let value = fields.get(field).cloned().unwrap_or(Value::Null);
            out.insert(spec.exposed_name(field).to_string(), value);
        }
        Ok(out)
    }

    /// Every exposed name resolved to null
    fn absent(spec: &LookupSpec) -> Map<String, Value> {
        let mut out = Map::new();
        for name in spec.exposed_names() {
            out.insert(name.to_string(), Value::Null);
        }
        out
    }
}

impl std::fmt::Debug for LazyResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyResolver")
            .field("store", &self.store.provider_name())
            .field("cache", &self.cache.provider_name())
            .finish()
    }
}

/// Instance-local memo of resolved exposed attributes
///
/// Embeds the tri-state each derived attribute moves through: absent from
/// the memo (not yet resolved), present with a value, or present with null
/// (resolved, entity or field absent). Repeated access of a memoized
/// attribute re-triggers nothing; the memo is per-instance and never
/// short-circuits resolution for other instances or other keys.
#[derive(Debug, Default)]
pub struct AttributeMemo {
    resolved: Mutex<HashMap<String, Value>>,
}

impl AttributeMemo {
    /// Create an empty memo
    pub fn new() -> Self {
        Self::default()
    }

    /// The memoized value of an exposed attribute, if resolved
    pub fn get(&self, name: &str) -> Option<Value> {
        self.resolved.lock().get(name).cloned()
    }

    /// Whether an exposed attribute has been resolved
    pub fn is_resolved(&self, name: &str) -> bool {
        self.resolved.lock().contains_key(name)
    }

    /// Memoize a batch of resolved attributes
    pub fn record(&self, resolved: &Map<String, Value>) {
        let mut memo = self.resolved.lock();
        for (name, value) in resolved {
            memo.insert(name.clone(), value.clone());
        }
    }
}
