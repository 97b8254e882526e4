//! Deep Injection Engine
//!
//! Walks into a nested document, collects foreign ids at an addressed
//! node, issues one batched fetch, and writes the results back in the
//! shape the node already has. Two shapes are addressable: a list of
//! records each carrying the id field, and a columnar mapping holding an
//! array of ids under the id field.

use crate::registry::InjectionSpec;
use lka_domain::error::{Error, Result};
use lka_domain::ports::LookupStore;
use lka_domain::value_objects::{DocumentPath, LookupKey, render_id};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, trace};

/// Applies registered injections to method results
pub struct InjectionEngine {
    store: Arc<dyn LookupStore>,
}

impl InjectionEngine {
    /// Create an injection engine over a lookup store
    pub fn new(store: Arc<dyn LookupStore>) -> Self {
        Self { store }
    }

    /// Apply a method's injection specs, in registration order
    ///
    /// Each spec independently locates its node in the document as left by
    /// the prior spec.
    pub async fn apply(&self, document: &mut Value, specs: &[Arc<InjectionSpec>]) -> Result<()> {
        for spec in specs {
            self.apply_one(document, spec).await?;
        }
        Ok(())
    }

    async fn apply_one(&self, document: &mut Value, spec: &InjectionSpec) -> Result<()> {
        let path = DocumentPath::parse(spec.path())?;
        let node = locate_mut(document, &path)?;

        match node {
            Value::Array(records) => self.inject_records(records, spec, &path).await,
            Value::Object(map) => self.inject_columnar(map, spec, &path).await,
            _ => Err(Error::malformed_path(
                path.raw(),
                "node is neither a list of records nor a columnar mapping",
            )),
        }
    }

    /// List-of-records shape: one value per record carrying the id field
    ///
    /// Records without the id field (or with a non-scalar id) contribute
    /// nothing and are left untouched.
    async fn inject_records(
        &self,
        records: &mut [Value],
        spec: &InjectionSpec,
        path: &DocumentPath,
    ) -> Result<()> {
        let mut contributing: Vec<(usize, String)> = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let Some(fields) = record.as_object() else {
                return Err(Error::malformed_path(
                    path.raw(),
                    format!("element {index} is not a record"),
                ));
            };
            if let Some(id) = fields.get(spec.id_field()).and_then(|value| render_id(value)) {
                contributing.push((index, id));
            }
        }

        if contributing.is_empty() {
            trace!(path = path.raw(), "no ids at node, skipping injection");
            return Ok(());
        }

        let keys: Vec<LookupKey> = contributing.iter().map(|(_, id)| spec.key_for(id)).collect();
        let values = self.fetch_batch(&keys).await?;

        for ((index, _), value) in contributing.into_iter().zip(values) {
            if let Some(fields) = records[index].as_object_mut() {
                fields.insert(
                    spec.target_field().to_string(),
                    value.map_or(Value::Null, Value::String),
                );
            }
        }
        Ok(())
    }

    /// Columnar shape: a parallel array of values under the target field
    ///
    /// A mapping without the id field (including an empty mapping) is left
    /// structurally unchanged with zero store calls.
    async fn inject_columnar(
        &self,
        node: &mut Map<String, Value>,
        spec: &InjectionSpec,
        path: &DocumentPath,
    ) -> Result<()> {
        let Some(column) = node.get(spec.id_field()) else {
            trace!(path = path.raw(), "no id column at node, skipping injection");
            return Ok(());
        };
        let Value::Array(raw_ids) = column else {
            return Err(Error::malformed_path(
                path.raw(),
                format!("id field '{}' is not an array", spec.id_field()),
            ));
        };
        if raw_ids.is_empty() {
            return Ok(());
        }

        // Positional alignment of the result column requires every id to
        // be a scalar.
        let mut ids = Vec::with_capacity(raw_ids.len());
        for (position, raw) in raw_ids.iter().enumerate() {
            let Some(id) = render_id(raw) else {
                return Err(Error::malformed_path(
                    path.raw(),
                    format!("columnar id at position {position} is not a scalar"),
                ));
            };
            ids.push(id);
        }

        let keys: Vec<LookupKey> = ids.iter().map(|id| spec.key_for(id)).collect();
        let values = self.fetch_batch(&keys).await?;

        node.insert(
            spec.target_field().to_string(),
            Value::Array(
                values
                    .into_iter()
                    .map(|value| value.map_or(Value::Null, Value::String))
                    .collect(),
            ),
        );
        Ok(())
    }

    /// Exactly one batched fetch per spec application
    async fn fetch_batch(&self, keys: &[LookupKey]) -> Result<Vec<Option<String>>> {
        debug!(batch = keys.len(), "issuing batched lookup");
        let values = self.store.fetch_many(keys).await?;
        if values.len() != keys.len() {
            return Err(Error::store(format!(
                "batched fetch returned {} values for {} keys",
                values.len(),
                keys.len()
            )));
        }
        Ok(values)
    }
}

/// Locate the node addressed by a path, erroring on missing or
/// non-traversable segments
fn locate_mut<'a>(document: &'a mut Value, path: &DocumentPath) -> Result<&'a mut Value> {
    let mut current = document;
    for segment in path.segments() {
        let Some(fields) = current.as_object_mut() else {
            return Err(Error::malformed_path(
                path.raw(),
                format!("segment '{segment}' is not addressed through a mapping"),
            ));
        };
        current = fields.get_mut(segment).ok_or_else(|| {
            Error::malformed_path(path.raw(), format!("no node named '{segment}'"))
        })?;
    }
    Ok(current)
}

impl std::fmt::Debug for InjectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionEngine")
            .field("store", &self.store.provider_name())
            .finish()
    }
}
