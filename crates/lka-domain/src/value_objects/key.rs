//! Lookup Key Value Objects
//!
//! The key builder turns a source field name (and optional explicit bucket
//! override) into the `bucket/id` addressing unit used for both single and
//! batched fetches against the lookup store.

use crate::constants::{ID_FIELD_SUFFIX, KEY_SEPARATOR};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Derive the remote bucket name for an id field
///
/// An explicit bucket always wins verbatim. Otherwise the field name is
/// pluralized with a trailing `s`, after stripping an `_id` suffix when one
/// is present. Irregular plurals are out of scope.
///
/// ## Example
///
/// ```rust
/// use lka_domain::value_objects::derive_bucket;
///
/// assert_eq!(derive_bucket("employee_id", None), "employees");
/// assert_eq!(derive_bucket("id", None), "ids");
/// assert_eq!(derive_bucket("employee_id", Some("people")), "people");
/// ```
pub fn derive_bucket(field_name: &str, explicit: Option<&str>) -> String {
    if let Some(bucket) = explicit {
        return bucket.to_string();
    }
    let stem = field_name.strip_suffix(ID_FIELD_SUFFIX).unwrap_or(field_name);
    format!("{stem}s")
}

/// Render an id value into its key segment
///
/// Strings are used verbatim and numbers use their canonical display form.
/// Null and structured values carry no usable identifier and yield `None`,
/// which callers treat as an absent id (tolerant lookup).
pub fn render_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Value Object: Lookup Key
///
/// The addressing unit of the lookup store, rendered as `bucket/id`.
/// Keys are bucket-qualified so that identical ids from different entity
/// kinds never collide in the shared cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupKey {
    /// The remote store's namespace segment for a kind of entity
    pub bucket: String,
    /// The entity identifier within the bucket
    pub id: String,
}

impl LookupKey {
    /// Create a lookup key from a bucket and an id
    pub fn new<B: Into<String>, I: Into<String>>(bucket: B, id: I) -> Self {
        Self {
            bucket: bucket.into(),
            id: id.into(),
        }
    }

    /// Build a key for an id field, deriving the bucket when not explicit
    pub fn for_field(field_name: &str, explicit_bucket: Option<&str>, id: &str) -> Self {
        Self::new(derive_bucket(field_name, explicit_bucket), id)
    }

    /// The rendered `bucket/id` form used to address the store and cache
    pub fn render(&self) -> String {
        format!("{}{}{}", self.bucket, KEY_SEPARATOR, self.id)
    }
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.bucket, KEY_SEPARATOR, self.id)
    }
}
