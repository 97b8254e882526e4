//! Lookup and injection declarations
//!
//! A [`LookupSpec`] declares which source fields of a type resolve through
//! a remote bucket; an [`InjectionSpec`] declares how the result of one
//! method gets derived fields injected at a path. Both are immutable once
//! registered.

use lka_domain::value_objects::LookupKey;
use std::collections::HashMap;

/// A registered declaration of which fields drive a remote lookup and
/// where results land
///
/// # Example
///
/// ```rust
/// use lka_application::registry::LookupSpec;
///
/// // lookup [:name, :age], using: :id, as: {name: "nome"}
/// let spec = LookupSpec::new(["name", "age"], "id").with_alias("name", "nome");
/// assert_eq!(spec.exposed_names(), ["nome", "age"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSpec {
    /// Ordered set of fields plucked from the store payload
    source_fields: Vec<String>,
    /// Field on the instance supplying the identifier
    id_field: String,
    /// Explicit bucket override; derived from `id_field` when absent
    bucket: Option<String>,
    /// Source field name to exposed name
    aliases: HashMap<String, String>,
}

impl LookupSpec {
    /// Declare a lookup over one or more source fields
    ///
    /// Duplicate source fields collapse to their first occurrence so the
    /// set stays ordered.
    pub fn new<I, S>(source_fields: I, id_field: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: Vec<String> = Vec::new();
        for field in source_fields {
            let field = field.into();
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        Self {
            source_fields: fields,
            id_field: id_field.into(),
            bucket: None,
            aliases: HashMap::new(),
        }
    }

    /// Declare a single-field lookup
    pub fn single(source_field: impl Into<String>, id_field: impl Into<String>) -> Self {
        Self::new([source_field.into()], id_field)
    }

    /// Use an explicit bucket instead of deriving one from the id field
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Expose a source field under a different name
    pub fn with_alias(mut self, field: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(field.into(), alias.into());
        self
    }

    /// The ordered source fields
    pub fn source_fields(&self) -> &[String] {
        &self.source_fields
    }

    /// The field supplying the identifier
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// The explicit bucket override, if any
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Whether the spec expects a scalar payload rather than a record
    pub fn is_single(&self) -> bool {
        self.source_fields.len() == 1
    }

    /// The exposed name for a source field (its alias, or the field itself)
    pub fn exposed_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.aliases.get(field).map_or(field, String::as_str)
    }

    /// Every exposed name, in declaration order
    pub fn exposed_names(&self) -> Vec<&str> {
        self.source_fields
            .iter()
            .map(|field| self.exposed_name(field))
            .collect()
    }

    /// Whether this spec resolves the given exposed attribute
    pub fn exposes(&self, name: &str) -> bool {
        self.source_fields
            .iter()
            .any(|field| self.exposed_name(field) == name)
    }

    /// Build the lookup key for an id value
    pub fn key_for(&self, id: &str) -> LookupKey {
        LookupKey::for_field(&self.id_field, self.bucket(), id)
    }
}

/// A registered declaration of a deep injection applied to one method's
/// result
///
/// The path is kept as written and parsed at first use; a path that cannot
/// be located in the result surfaces as a configuration error rather than
/// being silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionSpec {
    /// Method whose result is post-processed
    method: String,
    /// Address of the node inside the result
    path: String,
    /// Field holding the foreign id(s) at the node
    id_field: String,
    /// Explicit bucket override; derived from `id_field` when absent
    bucket: Option<String>,
    /// Field populated with the fetched values
    target_field: String,
}

impl InjectionSpec {
    /// Declare an injection for a method's result
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        id_field: impl Into<String>,
        target_field: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            id_field: id_field.into(),
            bucket: None,
            target_field: target_field.into(),
        }
    }

    /// Use an explicit bucket instead of deriving one from the id field
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// The method whose result is post-processed
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The path expression as registered
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The field holding the foreign id(s)
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// The explicit bucket override, if any
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The field populated with fetched values
    pub fn target_field(&self) -> &str {
        &self.target_field
    }

    /// Build the lookup key for an id value
    pub fn key_for(&self, id: &str) -> LookupKey {
        LookupKey::for_field(&self.id_field, self.bucket(), id)
    }
}
