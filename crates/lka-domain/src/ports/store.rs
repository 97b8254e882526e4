//! Lookup Store Port
//!
//! Port for the remote key-value store holding the referenced entities.
//! The engine only ever issues reads: single-key gets during lazy
//! resolution and one batched get per deep-injection application.

use crate::error::Result;
use crate::value_objects::LookupKey;
use async_trait::async_trait;

/// Remote key-value lookup store
///
/// A payload is either a scalar string or a serialized structured record;
/// the resolver decides which shape it expects from the lookup spec.
/// `None` signals "no such entity" and is cacheable as such.
///
/// Transport failures surface as [`Error::Store`](crate::error::Error) and
/// are never swallowed or retried inside the engine.
#[async_trait]
pub trait LookupStore: Send + Sync {
    /// Fetch a single entity payload
    async fn fetch_one(&self, key: &LookupKey) -> Result<Option<String>>;

    /// Fetch a batch of entity payloads
    ///
    /// The returned sequence must align positionally with `keys`, one
    /// element per key; a response of a different length is a store error.
    async fn fetch_many(&self, keys: &[LookupKey]) -> Result<Vec<Option<String>>>;

    /// Unique provider name (e.g. "memory", "redis")
    fn provider_name(&self) -> &str;
}
