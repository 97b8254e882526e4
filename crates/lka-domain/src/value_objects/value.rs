//! Stored Value Objects
//!
//! The raw payload unit held by the shared cache. The cache must be able to
//! tell "fetched and empty" apart from "not yet fetched": the former is a
//! cached [`StoredValue::Missing`] and is never re-fetched, the latter is a
//! plain cache miss.

use serde::{Deserialize, Serialize};

/// Value Object: a raw store payload as cached
///
/// Values are immutable once cached; a hit is always served as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoredValue {
    /// The store returned a payload for the key
    Present(String),
    /// The store was consulted and holds no entity for the key
    Missing,
}

impl StoredValue {
    /// Build from a store response
    pub fn from_response(payload: Option<String>) -> Self {
        match payload {
            Some(raw) => Self::Present(raw),
            None => Self::Missing,
        }
    }

    /// The raw payload, if the entity exists
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Present(raw) => Some(raw),
            Self::Missing => None,
        }
    }

    /// Whether the store had no entity for the key
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<Option<String>> for StoredValue {
    fn from(payload: Option<String>) -> Self {
        Self::from_response(payload)
    }
}
