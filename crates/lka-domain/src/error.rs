//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the lookup resolution engine
///
/// A missing identifier on an instance is deliberately absent from this
/// taxonomy: tolerant lookup resolves it to null without touching the
/// store, so it is not a failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Lookup store call failed (transport or service error)
    #[error("Lookup store error: {message}")]
    Store {
        /// Description of the store failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An injection path references a node that does not exist or is not addressable
    #[error("Malformed path '{path}': {message}")]
    MalformedPath {
        /// The path expression as registered
        path: String,
        /// Description of what went wrong while locating the node
        message: String,
    },

    /// The store payload does not match the shape the lookup spec expects
    #[error("Shape mismatch for '{key}': {message}")]
    ShapeMismatch {
        /// The lookup key whose payload was rejected
        key: String,
        /// Description of the expected/actual shapes
        message: String,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Store error creation methods
impl Error {
    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error with source
    pub fn store_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a malformed path error
    pub fn malformed_path<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::MalformedPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch<K: Into<String>, S: Into<String>>(key: K, message: S) -> Self {
        Self::ShapeMismatch {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
