//! Configuration types

use lka_domain::constants::CACHE_DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Lookup store backend
    pub store: StoreConfig,

    /// Shared cache bounds and switch
    pub cache: CacheConfig,

    /// Serialization integration
    pub serializer: SerializerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Lookup store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store provider name (e.g. "memory", "redis")
    pub provider: String,

    /// Connection URL (for remote stores)
    pub url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: "memory".to_string(),
            url: None,
        }
    }
}

/// Shared cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache enabled; when false every resolution hits the store
    pub enabled: bool,

    /// Cache provider name used when enabled
    pub provider: String,

    /// Maximum number of entries the cache may hold
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "memory".to_string(),
            capacity: CACHE_DEFAULT_CAPACITY,
        }
    }
}

/// Serialization integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Driver name (e.g. "json", "noop")
    pub driver: String,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            driver: "json".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "lka_application=debug")
    pub level: String,

    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
