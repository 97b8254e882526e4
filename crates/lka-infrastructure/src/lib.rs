//! Infrastructure layer for lookaside
//!
//! Cross-cutting technical concerns: loading the process-wide resolution
//! configuration, bootstrapping structured logging, and assembling the
//! engine from registered providers. The configuration is set once at
//! startup and read-only thereafter.

pub mod config;
pub mod constants;
pub mod logging;
pub mod runtime;

// Re-export the configuration surface
pub use config::{
    AppConfig, CacheConfig, ConfigLoader, LoggingConfig, SerializerConfig, StoreConfig,
};
pub use logging::init_logging;
pub use runtime::{build_engine, configure, engine, is_configured};
