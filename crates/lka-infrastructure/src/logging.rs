//! Structured logging with tracing
//!
//! Centralized logging bootstrap using the tracing ecosystem. The filter
//! comes from the `LKA_LOG` environment variable when set, otherwise from
//! the configured level; output is plain or JSON formatted.

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;
use lka_domain::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Initialize logging with the provided configuration
///
/// Errors if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // The json/plain builders are distinct types, so two branches
    if config.json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .map_err(|e| Error::config(format!("failed to initialize logging: {e}")))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .map_err(|e| Error::config(format!("failed to initialize logging: {e}")))?;
    }

    Ok(())
}
