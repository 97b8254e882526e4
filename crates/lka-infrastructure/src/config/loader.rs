//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values, merged with Figment.

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use lka_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources
    /// override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix (e.g. `LKA_CACHE_CAPACITY`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                debug!(path = %config_path.display(), "loading configuration file");
                figment = figment.merge(Toml::file(config_path));
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            debug!(path = %default_path.display(), "loading configuration file");
            figment = figment.merge(Toml::file(&default_path));
        }

        // Underscore-separated nesting, e.g. LKA_CACHE_CAPACITY
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        let app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config_with_source("failed to extract configuration", e))?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| Error::config_with_source("failed to serialize config to TOML", e))?;

        std::fs::write(path.as_ref(), toml_string)
            .map_err(|e| Error::config_with_source("failed to write config file", e))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the default configuration file, if one exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME),
        ];

        candidates.into_iter().find(|path| path.exists())
    }

    /// Reject configurations the engine cannot honor
    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if config.store.provider.is_empty() {
            return Err(Error::config("store.provider must not be empty"));
        }
        if config.cache.enabled && config.cache.capacity == 0 {
            return Err(Error::config(
                "cache.capacity must be positive when the cache is enabled",
            ));
        }
        if config.serializer.driver.is_empty() {
            return Err(Error::config("serializer.driver must not be empty"));
        }
        Ok(())
    }
}
