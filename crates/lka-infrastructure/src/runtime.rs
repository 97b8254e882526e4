//! Runtime assembly
//!
//! Builds the lookup engine from the loaded configuration by resolving
//! providers through the linkme registries, and holds the set-once
//! process-wide engine. Reconfiguring a running process is not supported:
//! the global is written exactly once and read-only thereafter.

use crate::config::AppConfig;
use lka_application::ports::registry::{
    CacheProviderConfig, StoreProviderConfig, resolve_cache_provider, resolve_store_provider,
};
use lka_application::registry::LookupRegistry;
use lka_application::services::LookupEngine;
use lka_domain::error::{Error, Result};
use lka_domain::ports::{LookupCache, SerializationDriver};
use lka_providers::serializer::{JsonDriver, NoopDriver};
use std::sync::{Arc, OnceLock};
use tracing::info;

static ENGINE: OnceLock<Arc<LookupEngine>> = OnceLock::new();

/// Build an engine from a configuration without installing it
///
/// The engine shares the process-wide attribute registry, so lookups
/// registered at type-definition time are visible to it.
pub fn build_engine(config: &AppConfig) -> Result<Arc<LookupEngine>> {
    let mut store_config = StoreProviderConfig::new(config.store.provider.as_str());
    if let Some(url) = &config.store.url {
        store_config = store_config.with_url(url.as_str());
    }
    let store = resolve_store_provider(&store_config).map_err(Error::config)?;

    let cache: Arc<dyn LookupCache> = if config.cache.enabled {
        resolve_cache_provider(
            &CacheProviderConfig::new(config.cache.provider.as_str())
                .with_capacity(config.cache.capacity),
        )
        .map_err(Error::config)?
    } else {
        // Caching off: every resolution goes to the store
        resolve_cache_provider(&CacheProviderConfig::new("null")).map_err(Error::config)?
    };

    let driver = resolve_driver(&config.serializer.driver)?;

    info!(
        store = store.provider_name(),
        cache = cache.provider_name(),
        driver = driver.driver_name(),
        "assembled lookup engine"
    );

    let engine = LookupEngine::builder()
        .with_store(store)
        .with_cache(cache)
        .with_driver(driver)
        .with_registry(LookupRegistry::global())
        .build()?;

    Ok(Arc::new(engine))
}

fn resolve_driver(name: &str) -> Result<Arc<dyn SerializationDriver>> {
    match name {
        "json" => Ok(Arc::new(JsonDriver::new())),
        "noop" => Ok(Arc::new(NoopDriver::new())),
        other => Err(Error::config(format!(
            "unknown serialization driver '{other}'"
        ))),
    }
}

/// Build and install the process-wide engine
///
/// May be called exactly once, at startup; a second call is a
/// configuration error and leaves the installed engine untouched.
pub fn configure(config: &AppConfig) -> Result<Arc<LookupEngine>> {
    let engine = build_engine(config)?;
    ENGINE
        .set(Arc::clone(&engine))
        .map_err(|_| Error::config("lookup engine is already configured"))?;
    Ok(engine)
}

/// The process-wide engine installed by [`configure`]
pub fn engine() -> Result<Arc<LookupEngine>> {
    ENGINE
        .get()
        .cloned()
        .ok_or_else(|| Error::config("lookup engine is not configured; call configure() at startup"))
}

/// Whether [`configure`] has run
pub fn is_configured() -> bool {
    ENGINE.get().is_some()
}
