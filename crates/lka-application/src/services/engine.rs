//! Engine facade
//!
//! One assembled entry point over the registry, the lazy resolver, the
//! injection engine, and the serialization driver. Built once at process
//! configuration time (see `lka-infrastructure`) or locally in tests.

use crate::registry::LookupRegistry;
use crate::services::injection::InjectionEngine;
use crate::services::resolver::{AttributeMemo, LazyResolver};
use lka_domain::error::{Error, Result};
use lka_domain::ports::{LookupCache, LookupStore, SerializationDriver};
use lka_domain::record::FieldSource;
use serde_json::{Map, Value};
use std::sync::Arc;

/// The lookup resolution and caching engine
///
/// ## Example
///
/// ```ignore
/// use lka_application::{LookupEngine, LookupSpec, AttributeMemo};
///
/// struct Employee;
///
/// let engine = LookupEngine::builder()
///     .with_store(store)
///     .with_cache(cache)
///     .with_driver(driver)
///     .build()?;
/// engine.registry().register_lookup::<Employee>(LookupSpec::single("name", "employee_id"));
///
/// let memo = AttributeMemo::new();
/// let name = engine.attribute::<Employee>(&record, &memo, "name").await?;
/// ```
pub struct LookupEngine {
    registry: Arc<LookupRegistry>,
    resolver: LazyResolver,
    injector: InjectionEngine,
    driver: Arc<dyn SerializationDriver>,
}

impl LookupEngine {
    /// Start building an engine
    pub fn builder() -> LookupEngineBuilder {
        LookupEngineBuilder::new()
    }

    /// The registry this engine consults
    pub fn registry(&self) -> &LookupRegistry {
        &self.registry
    }

    /// Resolve one exposed attribute of an instance, lazily
    ///
    /// The memo is instance-local: a first access resolves the owning spec
    /// and memoizes every attribute it exposes, later accesses are served
    /// from the memo.
    pub async fn attribute<T: 'static>(
        &self,
        record: &dyn FieldSource,
        memo: &AttributeMemo,
        name: &str,
    ) -> Result<Value> {
        if let Some(value) = memo.get(name) {
            return Ok(value);
        }

        let Some(spec) = self.registry.spec_for_attribute::<T>(name) else {
            return Err(Error::config(format!(
                "no lookup registered for attribute '{name}' on '{}'",
                std::any::type_name::<T>()
            )));
        };

        let resolved = self.resolver.resolve(record, &spec).await?;
        memo.record(&resolved);
        Ok(resolved.get(name).cloned().unwrap_or(Value::Null))
    }

    /// Resolve every effective lookup of a type for one instance
    ///
    /// Specs run ancestor-first in declaration order; already-memoized
    /// specs are served from the memo.
    pub async fn attributes<T: 'static>(
        &self,
        record: &dyn FieldSource,
        memo: &AttributeMemo,
    ) -> Result<Map<String, Value>> {
        let mut out = Map::new();
        for spec in self.registry.effective_lookups::<T>() {
            let memoized = spec.exposed_names().iter().all(|name| memo.is_resolved(name));
            if memoized {
                for name in spec.exposed_names() {
                    if let Some(value) = memo.get(name) {
                        out.insert(name.to_string(), value);
                    }
                }
                continue;
            }

            let resolved = self.resolver.resolve(record, &spec).await?;
            memo.record(&resolved);
            for (name, value) in resolved {
                out.insert(name, value);
            }
        }
        Ok(out)
    }

    /// Resolve a type's attributes and merge them into an emitted document
    /// through the serialization driver
    pub async fn decorate<T: 'static>(
        &self,
        record: &dyn FieldSource,
        memo: &AttributeMemo,
        document: &mut Map<String, Value>,
    ) -> Result<()> {
        let resolved = self.attributes::<T>(record, memo).await?;
        self.driver.decorate(document, &resolved);
        Ok(())
    }

    /// Apply a method's registered injections to its result
    pub async fn augment<T: 'static>(&self, method: &str, mut document: Value) -> Result<Value> {
        let specs = self.registry.injections::<T>(method);
        self.injector.apply(&mut document, &specs).await?;
        Ok(document)
    }
}

impl std::fmt::Debug for LookupEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupEngine")
            .field("resolver", &self.resolver)
            .field("injector", &self.injector)
            .field("driver", &self.driver.driver_name())
            .finish()
    }
}

/// Builder assembling a [`LookupEngine`] from its collaborators
#[derive(Default)]
pub struct LookupEngineBuilder {
    store: Option<Arc<dyn LookupStore>>,
    cache: Option<Arc<dyn LookupCache>>,
    driver: Option<Arc<dyn SerializationDriver>>,
    registry: Option<Arc<LookupRegistry>>,
}

impl LookupEngineBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup store
    pub fn with_store(mut self, store: Arc<dyn LookupStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the shared cache
    pub fn with_cache(mut self, cache: Arc<dyn LookupCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the serialization driver
    pub fn with_driver(mut self, driver: Arc<dyn SerializationDriver>) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Use a registry other than the process-wide one
    pub fn with_registry(mut self, registry: Arc<LookupRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Assemble the engine
    pub fn build(self) -> Result<LookupEngine> {
        let store = self
            .store
            .ok_or_else(|| Error::config("engine requires a lookup store"))?;
        let cache = self
            .cache
            .ok_or_else(|| Error::config("engine requires a lookup cache"))?;
        let driver = self
            .driver
            .ok_or_else(|| Error::config("engine requires a serialization driver"))?;
        let registry = self.registry.unwrap_or_else(LookupRegistry::global);

        Ok(LookupEngine {
            registry,
            resolver: LazyResolver::new(Arc::clone(&store), cache),
            injector: InjectionEngine::new(store),
            driver,
        })
    }
}
