//! Attribute Registry
//!
//! A process-wide table of lookup and injection declarations keyed by type
//! identity. Types register their specs once, at definition time; subtype
//! relationships are declared explicitly and the effective spec set of a
//! type is the union of its own and all ancestors' entries. A subtype can
//! only ever add specs; nothing is removed or overridden.
//!
//! The merged enumeration order is ancestor-first, declaration order within
//! each type.

/// Lookup and injection spec types
pub mod spec;

pub use spec::{InjectionSpec, LookupSpec};

use lka_domain::error::{Error, Result};
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Default)]
struct TypeEntry {
    type_name: &'static str,
    parent: Option<TypeId>,
    lookups: Vec<Arc<LookupSpec>>,
    injections: Vec<Arc<InjectionSpec>>,
}

/// Registry of per-type lookup and injection declarations
///
/// Most applications use the process-wide instance returned by
/// [`LookupRegistry::global`]; tests build local registries to keep their
/// declarations isolated.
#[derive(Debug, Default)]
pub struct LookupRegistry {
    types: RwLock<HashMap<TypeId, TypeEntry>>,
}

impl LookupRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    ///
    /// Types registering at definition time and engines built by the
    /// runtime share this instance; tests use local registries instead.
    pub fn global() -> Arc<LookupRegistry> {
        static GLOBAL: OnceLock<Arc<LookupRegistry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(LookupRegistry::new())))
    }

    /// Register a lookup spec on a type
    pub fn register_lookup<T: 'static>(&self, spec: LookupSpec) {
        let mut types = self.types.write();
        let entry = types.entry(TypeId::of::<T>()).or_default();
        entry.type_name = std::any::type_name::<T>();
        entry.lookups.push(Arc::new(spec));
    }

    /// Register an injection spec on a type
    pub fn register_injection<T: 'static>(&self, spec: InjectionSpec) {
        let mut types = self.types.write();
        let entry = types.entry(TypeId::of::<T>()).or_default();
        entry.type_name = std::any::type_name::<T>();
        entry.injections.push(Arc::new(spec));
    }

    /// Declare `P` as the ancestor of `T`
    ///
    /// The link is set once; re-declaring a different parent or forming a
    /// cycle is a configuration error.
    pub fn register_parent<T: 'static, P: 'static>(&self) -> Result<()> {
        let child = TypeId::of::<T>();
        let parent = TypeId::of::<P>();
        if child == parent {
            return Err(Error::config(format!(
                "type '{}' cannot be its own ancestor",
                std::any::type_name::<T>()
            )));
        }

        let mut types = self.types.write();

        // Walking up from the prospective parent must never reach the child
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(Error::config(format!(
                    "ancestor cycle between '{}' and '{}'",
                    std::any::type_name::<T>(),
                    std::any::type_name::<P>()
                )));
            }
            cursor = types.get(&id).and_then(|entry| entry.parent);
        }

        let entry = types.entry(child).or_default();
        entry.type_name = std::any::type_name::<T>();
        match entry.parent {
            Some(existing) if existing != parent => Err(Error::config(format!(
                "type '{}' already has a different ancestor",
                std::any::type_name::<T>()
            ))),
            _ => {
                entry.parent = Some(parent);
                Ok(())
            }
        }
    }

    /// Every lookup spec consulted for `T`, ancestor-first
    pub fn effective_lookups<T: 'static>(&self) -> Vec<Arc<LookupSpec>> {
        let types = self.types.read();
        let mut chain = Vec::new();
        let mut cursor = Some(TypeId::of::<T>());
        while let Some(id) = cursor {
            chain.push(id);
            cursor = types.get(&id).and_then(|entry| entry.parent);
        }

        // chain is most-derived first; emit ancestor-first
        chain
            .iter()
            .rev()
            .filter_map(|id| types.get(id))
            .flat_map(|entry| entry.lookups.iter().cloned())
            .collect()
    }

    /// The injection specs registered for one of `T`'s methods, in
    /// registration order
    pub fn injections<T: 'static>(&self, method: &str) -> Vec<Arc<InjectionSpec>> {
        let types = self.types.read();
        types
            .get(&TypeId::of::<T>())
            .map(|entry| {
                entry
                    .injections
                    .iter()
                    .filter(|spec| spec.method() == method)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every exposed attribute name of `T`, ancestor-first and
    /// declaration-ordered, for the serialization integration
    pub fn exposed_attributes<T: 'static>(&self) -> Vec<String> {
        let mut names = Vec::new();
        for spec in self.effective_lookups::<T>() {
            for name in spec.exposed_names() {
                if !names.iter().any(|existing| existing == name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    /// The spec that resolves the given exposed attribute of `T`
    ///
    /// When both an ancestor and the subtype expose the same name, the
    /// most-derived declaration wins for direct attribute access.
    pub fn spec_for_attribute<T: 'static>(&self, name: &str) -> Option<Arc<LookupSpec>> {
        self.effective_lookups::<T>()
            .into_iter()
            .rev()
            .find(|spec| spec.exposes(name))
    }

    /// The registered name of a type, for diagnostics
    pub fn type_name<T: 'static>(&self) -> Option<&'static str> {
        self.types
            .read()
            .get(&TypeId::of::<T>())
            .map(|entry| entry.type_name)
    }
}
