//! Application Ports
//!
//! Registration surfaces the application layer exposes to the outer
//! layers: the provider registries that store and cache implementations
//! self-register into.

/// Provider registries
pub mod registry;
