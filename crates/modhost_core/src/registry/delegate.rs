//! Registry resolution customization hooks.
//!
//! The provider only ever holds a delegate weakly: a delegate whose owner
//! has been dropped silently reverts every hook to its default behavior.

use crate::registry::class::ModuleClass;
use crate::registry::module::SingletonModule;
use std::sync::Arc;

/// Externally implemented customization hooks for registry resolution.
///
/// All hooks have default implementations equal to "no customization", so
/// implementers override only what they need.
pub trait ModuleRegistryDelegate: Send + Sync {
    /// Extra module classes to advertise in registries built while this
    /// delegate is set and alive.
    fn additional_module_classes(&self) -> Vec<ModuleClass> {
        Vec::new()
    }

    /// Customizes one singleton lookup.
    ///
    /// `resolved` carries the registry's default resolution; returning it
    /// unchanged keeps default behavior. Returning `None` vetoes the
    /// lookup, returning a different instance redirects it.
    fn resolve_singleton_module(
        &self,
        class: &ModuleClass,
        resolved: Option<Arc<dyn SingletonModule>>,
    ) -> Option<Arc<dyn SingletonModule>> {
        let _ = class;
        resolved
    }
}
