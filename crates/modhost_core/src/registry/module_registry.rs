//! Per-instance module registry artifact.
//!
//! # Responsibility
//! - Expose the module classes and singleton instances one provider
//!   assembled, queryable by class.
//! - Stay a passive value object: no back-reference to the provider and
//!   no mutation after handoff.

use crate::registry::class::ModuleClass;
use crate::registry::descriptor::ModuleDescriptor;
use crate::registry::module::{downcast_singleton, SingletonModule};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Queryable collection of module classes and singleton-module instances.
pub struct ModuleRegistry {
    module_classes: BTreeSet<ModuleClass>,
    singleton_modules: BTreeMap<ModuleClass, Arc<dyn SingletonModule>>,
}

impl ModuleRegistry {
    pub(crate) fn new(
        module_classes: BTreeSet<ModuleClass>,
        singleton_modules: BTreeMap<ModuleClass, Arc<dyn SingletonModule>>,
    ) -> Self {
        Self {
            module_classes,
            singleton_modules,
        }
    }

    /// Returns all known module classes in stable name order.
    pub fn module_classes(&self) -> Vec<ModuleClass> {
        self.module_classes.iter().copied().collect()
    }

    /// Returns all singleton-module instances in stable class order.
    pub fn singleton_modules(&self) -> Vec<Arc<dyn SingletonModule>> {
        self.singleton_modules.values().cloned().collect()
    }

    /// Returns the singleton instance registered for one exact class.
    pub fn singleton_module_for_class(
        &self,
        class: &ModuleClass,
    ) -> Option<Arc<dyn SingletonModule>> {
        self.singleton_modules.get(class).cloned()
    }

    /// Returns the singleton instance for one concrete type.
    pub fn get_singleton<M: SingletonModule>(&self) -> Option<Arc<M>> {
        let module = self.singleton_module_for_class(&ModuleClass::of::<M>())?;
        downcast_singleton::<M>(module)
    }

    /// Returns whether one class is known to this registry.
    pub fn contains_class(&self, class: &ModuleClass) -> bool {
        self.module_classes.contains(class)
    }

    pub fn module_class_count(&self) -> usize {
        self.module_classes.len()
    }

    pub fn singleton_module_count(&self) -> usize {
        self.singleton_modules.len()
    }

    /// Builds a serializable summary for host diagnostics surfaces.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            module_classes: self
                .module_classes
                .iter()
                .map(|class| class.name().to_string())
                .collect(),
            singleton_modules: self
                .singleton_modules
                .values()
                .map(|module| module.descriptor())
                .collect(),
        }
    }
}

/// Serializable registry summary for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    /// Known module class names in stable order.
    pub module_classes: Vec<String>,
    /// Descriptors of registered singleton modules in stable order.
    pub singleton_modules: Vec<ModuleDescriptor>,
}
