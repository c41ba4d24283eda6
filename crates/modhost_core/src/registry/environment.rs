//! Process-wide module environment.
//!
//! # Responsibility
//! - Hold the universe of module classes and singleton-module instances the
//!   host environment advertises, independent of any one provider.
//! - Stay test-constructible: the environment is an ordinary value that is
//!   optionally installed as the process global, not implicit static state.
//!
//! # Invariants
//! - At most one global environment per process; re-install is rejected.
//! - The installed environment is immutable, so concurrent readers need no
//!   locking.
//! - Lookups against a missing global environment return empty results.

use crate::registry::class::ModuleClass;
use crate::registry::module::SingletonModule;
use crate::registry::provider::{validate_registration, RegistryConfigError};
use log::info;
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

static GLOBAL_ENVIRONMENT: OnceCell<ModuleEnvironment> = OnceCell::new();

/// Registry service for the process-wide class and singleton universe.
#[derive(Default)]
pub struct ModuleEnvironment {
    module_classes: BTreeSet<ModuleClass>,
    singleton_modules: BTreeMap<ModuleClass, Arc<dyn SingletonModule>>,
}

impl ModuleEnvironment {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertises one module class in the universe.
    ///
    /// # Errors
    /// - The class is already advertised (directly or through a singleton
    ///   registration).
    pub fn register_module_class(&mut self, class: ModuleClass) -> Result<(), RegistryConfigError> {
        if !self.module_classes.insert(class) {
            return Err(RegistryConfigError::DuplicateModuleClass(class));
        }
        Ok(())
    }

    /// Registers one singleton-module instance and advertises its class.
    ///
    /// # Errors
    /// - The module's descriptor fails validation.
    /// - The module misreports its concrete class.
    /// - The class is already registered.
    pub fn register_singleton_module(
        &mut self,
        module: Arc<dyn SingletonModule>,
    ) -> Result<(), RegistryConfigError> {
        let class = validate_registration(&module)?;
        if self.singleton_modules.contains_key(&class) {
            return Err(RegistryConfigError::DuplicateModuleClass(class));
        }
        self.module_classes.insert(class);
        self.singleton_modules.insert(class, module);
        Ok(())
    }

    /// Returns all advertised module classes in stable name order.
    pub fn module_classes(&self) -> Vec<ModuleClass> {
        self.module_classes.iter().copied().collect()
    }

    /// Returns all registered singleton modules in stable class order.
    pub fn singleton_modules(&self) -> Vec<Arc<dyn SingletonModule>> {
        self.singleton_modules.values().cloned().collect()
    }

    /// Looks up one singleton by exact class match.
    pub fn singleton_module_for_class(
        &self,
        class: &ModuleClass,
    ) -> Option<Arc<dyn SingletonModule>> {
        self.singleton_modules.get(class).cloned()
    }

    pub fn module_class_count(&self) -> usize {
        self.module_classes.len()
    }

    pub fn singleton_module_count(&self) -> usize {
        self.singleton_modules.len()
    }
}

/// Installs one environment as the process-wide global.
///
/// # Errors
/// - A global environment was already installed.
pub fn install_global(environment: ModuleEnvironment) -> Result<(), RegistryConfigError> {
    let class_count = environment.module_class_count();
    let singleton_count = environment.singleton_module_count();
    GLOBAL_ENVIRONMENT
        .set(environment)
        .map_err(|_| RegistryConfigError::EnvironmentAlreadyInstalled)?;
    info!(
        "event=environment_installed module=core status=ok class_count={} singleton_count={}",
        class_count, singleton_count
    );
    Ok(())
}

/// Returns the installed global environment, when present.
pub fn global() -> Option<&'static ModuleEnvironment> {
    GLOBAL_ENVIRONMENT.get()
}
