//! Module registry provider.
//!
//! # Responsibility
//! - Own the mapping from singleton-module class to singleton instance for
//!   one host session and produce the queryable [`ModuleRegistry`].
//! - Route process-wide class/singleton enumeration through the installed
//!   [`ModuleEnvironment`](crate::registry::environment::ModuleEnvironment).
//!
//! # Invariants
//! - Singleton modules are unique by concrete class within one provider;
//!   duplicates fail construction instead of silently overwriting.
//! - The delegate is held weakly and its absence is never an error.
//! - A handed-off registry is never mutated retroactively; delegate changes
//!   only affect later builds and lookups.

use crate::registry::class::ModuleClass;
use crate::registry::delegate::ModuleRegistryDelegate;
use crate::registry::descriptor::DescriptorValidationError;
use crate::registry::environment;
use crate::registry::module::SingletonModule;
use crate::registry::module_registry::ModuleRegistry;
use log::info;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Weak};

/// Registry configuration errors.
///
/// All variants are construction/registration-time failures; lookups never
/// produce errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryConfigError {
    DuplicateModuleClass(ModuleClass),
    ModuleClassMismatch { reported: ModuleClass },
    InvalidDescriptor(DescriptorValidationError),
    EnvironmentAlreadyInstalled,
}

impl Display for RegistryConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateModuleClass(class) => {
                write!(f, "singleton module class is already registered: {class}")
            }
            Self::ModuleClassMismatch { reported } => write!(
                f,
                "module class mismatch: reported {reported} does not match the concrete instance type"
            ),
            Self::InvalidDescriptor(err) => write!(f, "invalid module descriptor: {err}"),
            Self::EnvironmentAlreadyInstalled => {
                write!(f, "a global module environment is already installed")
            }
        }
    }
}

impl Error for RegistryConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDescriptor(err) => Some(err),
            _ => None,
        }
    }
}

/// Validates one module registration and returns its verified class.
///
/// The reported class must agree with the instance's concrete `TypeId`,
/// otherwise class-keyed lookups would dedupe against the wrong identity.
pub(crate) fn validate_registration(
    module: &Arc<dyn SingletonModule>,
) -> Result<ModuleClass, RegistryConfigError> {
    module
        .descriptor()
        .validate()
        .map_err(RegistryConfigError::InvalidDescriptor)?;
    let class = module.module_class();
    if class.type_id() != module.as_any().type_id() {
        return Err(RegistryConfigError::ModuleClassMismatch { reported: class });
    }
    Ok(class)
}

/// Builds and owns one host session's module registry.
pub struct ModuleRegistryProvider {
    singleton_modules: BTreeMap<ModuleClass, Arc<dyn SingletonModule>>,
    delegate: Option<Weak<dyn ModuleRegistryDelegate>>,
}

impl std::fmt::Debug for ModuleRegistryProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistryProvider")
            .field("singleton_classes", &self.singleton_modules.keys())
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl ModuleRegistryProvider {
    /// Creates a provider owning the supplied singleton-module set.
    ///
    /// # Errors
    /// - Two instances sharing one concrete class.
    /// - A module whose descriptor fails validation.
    /// - A module whose reported class does not match its concrete type.
    pub fn with_singleton_modules(
        modules: impl IntoIterator<Item = Arc<dyn SingletonModule>>,
    ) -> Result<Self, RegistryConfigError> {
        let mut singleton_modules: BTreeMap<ModuleClass, Arc<dyn SingletonModule>> =
            BTreeMap::new();
        for module in modules {
            let class = validate_registration(&module)?;
            if singleton_modules.contains_key(&class) {
                return Err(RegistryConfigError::DuplicateModuleClass(class));
            }
            singleton_modules.insert(class, module);
        }

        info!(
            "event=registry_provider_init module=core status=ok singleton_count={}",
            singleton_modules.len()
        );
        Ok(Self {
            singleton_modules,
            delegate: None,
        })
    }

    /// Creates a provider with no singleton modules.
    #[deprecated(
        note = "modules are registered through automatic discovery; use `with_singleton_modules` instead"
    )]
    pub fn new() -> Self {
        // Kept for old callers; identical to the canonical constructor with
        // an empty set, which cannot fail.
        info!("event=registry_provider_init module=core status=ok singleton_count=0");
        Self {
            singleton_modules: BTreeMap::new(),
            delegate: None,
        }
    }

    /// Builds the per-instance registry from the constructor-supplied
    /// singleton set plus any classes the delegate advertises right now.
    ///
    /// The returned registry is a detached value: later delegate changes do
    /// not rebuild it.
    pub fn module_registry(&self) -> ModuleRegistry {
        let mut module_classes: BTreeSet<ModuleClass> =
            self.singleton_modules.keys().copied().collect();
        if let Some(delegate) = self.module_registry_delegate() {
            module_classes.extend(delegate.additional_module_classes());
        }
        ModuleRegistry::new(module_classes, self.singleton_modules.clone())
    }

    /// Looks up one singleton by class, routed through the delegate hook
    /// when a delegate is set and still alive.
    pub fn resolve_singleton_module(
        &self,
        class: &ModuleClass,
    ) -> Option<Arc<dyn SingletonModule>> {
        let resolved = self.singleton_modules.get(class).cloned();
        match self.module_registry_delegate() {
            Some(delegate) => delegate.resolve_singleton_module(class, resolved),
            None => resolved,
        }
    }

    /// Stores a weak reference to the delegate.
    ///
    /// The provider never extends the delegate's lifetime; once the last
    /// owning reference is dropped, hooks revert to default behavior.
    pub fn set_module_registry_delegate(&mut self, delegate: &Arc<dyn ModuleRegistryDelegate>) {
        self.delegate = Some(Arc::downgrade(delegate));
    }

    /// Clears the delegate reference.
    pub fn clear_module_registry_delegate(&mut self) {
        self.delegate = None;
    }

    /// Returns the delegate when it is set and its owner is still alive.
    pub fn module_registry_delegate(&self) -> Option<Arc<dyn ModuleRegistryDelegate>> {
        self.delegate.as_ref()?.upgrade()
    }

    /// Returns the process-wide universe of module classes.
    ///
    /// Empty when no global environment is installed.
    pub fn module_classes() -> Vec<ModuleClass> {
        match environment::global() {
            Some(env) => env.module_classes(),
            None => Vec::new(),
        }
    }

    /// Returns all singleton modules known to the process environment.
    ///
    /// This is the environment-level enumeration, independent of any one
    /// provider instance.
    pub fn singleton_modules() -> Vec<Arc<dyn SingletonModule>> {
        match environment::global() {
            Some(env) => env.singleton_modules(),
            None => Vec::new(),
        }
    }

    /// Looks up one environment-level singleton by exact class.
    pub fn singleton_module_for_class(class: &ModuleClass) -> Option<Arc<dyn SingletonModule>> {
        environment::global()?.singleton_module_for_class(class)
    }
}
