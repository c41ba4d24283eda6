//! Singleton module contract.

use crate::registry::class::ModuleClass;
use crate::registry::descriptor::ModuleDescriptor;
use std::any::Any;
use std::sync::Arc;

/// Capability module that exists at most once per registry.
///
/// Identity is the concrete implementation type. Implementations return
/// `ModuleClass::of::<Self>()` from [`SingletonModule::module_class`]; the
/// registry verifies the reported class against the instance's real
/// `TypeId` at registration, so a misreporting implementation is rejected
/// instead of poisoning lookups.
pub trait SingletonModule: Any + Send + Sync {
    /// Descriptor advertised to the host.
    fn descriptor(&self) -> ModuleDescriptor;

    /// Concrete class identity used as the registry key.
    fn module_class(&self) -> ModuleClass;

    /// `Any` view used for class verification.
    fn as_any(&self) -> &dyn Any;

    /// `Any` view used for checked shared downcasts.
    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// Downcasts one shared singleton module to its concrete type.
///
/// Returns `None` when the instance is of a different concrete type.
pub fn downcast_singleton<M: SingletonModule>(module: Arc<dyn SingletonModule>) -> Option<Arc<M>> {
    module.as_any_arc().downcast::<M>().ok()
}
