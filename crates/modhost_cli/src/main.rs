//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `modhost_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use modhost_core::{ModuleRegistryProvider, StaticViewProvider, ViewProvider};

fn main() {
    println!("modhost_core version={}", modhost_core::core_version());

    match ModuleRegistryProvider::with_singleton_modules(Vec::new()) {
        Ok(provider) => {
            let registry = provider.module_registry();
            println!(
                "modhost_core module_classes={} singleton_modules={}",
                registry.module_class_count(),
                registry.singleton_module_count()
            );
        }
        Err(err) => println!("modhost_core registry_error={err}"),
    }

    let splash = StaticViewProvider::new("splash");
    println!("modhost_core view_kind={}", splash.create_view().kind());
}
