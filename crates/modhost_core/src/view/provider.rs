//! View provider capability protocol.

use crate::view::view::View;
use std::collections::BTreeMap;

/// Supplies one UI view on demand.
///
/// # Contract
/// - Every call returns a newly constructed, independently usable view;
///   implementations must not hand out one shared instance unless they
///   explicitly document the sharing.
/// - May be called zero or more times over the provider's lifetime.
/// - Must not fail; view production is pure in-memory construction.
pub trait ViewProvider: Send + Sync {
    /// Creates one new view for the host to display.
    fn create_view(&self) -> View;
}

/// Baseline provider stamping fresh views from a fixed template.
///
/// Used by hosts as the default implementation and by tests to verify the
/// one-view-per-call contract.
pub struct StaticViewProvider {
    kind: String,
    properties: BTreeMap<String, String>,
}

impl StaticViewProvider {
    /// Creates a provider producing empty views of one kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Adds one template property applied to every produced view.
    pub fn insert_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }
}

impl ViewProvider for StaticViewProvider {
    fn create_view(&self) -> View {
        View::with_properties(self.kind.clone(), self.properties.clone())
    }
}
