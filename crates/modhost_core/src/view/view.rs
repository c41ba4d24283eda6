//! Host view content value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One piece of host-controlled UI content.
///
/// A view is a plain value handed to the platform UI layer; the instance id
/// makes every produced view independently identifiable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    instance_id: Uuid,
    kind: String,
    properties: BTreeMap<String, String>,
}

impl View {
    /// Creates an empty view of one kind with a fresh instance id.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_properties(kind, BTreeMap::new())
    }

    /// Creates a view of one kind with initial properties.
    pub fn with_properties(kind: impl Into<String>, properties: BTreeMap<String, String>) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            kind: kind.into(),
            properties,
        }
    }

    /// Stable id of this view instance.
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Sets one display property, replacing any previous value.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::View;
    use std::collections::BTreeMap;

    #[test]
    fn new_views_get_distinct_instance_ids() {
        let first = View::new("splash");
        let second = View::new("splash");
        assert_ne!(first.instance_id(), second.instance_id());
    }

    #[test]
    fn property_roundtrip() {
        let mut view = View::new("splash");
        assert!(view.property("background_color").is_none());

        view.set_property("background_color", "#ffffff");
        assert_eq!(view.property("background_color"), Some("#ffffff"));

        view.set_property("background_color", "#000000");
        assert_eq!(view.property("background_color"), Some("#000000"));
    }

    #[test]
    fn with_properties_keeps_initial_values() {
        let mut properties = BTreeMap::new();
        properties.insert("resize_mode".to_string(), "contain".to_string());
        let view = View::with_properties("splash", properties);
        assert_eq!(view.property("resize_mode"), Some("contain"));
        assert_eq!(view.kind(), "splash");
    }

    #[test]
    fn serializes_kind_and_properties() {
        let mut view = View::new("banner");
        view.set_property("title", "welcome");
        let value = serde_json::to_value(&view).expect("view should serialize");
        assert_eq!(value["kind"], "banner");
        assert_eq!(value["properties"]["title"], "welcome");
    }
}
