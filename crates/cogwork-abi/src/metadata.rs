//! Module self-description metadata.
//!
//! A loaded module describes itself through an ordered string-to-string
//! dictionary. Six keys are required by convention; a missing `version` is
//! repaired with [`DEFAULT_VERSION`] at bind time, any other missing
//! required key is only a diagnostic.

use serde::{Deserialize, Serialize};

/// Key for the implementing factory type name.
pub const KEY_FACTORY_IMPLEMENTATION: &str = "factory.implementation";

/// Key for the factory capability interface name.
pub const KEY_FACTORY_INTERFACE: &str = "factory.interface";

/// Key for the implementing component type name.
pub const KEY_COMPONENT_IMPLEMENTATION: &str = "component.implementation";

/// Key for the component capability interface name.
pub const KEY_COMPONENT_INTERFACE: &str = "component.interface";

/// Key for the source-control tag the module was built from.
pub const KEY_SCM_TAG: &str = "scm.tag";

/// Key for the module version.
pub const KEY_VERSION: &str = "version";

/// The keys every module is expected to publish.
pub const REQUIRED_KEYS: [&str; 6] = [
    KEY_FACTORY_IMPLEMENTATION,
    KEY_FACTORY_INTERFACE,
    KEY_COMPONENT_IMPLEMENTATION,
    KEY_COMPONENT_INTERFACE,
    KEY_SCM_TAG,
    KEY_VERSION,
];

/// Value substituted for [`KEY_VERSION`] when a module does not publish one.
pub const DEFAULT_VERSION: &str = "0";

/// Ordered string-to-string mapping a module uses to describe itself.
///
/// Keys keep their first-insertion order; setting an existing key overwrites
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    entries: Vec<(String, String)>,
}

impl ComponentMetadata {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, overwriting in place if the key exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut metadata = ComponentMetadata::new();
        metadata.set(KEY_VERSION, "1.2");
        metadata.set(KEY_SCM_TAG, "r2431");

        assert_eq!(metadata.get(KEY_VERSION), Some("1.2"));
        assert_eq!(metadata.get(KEY_SCM_TAG), Some("r2431"));
        assert_eq!(metadata.get("absent"), None);
        assert!(metadata.contains(KEY_VERSION));
        assert_eq!(metadata.len(), 2);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut metadata = ComponentMetadata::new();
        metadata.set("c", "3");
        metadata.set("a", "1");
        metadata.set("b", "2");

        let keys: Vec<&str> = metadata.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["c", "a", "b"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut metadata = ComponentMetadata::new();
        metadata.set("a", "1");
        metadata.set("b", "2");
        metadata.set("a", "updated");

        let entries: Vec<(&str, &str)> = metadata.iter().collect();
        assert_eq!(entries, [("a", "updated"), ("b", "2")]);
    }

    #[test]
    fn test_required_keys_cover_version() {
        assert!(REQUIRED_KEYS.contains(&KEY_VERSION));
        assert_eq!(REQUIRED_KEYS.len(), 6);
    }
}
