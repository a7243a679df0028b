//! Resolved component descriptors.

use cogwork_abi::ComponentMetadata;
use serde::{Deserialize, Serialize};

/// Descriptor recording how a component id maps to a physical module and
/// what the module published about itself.
///
/// `id` is fixed at construction. `name` and `path` are filled in by the
/// locator during bind, `metadata` by the module image; a re-bind after
/// unbind refreshes all three.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDefinition {
    id: String,

    /// Module name, as resolved by the locator.
    pub name: String,

    /// Filesystem path of the module image, as resolved by the locator.
    pub path: String,

    /// Self-description published by the loaded module.
    pub metadata: ComponentMetadata,
}

impl ComponentDefinition {
    /// Create a definition for `id` with empty name, path and metadata.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            path: String::new(),
            metadata: ComponentMetadata::new(),
        }
    }

    /// The logical identifier supplied at construction time.
    pub fn id(&self) -> &str {
        &self.id
    }
}
