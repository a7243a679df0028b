//! Bind lifecycle observation.

use crate::module::ComponentModule;

/// Observer notified around a module's bind transitions.
///
/// `on_bind` runs immediately after a module becomes bound. `on_unbind`
/// runs immediately before the image is released, while the module is still
/// fully usable. Notifications are side effects only and must not fail.
pub trait ComponentManager: Send + Sync {
    /// The module has just been bound.
    fn on_bind(&self, module: &ComponentModule);

    /// The module is about to be unbound.
    fn on_unbind(&self, module: &ComponentModule);
}
