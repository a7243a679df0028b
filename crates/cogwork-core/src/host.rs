//! Multi-module component host.

use std::collections::HashMap;
use std::sync::Arc;

use cogwork_abi::FactoryBox;

use crate::error::Result;
use crate::image::{ImageLoader, NativeImageLoader};
use crate::locator::ComponentLocator;
use crate::manager::ComponentManager;
use crate::module::ComponentModule;

/// Owns one [`ComponentModule`] per logical id, sharing a locator, an image
/// loader and an optional manager across all of them.
///
/// A convenience layer only: every lifecycle semantic delegates to the
/// modules themselves. Like the modules, the host has no internal
/// synchronization and assumes a single logical owner.
pub struct ComponentHost {
    locator: Arc<dyn ComponentLocator>,
    loader: Arc<dyn ImageLoader>,
    manager: Option<Arc<dyn ComponentManager>>,
    modules: HashMap<String, ComponentModule>,
}

impl ComponentHost {
    /// Create a host resolving through `locator` and loading natively.
    pub fn new(locator: Arc<dyn ComponentLocator>) -> Self {
        Self::with_loader(locator, Arc::new(NativeImageLoader::new()))
    }

    /// Create a host with a custom image loader.
    pub fn with_loader(locator: Arc<dyn ComponentLocator>, loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            locator,
            loader,
            manager: None,
            modules: HashMap::new(),
        }
    }

    /// Attach a bind/unbind observer shared by all modules created after
    /// this call.
    pub fn with_manager(mut self, manager: Arc<dyn ComponentManager>) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Register `id`, creating an unbound module for it. Registering an
    /// existing id keeps the current module and its bind state.
    pub fn insert(&mut self, id: impl Into<String>) -> &mut ComponentModule {
        let id = id.into();
        let locator = self.locator.clone();
        let loader = self.loader.clone();
        let manager = self.manager.clone();

        self.modules.entry(id.clone()).or_insert_with(|| {
            let module = ComponentModule::with_loader(id, locator, loader);
            match manager {
                Some(manager) => module.with_manager(manager),
                None => module,
            }
        })
    }

    /// The module registered under `id`, if any.
    pub fn module(&self, id: &str) -> Option<&ComponentModule> {
        self.modules.get(id)
    }

    /// Mutable access to the module registered under `id`, if any.
    pub fn module_mut(&mut self, id: &str) -> Option<&mut ComponentModule> {
        self.modules.get_mut(id)
    }

    /// Construct a factory for `id`, registering and binding on demand.
    pub fn construct_factory(&mut self, id: &str) -> Result<FactoryBox> {
        self.insert(id).construct_factory()
    }

    /// All registered ids.
    pub fn ids(&self) -> Vec<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    /// Unbind every module. Dropping the host does the same; explicit for
    /// hosts that want deterministic teardown ordering relative to other
    /// state.
    pub fn unbind_all(&mut self) {
        for module in self.modules.values_mut() {
            module.unbind();
        }
    }
}
