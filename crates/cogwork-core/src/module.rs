//! The component module state machine.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use cogwork_abi::{DEFAULT_VERSION, FactoryBox, KEY_VERSION, REQUIRED_KEYS};

use crate::definition::ComponentDefinition;
use crate::error::{ComponentError, Result};
use crate::image::{ImageLoader, ModuleImage, NativeImageLoader};
use crate::locator::ComponentLocator;
use crate::manager::ComponentManager;

/// Binds a component identifier to a loaded module image and mediates
/// factory construction.
///
/// A module is created unbound, transitions to bound on the first
/// successful [`bind`](Self::bind) (or
/// [`construct_factory`](Self::construct_factory)), and back to unbound on
/// [`unbind`](Self::unbind) or drop.
///
/// One logical owner per instance: calls on the same module must be
/// externally serialized. Distinct modules are fully independent.
pub struct ComponentModule {
    definition: ComponentDefinition,
    locator: Arc<dyn ComponentLocator>,
    manager: Option<Arc<dyn ComponentManager>>,
    loader: Arc<dyn ImageLoader>,
    image: Option<Box<dyn ModuleImage>>,
}

impl ComponentModule {
    /// Create an unbound module for `id`, loading images natively.
    pub fn new(id: impl Into<String>, locator: Arc<dyn ComponentLocator>) -> Self {
        Self::with_loader(id, locator, Arc::new(NativeImageLoader::new()))
    }

    /// Create an unbound module with a custom image loader.
    pub fn with_loader(
        id: impl Into<String>,
        locator: Arc<dyn ComponentLocator>,
        loader: Arc<dyn ImageLoader>,
    ) -> Self {
        Self {
            definition: ComponentDefinition::new(id),
            locator,
            manager: None,
            loader,
            image: None,
        }
    }

    /// Attach a bind/unbind observer.
    pub fn with_manager(mut self, manager: Arc<dyn ComponentManager>) -> Self {
        self.manager = Some(manager);
        self
    }

    /// The module's descriptor, resolved as far as the current state allows.
    pub fn definition(&self) -> &ComponentDefinition {
        &self.definition
    }

    /// The logical component identifier.
    pub fn id(&self) -> &str {
        self.definition.id()
    }

    /// Whether a module image is currently held.
    pub fn is_bound(&self) -> bool {
        self.image.is_some()
    }

    /// Resolve, load and describe the module.
    ///
    /// Idempotent: a bound module returns immediately without touching the
    /// locator, the loader or the manager.
    ///
    /// # Errors
    ///
    /// [`ComponentError::ComponentNotFound`] when resolution or image
    /// loading fails; the module stays unbound.
    pub fn bind(&mut self) -> Result<()> {
        if self.image.is_some() {
            return Ok(());
        }

        self.locator.locate(&mut self.definition)?;

        let image = self
            .loader
            .load(&self.definition.name, &self.definition.path)
            .map_err(|e| ComponentError::ComponentNotFound {
                id: self.definition.id().to_string(),
                reason: e.to_string(),
            })?;

        self.definition.metadata.clear();
        if !image.populate_metadata(&mut self.definition.metadata) {
            tracing::debug!(
                "module {} exports no metadata entry point",
                self.definition.id()
            );
        }
        self.repair_metadata();

        self.image = Some(image);

        if let Some(manager) = self.manager.clone() {
            manager.on_bind(self);
        }

        tracing::info!(
            "bound component module {}: name={}, path={}, metadata={}",
            self.definition.id(),
            self.definition.name,
            self.definition.path,
            serde_json::to_string(&self.definition.metadata).unwrap_or_default()
        );
        Ok(())
    }

    /// Release the module image.
    ///
    /// Idempotent and infallible. The manager is notified before the image
    /// is released, so it may still use the module; native unload
    /// irregularities are swallowed.
    pub fn unbind(&mut self) {
        if self.image.is_none() {
            return;
        }

        if let Some(manager) = self.manager.clone() {
            manager.on_unbind(self);
        }

        self.image = None;
        tracing::info!("unbound component module {}", self.definition.id());
    }

    /// Construct a fresh factory through the module's construction entry
    /// point, binding first when necessary.
    ///
    /// Every successful call yields an independent factory owned by the
    /// caller. Entry points are resolved once when the image is loaded, so
    /// after a [`ComponentError::FactoryNotFound`] further calls keep
    /// failing until the module is unbound and re-bound.
    ///
    /// # Errors
    ///
    /// [`ComponentError::ComponentNotFound`] when binding fails;
    /// [`ComponentError::FactoryNotFound`] when the image exports no usable
    /// construction entry point (the module stays bound).
    pub fn construct_factory(&mut self) -> Result<FactoryBox> {
        self.bind()?;

        self.image
            .as_ref()
            .and_then(|image| image.construct_factory())
            .ok_or_else(|| ComponentError::FactoryNotFound {
                id: self.definition.id().to_string(),
            })
    }

    // Default the version key; any other absent required key is only
    // reported.
    fn repair_metadata(&mut self) {
        if !self.definition.metadata.contains(KEY_VERSION) {
            self.definition.metadata.set(KEY_VERSION, DEFAULT_VERSION);
        }

        for key in REQUIRED_KEYS {
            if !self.definition.metadata.contains(key) {
                tracing::warn!(
                    "module {} metadata lacks required key '{}'",
                    self.definition.id(),
                    key
                );
            }
        }
    }
}

impl Drop for ComponentModule {
    fn drop(&mut self) {
        self.unbind();
    }
}

impl Debug for ComponentModule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentModule")
            .field("id", &self.definition.id())
            .field("bound", &self.is_bound())
            .finish()
    }
}
