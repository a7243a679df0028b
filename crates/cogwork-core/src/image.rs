//! Loaded module images.
//!
//! [`ModuleImage`] abstracts one loaded dynamic library image;
//! [`NativeImageLoader`] is the `libloading`-backed implementation. All
//! unsafe symbol handling lives in this module. Both well-known entry
//! points are resolved exactly once, when the image is loaded.

use cogwork_abi::{
    COMPONENT_METADATA_SYMBOL, CONSTRUCT_FACTORY_SYMBOL, ComponentMetadata, ConstructFactoryFn,
    FactoryBox, PopulateMetadataFn,
};
use libloading::Library;

/// Image layer failures. Mapped to
/// [`ComponentNotFound`](crate::ComponentError::ComponentNotFound) by the
/// module during bind.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The dynamic library image could not be loaded.
    #[error("failed to load module image {path}: {reason}")]
    LoadFailed { path: String, reason: String },
}

/// One loaded module image.
///
/// Releasing the image is dropping it; native unload irregularities are
/// never surfaced.
pub trait ModuleImage: Send {
    /// Invoke the optional metadata entry point, filling `metadata` in
    /// place. Returns false when the image does not export one.
    fn populate_metadata(&self, metadata: &mut ComponentMetadata) -> bool;

    /// Invoke the mandatory construction entry point, yielding a fresh
    /// factory owned by the caller. `None` when the image does not export
    /// one, or when the entry point produced no factory.
    fn construct_factory(&self) -> Option<FactoryBox>;
}

/// Loads module images by name and path.
pub trait ImageLoader: Send + Sync {
    /// Load the image at `path`, bound to the module `name`.
    fn load(&self, name: &str, path: &str) -> std::result::Result<Box<dyn ModuleImage>, ImageError>;
}

/// `libloading`-backed image loader.
#[derive(Debug, Default)]
pub struct NativeImageLoader;

impl NativeImageLoader {
    /// Create the loader.
    pub fn new() -> Self {
        Self
    }
}

impl ImageLoader for NativeImageLoader {
    fn load(&self, name: &str, path: &str) -> std::result::Result<Box<dyn ModuleImage>, ImageError> {
        // SAFETY: loading an image runs its initializers; images are trusted
        // to honor the cogwork binary contract.
        let library = unsafe { Library::new(path) }.map_err(|e| ImageError::LoadFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        // SAFETY: the signatures are fixed by the binary contract; the fn
        // pointers stay valid while `library` is held by the image.
        let construct = unsafe {
            library
                .get::<ConstructFactoryFn>(CONSTRUCT_FACTORY_SYMBOL.as_bytes())
                .map(|symbol| *symbol)
                .ok()
        };
        let metadata = unsafe {
            library
                .get::<PopulateMetadataFn>(COMPONENT_METADATA_SYMBOL.as_bytes())
                .map(|symbol| *symbol)
                .ok()
        };

        tracing::debug!(
            "loaded module image {} from {} (factory entry: {}, metadata entry: {})",
            name,
            path,
            construct.is_some(),
            metadata.is_some()
        );

        Ok(Box::new(SharedImage {
            _library: library,
            construct,
            metadata,
        }))
    }
}

/// A native image held open for the lifetime of its entry pointers.
pub struct SharedImage {
    /// Keeps the mapped image alive; the entry pointers below borrow from it.
    _library: Library,
    construct: Option<ConstructFactoryFn>,
    metadata: Option<PopulateMetadataFn>,
}

impl ModuleImage for SharedImage {
    fn populate_metadata(&self, metadata: &mut ComponentMetadata) -> bool {
        match self.metadata {
            Some(entry) => {
                // SAFETY: the entry point was resolved from this still-mapped
                // image; the dictionary pointer is valid for the call.
                unsafe { entry(metadata as *mut ComponentMetadata) };
                true
            }
            None => false,
        }
    }

    fn construct_factory(&self) -> Option<FactoryBox> {
        let entry = self.construct?;

        // SAFETY: as above; the contract transfers ownership of a heap
        // allocated `FactoryBox` (or null) to us.
        let raw = unsafe { entry() };
        if raw.is_null() {
            tracing::warn!("construction entry point returned no factory");
            return None;
        }
        Some(*unsafe { Box::from_raw(raw) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fails_for_missing_image() {
        let loader = NativeImageLoader::new();
        let err = loader
            .load("widget", "/nonexistent/libwidget.so")
            .expect_err("missing image must not load");
        assert!(matches!(err, ImageError::LoadFailed { .. }));
    }
}
