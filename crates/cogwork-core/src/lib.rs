//! Cogwork component runtime (host side).
//!
//! Binds logical component identifiers to dynamically loaded module images
//! and mediates factory construction across the binary contract defined in
//! `cogwork-abi`.
//!
//! ## Lifecycle
//!
//! A [`ComponentModule`] starts unbound. [`ComponentModule::bind`] asks the
//! [`ComponentLocator`] to resolve the id into a module name and image path,
//! loads the image, and extracts the module's self-description metadata.
//! [`ComponentModule::construct_factory`] binds on demand and invokes the
//! module's construction entry point, handing a fresh factory to the caller.
//! [`ComponentModule::unbind`] (or drop) releases the image.
//!
//! The runtime has no internal synchronization: one logical owner per module
//! instance, distinct instances are independent across threads.

pub mod definition;
pub mod error;
pub mod host;
pub mod image;
pub mod locator;
pub mod manager;
pub mod module;

pub use definition::ComponentDefinition;
pub use error::{ComponentError, Result};
pub use host::ComponentHost;
pub use image::{ImageError, ImageLoader, ModuleImage, NativeImageLoader, SharedImage};
pub use locator::{ComponentLocator, DirectoryLocator};
pub use manager::ComponentManager;
pub use module::ComponentModule;
