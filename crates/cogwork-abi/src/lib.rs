//! Cogwork component ABI.
//!
//! The shared contract between a component host and dynamically loaded
//! component modules:
//!
//! - the [`Component`] and [`ComponentFactory`] capability traits,
//! - the ordered [`ComponentMetadata`] self-description dictionary,
//! - the two well-known exported entry points every module image provides
//!   (see [`entry`]),
//! - authoring helpers for module crates: [`StockFactory`] and the
//!   [`export_component!`] macro.
//!
//! A module image is any dynamic library exporting, by fixed unmangled name,
//! a mandatory construction entry point and an optional metadata entry point.
//! That two-symbol surface is the entire ABI between host and module; both
//! sides compile against this crate and nothing else is shared.

pub mod component;
pub mod entry;
pub mod factory;
#[macro_use]
pub mod macros;
pub mod metadata;

pub use component::{Component, ComponentFactory, FactoryBox};
pub use entry::{
    COMPONENT_METADATA_SYMBOL, CONSTRUCT_FACTORY_SYMBOL, ConstructFactoryFn, PopulateMetadataFn,
};
pub use factory::StockFactory;
pub use metadata::{
    ComponentMetadata, DEFAULT_VERSION, KEY_COMPONENT_IMPLEMENTATION, KEY_COMPONENT_INTERFACE,
    KEY_FACTORY_IMPLEMENTATION, KEY_FACTORY_INTERFACE, KEY_SCM_TAG, KEY_VERSION, REQUIRED_KEYS,
};
