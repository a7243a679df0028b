//! Exported entry points of a component module image.
//!
//! Every module image exports, by fixed unmangled name, a mandatory
//! construction entry point and optionally a metadata entry point. Hosts
//! resolve both symbols once when the image is loaded; the names below are
//! the process-wide constants of that contract.

use crate::component::FactoryBox;
use crate::metadata::ComponentMetadata;

/// Name of the mandatory construction entry point.
pub const CONSTRUCT_FACTORY_SYMBOL: &str = "cogwork_construct_factory";

/// Name of the optional metadata entry point.
pub const COMPONENT_METADATA_SYMBOL: &str = "cogwork_component_metadata";

/// Signature of the construction entry point.
///
/// Returns a heap-allocated [`FactoryBox`] whose ownership transfers to the
/// caller. A null return means the module cannot produce a factory.
pub type ConstructFactoryFn = unsafe extern "C" fn() -> *mut FactoryBox;

/// Signature of the metadata entry point.
///
/// The module fills the host-owned dictionary in place; the pointer is valid
/// only for the duration of the call.
pub type PopulateMetadataFn = unsafe extern "C" fn(metadata: *mut ComponentMetadata);
