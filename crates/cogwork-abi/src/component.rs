//! Component capability traits.
//!
//! The base capability is deliberately minimal: across the module boundary
//! the only binary-stable operations on a component are destruction and
//! whatever its concrete capability subtraits declare. Hosts receive
//! components as owned trait objects and never see the concrete type.

use std::any::Any;

/// Base capability implemented by every component type.
///
/// A component is a heap-allocated, destructible object. It must not carry
/// data reachable other than through its declared capabilities; concrete
/// capabilities are subtraits of `Component`.
pub trait Component: Any {
    /// The component as [`Any`], for capability downcasts within one image.
    fn as_any(&self) -> &dyn Any;
}

/// Capability of constructing components.
///
/// Exactly one factory exists per component module. Ownership of every
/// constructed component transfers to the caller.
pub trait ComponentFactory: Component {
    /// Build a new component instance.
    fn construct(&self) -> Box<dyn Component>;
}

/// Owned, type-erased factory handle as transferred across the module
/// boundary.
pub type FactoryBox = Box<dyn ComponentFactory>;
