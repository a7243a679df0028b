//! Declarative module registration.

/// Declare the exported entry points of a component module.
///
/// The module author names the factory implementation type with its
/// capability interface, the component implementation type with its
/// capability interface, and any extra metadata properties (the
/// source-control tag at minimum). The macro emits both well-known entry
/// points: the construction entry default-constructs the declared factory,
/// the metadata entry publishes the four type-name keys followed by the
/// custom properties.
///
/// ```rust
/// use std::any::Any;
/// use cogwork_abi::{export_component, Component, StockFactory, KEY_SCM_TAG};
///
/// #[derive(Default)]
/// struct Widget;
///
/// impl Component for Widget {
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// export_component! {
///     factory: StockFactory<Widget> => "ComponentFactory",
///     component: Widget => "Component",
///     metadata: {
///         KEY_SCM_TAG => "r2431",
///     },
/// }
/// ```
#[macro_export]
macro_rules! export_component {
    (
        factory: $factory:ty => $factory_interface:expr,
        component: $component:ty => $component_interface:expr
        $(, metadata: { $($key:expr => $value:expr),* $(,)? })?
        $(,)?
    ) => {
        /// Mandatory construction entry point of the module binary contract.
        #[no_mangle]
        pub unsafe extern "C" fn cogwork_construct_factory() -> *mut $crate::FactoryBox {
            let factory: $crate::FactoryBox =
                Box::new(<$factory as ::std::default::Default>::default());
            Box::into_raw(Box::new(factory))
        }

        /// Optional metadata entry point of the module binary contract.
        #[no_mangle]
        pub unsafe extern "C" fn cogwork_component_metadata(
            metadata: *mut $crate::ComponentMetadata,
        ) {
            let metadata = unsafe { &mut *metadata };
            metadata.set($crate::KEY_FACTORY_IMPLEMENTATION, stringify!($factory));
            metadata.set($crate::KEY_FACTORY_INTERFACE, $factory_interface);
            metadata.set($crate::KEY_COMPONENT_IMPLEMENTATION, stringify!($component));
            metadata.set($crate::KEY_COMPONENT_INTERFACE, $component_interface);
            $($(metadata.set($key, $value);)*)?
        }
    };
}
