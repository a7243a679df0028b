//! Stock factory for modules exposing a single component type.

use std::any::Any;
use std::marker::PhantomData;

use crate::component::{Component, ComponentFactory};

/// Factory that default-constructs one fixed component type.
///
/// Used when a module exposes exactly one component type and needs no custom
/// construction logic; pair it with [`export_component!`](crate::export_component)
/// to declare a module without hand-written boilerplate.
pub struct StockFactory<C> {
    _component: PhantomData<fn() -> C>,
}

impl<C> StockFactory<C> {
    /// Create the factory.
    pub fn new() -> Self {
        Self {
            _component: PhantomData,
        }
    }
}

impl<C> Default for StockFactory<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Component + Default> Component for StockFactory<C> {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<C: Component + Default> ComponentFactory for StockFactory<C> {
    fn construct(&self) -> Box<dyn Component> {
        Box::new(C::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        count: u32,
    }

    impl Component for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_constructs_default_instances() {
        let factory = StockFactory::<Counter>::new();
        let component = factory.construct();
        let counter = component
            .as_any()
            .downcast_ref::<Counter>()
            .expect("stock factory builds the declared type");
        assert_eq!(counter.count, 0);
    }

    #[test]
    fn test_each_construct_is_independent() {
        let factory = StockFactory::<Counter>::new();
        let a = factory.construct();
        let b = factory.construct();

        let a_ptr = a.as_any().downcast_ref::<Counter>().expect("downcast") as *const Counter;
        let b_ptr = b.as_any().downcast_ref::<Counter>().expect("downcast") as *const Counter;
        assert_ne!(a_ptr, b_ptr);
    }
}
