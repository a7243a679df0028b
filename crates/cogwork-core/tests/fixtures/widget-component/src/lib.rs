//! Smoke-test component module for the native loader tests.

use std::any::Any;

use cogwork_abi::{export_component, Component, StockFactory, KEY_SCM_TAG, KEY_VERSION};

/// Trivial component exposed by this module.
#[derive(Default)]
pub struct Widget {
    greetings: u32,
}

impl Widget {
    /// Count a greeting.
    pub fn greet(&mut self) -> u32 {
        self.greetings += 1;
        self.greetings
    }
}

impl Component for Widget {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

export_component! {
    factory: StockFactory<Widget> => "ComponentFactory",
    component: Widget => "Component",
    metadata: {
        KEY_SCM_TAG => "fixtures/widget-component",
        KEY_VERSION => "1.0",
    },
}
