// In-memory stand-in for the <model-viewer> element. Clones share state so a
// test can keep a handle after giving one to the host or controller.

#![allow(dead_code)]
use phone_viewer::core::{CameraOrbit, ModelViewer, OrbitTarget};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
struct State {
    attrs: RefCell<HashMap<String, String>>,
    attr_writes: RefCell<Vec<String>>,
    orbit: Cell<Option<CameraOrbit>>,
    orbit_writes: Cell<usize>,
    resets: Cell<usize>,
}

#[derive(Clone, Default)]
pub struct FakeViewer {
    state: Rc<State>,
    home: Option<CameraOrbit>,
}

impl FakeViewer {
    pub fn with_orbit(orbit: CameraOrbit) -> Self {
        let viewer = Self {
            state: Rc::default(),
            home: Some(orbit),
        };
        viewer.state.orbit.set(Some(orbit));
        viewer
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.state.attrs.borrow().get(name).cloned()
    }

    /// Attribute names in write order.
    pub fn attr_writes(&self) -> Vec<String> {
        self.state.attr_writes.borrow().clone()
    }

    pub fn current_orbit(&self) -> Option<CameraOrbit> {
        self.state.orbit.get()
    }

    pub fn orbit_writes(&self) -> usize {
        self.state.orbit_writes.get()
    }

    pub fn resets(&self) -> usize {
        self.state.resets.get()
    }
}

impl ModelViewer for FakeViewer {
    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .attrs
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self.state.attr_writes.borrow_mut().push(name.to_string());
    }
}

impl OrbitTarget for FakeViewer {
    fn orbit(&self) -> Option<CameraOrbit> {
        self.state.orbit.get()
    }

    fn set_orbit(&self, orbit: CameraOrbit) {
        self.state.orbit.set(Some(orbit));
        self.state.orbit_writes.set(self.state.orbit_writes.get() + 1);
    }

    fn reset_orbit(&self) {
        self.state.orbit.set(self.home);
        self.state.resets.set(self.state.resets.get() + 1);
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
