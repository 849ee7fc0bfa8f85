//! Component Lifecycle
//!
//! Capability set every hosted component implements, plus the state cell
//! that backs imperative state updates.

use std::cell::{Cell, Ref, RefCell};

use super::element::Element;

/// Lifecycle hooks a host drives on a component
pub trait Component {
    type State: Clone;

    /// State of a freshly created instance
    fn initial_state() -> Self::State;

    /// Called once the component becomes active in the UI tree
    fn on_mount(&mut self);

    /// Called when the component is removed; releases what `on_mount` acquired
    fn on_unmount(&mut self);

    /// Describe the current UI
    fn render(&self) -> Element;

    /// Snapshot of the current state
    fn state(&self) -> Self::State;
}

/// Component state with a render version
///
/// Every `set_state` bumps the version; hosts compare it with the version
/// they last painted to decide whether to re-render.
#[derive(Debug, Default)]
pub struct StateCell<S> {
    value: RefCell<S>,
    version: Cell<u64>,
}

impl<S> StateCell<S> {
    pub fn new(value: S) -> Self {
        Self {
            value: RefCell::new(value),
            version: Cell::new(0),
        }
    }

    /// Borrow the current state
    pub fn get(&self) -> Ref<'_, S> {
        self.value.borrow()
    }

    /// Apply `update` to the state and request a re-render
    ///
    /// Fields `update` leaves alone keep their values.
    pub fn set_state(&self, update: impl FnOnce(&mut S)) {
        update(&mut self.value.borrow_mut());
        self.version.set(self.version.get() + 1);
    }

    /// Number of state updates so far
    pub fn version(&self) -> u64 {
        self.version.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Pair {
        left: u32,
        right: u32,
    }

    #[test]
    fn test_set_state_merges_and_bumps_version() {
        let cell = StateCell::new(Pair { left: 1, right: 2 });
        assert_eq!(cell.version(), 0);

        cell.set_state(|s| s.left = 10);
        assert_eq!(*cell.get(), Pair { left: 10, right: 2 });
        assert_eq!(cell.version(), 1);
    }
}
