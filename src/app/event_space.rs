//! Event-capacity state and the `use_event_space` hook.
//!
//! [`CapacityState`] is the plain model: a capacity, the attendee list and the
//! derived number of spaces left. [`use_event_space`] places a fresh copy of
//! it in a signal owned by the calling component, so every page that mounts
//! the hook gets its own counter.

use dioxus::prelude::*;
use tracing::debug;

/// Capacity a fresh event space starts with.
pub const INITIAL_CAPACITY: i64 = 3;

/// Attendees a fresh event space starts with.
pub const INITIAL_ATTENDEES: [&str; 3] = ["Tim", "Bob", "Joe"];

/// Capacity and attendees of a single event.
///
/// Spaces left is never stored; [`CapacityState::spaces_left`] derives it
/// from the two fields on every call. Over-subscription is allowed, so the
/// derived value may be negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityState {
    capacity: i64,
    attending: Vec<String>,
}

impl CapacityState {
    pub fn new() -> Self {
        Self {
            capacity: INITIAL_CAPACITY,
            attending: INITIAL_ATTENDEES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn attending(&self) -> &[String] {
        &self.attending
    }

    /// Capacity minus the number of attendees.
    pub fn spaces_left(&self) -> i64 {
        self.capacity - self.attending.len() as i64
    }

    /// Add one space. Unbounded; the attendee list is left alone.
    pub fn increase_capacity(&mut self) {
        self.capacity += 1;
    }
}

impl Default for CapacityState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a component-owned [`CapacityState`].
///
/// Cheap to copy into event handlers. Every accessor reads through the
/// signal, so a component that renders any of them re-renders after
/// [`EventSpace::increase_capacity`].
#[derive(Clone, Copy, PartialEq)]
pub struct EventSpace {
    state: Signal<CapacityState>,
}

impl EventSpace {
    pub fn capacity(&self) -> i64 {
        self.state.read().capacity()
    }

    pub fn attending(&self) -> Vec<String> {
        self.state.read().attending().to_vec()
    }

    pub fn spaces_left(&self) -> i64 {
        self.state.read().spaces_left()
    }

    pub fn increase_capacity(&mut self) {
        let mut state = self.state.write();
        state.increase_capacity();
        debug!(
            capacity = state.capacity(),
            spaces_left = state.spaces_left(),
            "Capacity increased"
        );
    }
}

/// Create an event space owned by the calling component.
///
/// The state lives as long as the component and is not shared with any
/// other caller.
pub fn use_event_space() -> EventSpace {
    let state = use_signal(CapacityState::new);
    EventSpace { state }
}
