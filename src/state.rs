// Depth state and the event transition table. Repainting is a separate,
// injectable step, so transitions can be tested without a surface.

use crate::activity::{MAX_DEPTH, MIN_DEPTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub current_depth: u32,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState { current_depth: MIN_DEPTH }
    }

    /// min(d+1, MAX_DEPTH); a request past the bound is a silent no-op.
    pub fn increase(&mut self) {
        if self.current_depth < MAX_DEPTH {
            self.current_depth += 1;
        }
    }

    /// max(d-1, MIN_DEPTH); a request past the bound is a silent no-op.
    pub fn decrease(&mut self) {
        if self.current_depth > MIN_DEPTH {
            self.current_depth -= 1;
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Mounted,
    Resized,
    DepthIncrease,
    DepthDecrease,
}

/// (prior state, event) -> (new state, repaint required). Every event
/// repaints: a clamped depth request repaints idempotently at the unchanged
/// depth, and a resize repaint is mandatory because the backing buffer was
/// just discarded.
pub fn transition(state: ViewState, event: Event) -> (ViewState, bool) {
    let mut next = state;
    match event {
        Event::Mounted | Event::Resized => {}
        Event::DepthIncrease => next.increase(),
        Event::DepthDecrease => next.decrease(),
    }
    (next, true)
}
