//! Pointer-drag handling for repositioning the toggler.
//!
//! A two-state machine: Idle until a pointer press lands on the toggler,
//! Dragging until the pointer is released anywhere. While dragging, the
//! tracked position follows the cursor, delta for delta, and the switcher
//! persists every intermediate position so nothing is lost if the process
//! dies mid-gesture.

use eframe::egui::Pos2;
use tracing::debug;

enum State {
    Idle,
    Dragging {
        /// Cursor position at the last update.
        cursor: Pos2,
        /// Toggler position in its own coordinate space, resolved to pixels.
        pos: Pos2,
    },
}

pub struct DragController {
    state: State,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Enter Dragging. `origin` is the toggler's current resolved position;
    /// percent offsets must be resolved by the caller before this point.
    pub fn begin(&mut self, cursor: Pos2, origin: Pos2) {
        debug!(?cursor, ?origin, "drag started");
        self.state = State::Dragging { cursor, pos: origin };
    }

    /// Feed a pointer movement. Returns the new toggler position while
    /// Dragging, `None` while Idle.
    pub fn update(&mut self, to: Pos2) -> Option<Pos2> {
        match &mut self.state {
            State::Idle => None,
            State::Dragging { cursor, pos } => {
                *pos += to - *cursor;
                *cursor = to;
                Some(*pos)
            }
        }
    }

    /// Pointer released. Returns whether a drag was in progress; afterwards
    /// movements are ignored until the next [`begin`](Self::begin).
    pub fn finish(&mut self) -> bool {
        let was_dragging = matches!(self.state, State::Dragging { .. });
        if was_dragging {
            debug!("drag finished");
        }
        self.state = State::Idle;
        was_dragging
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }
}
