//! Horizontal drag of the active slot and double-tap detection on sources.

use crate::workpiece::{ActiveSlot, TravelBounds};
use instant::Instant;
use std::time::Duration;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    /// Pointer distance from the piece's left edge at grab time (px).
    pub grab_offset: f64,
}

#[derive(Clone, Debug)]
pub struct DragController {
    state: DragState,
    range: f64,
}

impl DragController {
    pub fn new(range: f64) -> Self {
        Self {
            state: DragState::default(),
            range,
        }
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.active
    }

    /// Engage dragging. `pointer_x` and `object_left` share a coordinate space
    /// (client pixels). Returns `false` when there is nothing to drag.
    pub fn begin(&mut self, slot: Option<&ActiveSlot>, pointer_x: f64, object_left: f64) -> bool {
        if slot.is_none() {
            return false;
        }
        self.state = DragState {
            active: true,
            grab_offset: pointer_x - object_left,
        };
        true
    }

    /// Move the slot so the grab point follows `pointer_x`. Returns the new
    /// container-relative left edge, or `None` when not dragging.
    pub fn drag_to(
        &self,
        slot: Option<&mut ActiveSlot>,
        pointer_x: f64,
        container_left: f64,
        container_width: f64,
    ) -> Option<f64> {
        if !self.state.active {
            return None;
        }
        let slot = slot?;
        let bounds = TravelBounds::new(container_width, self.range, slot.width_px);
        let left = pointer_x - self.state.grab_offset - container_left;
        Some(slot.set_left_clamped(left, &bounds))
    }

    /// Disengage dragging; returns whether a drag was in progress.
    pub fn end(&mut self) -> bool {
        let was = self.state.active;
        self.state.active = false;
        was
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tap {
    Single,
    Double,
}

/// Classifies taps on one source element. A tap arriving strictly within
/// `window` of the previous one is a double tap; every tap becomes the new
/// reference point.
#[derive(Clone, Debug)]
pub struct TapDetector {
    window: Duration,
    last: Option<Instant>,
}

impl TapDetector {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub fn register(&mut self, now: Instant) -> Tap {
        let tap = match self.last {
            Some(prev) if now > prev && now.duration_since(prev) < self.window => Tap::Double,
            _ => Tap::Single,
        };
        self.last = Some(now);
        tap
    }
}
