//! Explicit simulation state threaded through input handlers, the frame tick
//! and the renderer.

use crate::config::ComparatorConfig;
use crate::drag::DragController;
use crate::measure::{measure, Reading};
use crate::needle::NeedleAnimator;
use crate::state::FrameState;
use crate::workpiece::{ActiveSlot, TravelBounds, WorkpieceSpec};

#[derive(Clone, Debug)]
pub struct Simulation {
    pub config: ComparatorConfig,
    slot: Option<ActiveSlot>,
    drag: DragController,
    needle: NeedleAnimator,
    reading: Reading,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(ComparatorConfig::default())
    }
}

impl Simulation {
    pub fn new(config: ComparatorConfig) -> Self {
        let drag = DragController::new(config.movement_range_px);
        let needle = NeedleAnimator::new(config.needle_decay_rate, config.needle_snap_epsilon);
        Self {
            config,
            slot: None,
            drag,
            needle,
            reading: Reading::default(),
        }
    }

    #[inline]
    pub fn slot(&self) -> Option<&ActiveSlot> {
        self.slot.as_ref()
    }

    #[inline]
    pub fn reading(&self) -> Reading {
        self.reading
    }

    #[inline]
    pub fn displayed_mm(&self) -> f64 {
        self.needle.displayed()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn travel_bounds(&self, container_width: f64, piece_width: f64) -> TravelBounds {
        TravelBounds::new(container_width, self.config.movement_range_px, piece_width)
    }

    /// Replace the active slot with a copy of `spec` placed at `left_px`
    /// (clamped). Any drag in progress is dropped with the old slot.
    pub fn activate(
        &mut self,
        spec: WorkpieceSpec,
        left_px: f64,
        width_px: f64,
        container_width: f64,
    ) -> &ActiveSlot {
        let bounds = self.travel_bounds(container_width, width_px);
        self.drag.end();
        self.slot.insert(ActiveSlot::new(spec, left_px, width_px, &bounds))
    }

    /// Move the active slot to the centre of its travel. Returns the new left
    /// edge, or `None` with no slot.
    pub fn center_slot(&mut self, container_width: f64) -> Option<f64> {
        let range = self.config.movement_range_px;
        let slot = self.slot.as_mut()?;
        let bounds = TravelBounds::new(container_width, range, slot.width_px);
        Some(slot.set_left_clamped(bounds.center_left(), &bounds))
    }

    /// Track a new rendered width (e.g. after a resize), re-clamping the slot.
    pub fn resize_slot(&mut self, width_px: f64, container_width: f64) -> Option<f64> {
        let range = self.config.movement_range_px;
        let slot = self.slot.as_mut()?;
        slot.width_px = width_px;
        let bounds = TravelBounds::new(container_width, range, width_px);
        let left = slot.left_px();
        Some(slot.set_left_clamped(left, &bounds))
    }

    pub fn begin_drag(&mut self, pointer_x: f64, object_left: f64) -> bool {
        self.drag.begin(self.slot.as_ref(), pointer_x, object_left)
    }

    pub fn drag_to(
        &mut self,
        pointer_x: f64,
        container_left: f64,
        container_width: f64,
    ) -> Option<f64> {
        self.drag
            .drag_to(self.slot.as_mut(), pointer_x, container_left, container_width)
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.end()
    }

    /// Recompute the raw reading for a plunger at container-relative
    /// `plunger_x`.
    pub fn update_measurement(&mut self, plunger_x: f64) -> Reading {
        self.reading = measure(plunger_x, self.slot.as_ref(), &self.config);
        self.reading
    }

    /// Advance the needle one frame and snapshot the state for rendering.
    pub fn tick(&mut self) -> FrameState {
        let displayed_mm = self.needle.step(self.reading.raw_value_mm);
        FrameState {
            displayed_mm,
            raw_mm: self.reading.raw_value_mm,
            displacement_px: self.reading.displacement_px,
        }
    }

    /// Plunger shaft height for the current lift, floored at the configured
    /// minimum.
    pub fn shaft_height_px(&self, max_shaft_height_px: f64) -> f64 {
        (max_shaft_height_px - self.reading.displacement_px).max(self.config.min_shaft_height_px)
    }
}
