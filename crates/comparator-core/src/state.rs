//! Frame-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The frontend fills a
//! [`FrameState`] once per animation frame and hands it to the dial scene
//! builder.

/// Snapshot consumed by the dial renderer for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameState {
    /// Damped value the needles point at (mm).
    pub displayed_mm: f64,
    /// Latest undamped reading (mm).
    pub raw_mm: f64,
    /// Undamped plunger lift (px); drives the rack and pinion only.
    pub displacement_px: f64,
}

/// Lifecycle of the animation loop. Once running it never stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Unstarted,
    Running,
}

impl LoopState {
    /// Transition to `Running`; returns `true` only on the first call.
    pub fn start(&mut self) -> bool {
        match self {
            LoopState::Unstarted => {
                *self = LoopState::Running;
                true
            }
            LoopState::Running => false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }
}
