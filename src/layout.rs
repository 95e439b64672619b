// Pure layout arithmetic shared by the DOM glue. No web-sys types here so the
// host tests can include this file directly.

/// Axis-aligned box in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// False for boxes of elements that have not been laid out yet.
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        self.width > 0.0 || self.height > 0.0
    }
}

/// Longest the plunger shaft can be: from the mount down to the base, less
/// half the tip. `None` while the base has not been positioned.
pub fn max_shaft_height(mount: &Rect, base: &Rect, tip_height: f64) -> Option<f64> {
    if base.top == 0.0 || !base.is_laid_out() {
        return None;
    }
    Some(base.top - mount.bottom() - tip_height / 2.0)
}

/// Plunger contact x relative to the container's left edge.
#[inline]
pub fn plunger_x_in(container: &Rect, tip: &Rect) -> f64 {
    tip.center_x() - container.left
}

/// Offset of `inner` from the top-left of `container`.
#[inline]
pub fn offset_within(inner: &Rect, container: &Rect) -> (f64, f64) {
    (inner.left - container.left, inner.top - container.top)
}

/// Top offset that rests a piece on the container floor.
#[inline]
pub fn resting_top(container_height: f64, piece_height: f64) -> f64 {
    container_height - piece_height
}

#[inline]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Readout text for the dial value.
pub fn format_reading(mm: f64, decimals: usize) -> String {
    format!("{mm:.decimals$}")
}
