/// First-order lag from the raw reading to the displayed needle value.
///
/// Each step closes a fixed fraction of the gap, then snaps once the gap is
/// below `epsilon` so the needle lands exactly on the target.
#[derive(Clone, Debug)]
pub struct NeedleAnimator {
    displayed: f64,
    decay_rate: f64,
    epsilon: f64,
}

impl NeedleAnimator {
    pub fn new(decay_rate: f64, epsilon: f64) -> Self {
        Self {
            displayed: 0.0,
            decay_rate: decay_rate.clamp(0.0, 1.0),
            epsilon,
        }
    }

    #[inline]
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Advance one frame toward `target`, returning the new displayed value.
    pub fn step(&mut self, target: f64) -> f64 {
        let gap = target - self.displayed;
        if gap.abs() > self.epsilon {
            self.displayed += gap * self.decay_rate;
        } else {
            self.displayed = target;
        }
        self.displayed
    }

    #[inline]
    pub fn is_settled(&self, target: f64) -> bool {
        self.displayed == target
    }
}
