use crate::config::ComparatorConfig;
use crate::workpiece::ActiveSlot;

/// One raw reading of the plunger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reading {
    /// Dial value in mm: surface height minus the zero-setting block.
    pub raw_value_mm: f64,
    /// Plunger lift in pixels (absolute surface height on screen).
    pub displacement_px: f64,
}

/// Measure the surface under a plunger at container-relative `plunger_x`.
///
/// With no active slot the reading is neutral (`0`, `0`). When the plunger
/// misses the piece the reading falls back to the zero-setting block, so the
/// raw value is exactly zero whatever the profile.
pub fn measure(plunger_x: f64, slot: Option<&ActiveSlot>, config: &ComparatorConfig) -> Reading {
    let Some(slot) = slot else {
        return Reading::default();
    };
    let ratio = slot.relative_position(plunger_x);
    let surface_mm = if (0.0..=1.0).contains(&ratio) {
        slot.spec.surface_height_mm(ratio)
    } else {
        config.zero_block_height_mm
    };
    Reading {
        raw_value_mm: surface_mm - config.zero_block_height_mm,
        displacement_px: config.mm_to_px(surface_mm),
    }
}
