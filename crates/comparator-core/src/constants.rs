// Shared measurement and animation tuning constants used by the web frontend.

// Scale
pub const PIXELS_PER_MM: f64 = 10.0; // screen pixels per simulated millimetre
pub const ZERO_BLOCK_HEIGHT_MM: f64 = 4.0; // reference block the dial reads zero on

// Travel
pub const MOVEMENT_RANGE_PX: f64 = 150.0; // max horizontal travel either side of centre

// Double activation (double-click / double-tap)
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

// Needle smoothing
pub const NEEDLE_DECAY_RATE: f64 = 0.05; // fraction of the gap closed per frame
pub const NEEDLE_SNAP_EPSILON: f64 = 1e-4; // gap below which the needle snaps onto the target

// Silhouette
pub const SILHOUETTE_SAMPLES: usize = 20; // intervals, so SAMPLES + 1 outline points

// Plunger
pub const MIN_SHAFT_HEIGHT_PX: f64 = 10.0;

// Dial surface (logical units, scaled by devicePixelRatio when painting)
pub const DIAL_LOGICAL_SIZE: f32 = 500.0;

// Main scale: one full revolution of the main needle is one millimetre,
// the counter needle turns once every ten.
pub const MAIN_DIAL_PERIOD_MM: f64 = 1.0;
pub const COUNTER_DIAL_PERIOD_MM: f64 = 10.0;
