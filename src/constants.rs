/// Page wiring constants.
///
/// Element ids and selectors the lab page provides, plus the few timings the
/// frontend owns. Keeping them here keeps string literals out of the wiring
/// code.
// Element ids
pub const DIAL_CANVAS_ID: &str = "dialCanvas";
pub const MEASUREMENT_DISPLAY_ID: &str = "measurementDisplay";
pub const PLUNGER_MOUNT_ID: &str = "plungerMount";
pub const PLUNGER_SHAFT_ID: &str = "plungerShaft";
pub const PLUNGER_TIP_ID: &str = "plungerTip";
pub const BASE_ID: &str = "base";
pub const ACTIVE_CONTAINER_ID: &str = "activeWorkpieceContainer";
pub const ACTIVE_WORKPIECE_ID: &str = "activeWorkpiece";

// Source workpieces in the sidebar
pub const WORKPIECE_CLASS: &str = "workpiece";
pub const WORKPIECE_SELECTOR: &str = ".workpiece";

// `data-*` keys as exposed by `HTMLElement.dataset` (camelCase)
pub const DATA_NOMINAL_HEIGHT: &str = "nominalHeight";
pub const DATA_PROFILE_TYPE: &str = "type";
pub const DATA_FILL: &str = "bg";
pub const DATA_BORDER: &str = "border";

// Cursors
pub const CURSOR_GRAB: &str = "grab";
pub const CURSOR_GRABBING: &str = "grabbing";

// Timing
pub const STARTUP_DELAY_MS: i32 = 100; // let layout settle before the first geometry read

// Readout
pub const READOUT_DECIMALS: usize = 2;
