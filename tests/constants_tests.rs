// Host-side tests for page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [
        DIAL_CANVAS_ID,
        MEASUREMENT_DISPLAY_ID,
        PLUNGER_MOUNT_ID,
        PLUNGER_SHAFT_ID,
        PLUNGER_TIP_ID,
        BASE_ID,
        ACTIVE_CONTAINER_ID,
        ACTIVE_WORKPIECE_ID,
    ];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_empty() && !id.starts_with('#')));
}

#[test]
fn selector_targets_the_workpiece_class() {
    assert_eq!(WORKPIECE_SELECTOR, format!(".{WORKPIECE_CLASS}"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_within_reasonable_bounds() {
    assert!(STARTUP_DELAY_MS > 0 && STARTUP_DELAY_MS < 1_000);
    assert!(READOUT_DECIMALS >= 1);
}

#[test]
fn dataset_keys_are_camel_case() {
    for key in [DATA_NOMINAL_HEIGHT, DATA_PROFILE_TYPE, DATA_FILL, DATA_BORDER] {
        assert!(!key.contains('-'), "{key} should be the dataset form");
    }
}
