// Host-side tests for pure layout helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}

use layout::*;

#[test]
fn rect_edges_and_centre() {
    let r = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(r.right(), 110.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center_x(), 60.0);
    assert!(r.is_laid_out());
    assert!(!Rect::default().is_laid_out());
}

#[test]
fn shaft_spans_mount_to_base_less_half_the_tip() {
    let mount = Rect::new(200.0, 50.0, 60.0, 30.0); // bottom at 80
    let base = Rect::new(0.0, 400.0, 800.0, 40.0);
    assert_eq!(max_shaft_height(&mount, &base, 20.0), Some(400.0 - 80.0 - 10.0));
}

#[test]
fn shaft_setup_waits_for_layout() {
    let mount = Rect::new(200.0, 50.0, 60.0, 30.0);
    let unplaced = Rect::new(0.0, 0.0, 800.0, 40.0);
    assert_eq!(max_shaft_height(&mount, &unplaced, 20.0), None);
    let collapsed = Rect::new(0.0, 300.0, 0.0, 0.0);
    assert_eq!(max_shaft_height(&mount, &collapsed, 20.0), None);
}

#[test]
fn plunger_x_is_container_relative() {
    let container = Rect::new(100.0, 300.0, 600.0, 200.0);
    let tip = Rect::new(390.0, 280.0, 20.0, 20.0);
    assert_eq!(plunger_x_in(&container, &tip), 300.0);
}

#[test]
fn offsets_and_resting_position() {
    let container = Rect::new(100.0, 300.0, 600.0, 200.0);
    let source = Rect::new(40.0, 120.0, 80.0, 100.0);
    assert_eq!(offset_within(&source, &container), (-60.0, -180.0));
    assert_eq!(resting_top(200.0, 101.0), 99.0);
}

#[test]
fn css_pixels_and_readout_formatting() {
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(px(10.0), "10px");
    assert_eq!(format_reading(6.0, 2), "6.00");
    assert_eq!(format_reading(0.123_9, 2), "0.12");
    assert_eq!(format_reading(-1.5, 2), "-1.50");
}
