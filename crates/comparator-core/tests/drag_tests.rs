// Host-side tests for dragging and double-tap activation.

use comparator_core::*;
use instant::Instant;
use proptest::prelude::*;
use std::time::Duration;

const CONTAINER_LEFT: f64 = 40.0;
const CONTAINER_WIDTH: f64 = 600.0;
const PIECE_WIDTH: f64 = 120.0;

fn bounds() -> TravelBounds {
    TravelBounds::new(CONTAINER_WIDTH, MOVEMENT_RANGE_PX, PIECE_WIDTH)
}

fn slot() -> ActiveSlot {
    let spec = WorkpieceSpec::new(ProfileType::Flat, 10.0).unwrap();
    ActiveSlot::new(spec, bounds().center_left(), PIECE_WIDTH, &bounds())
}

#[test]
fn travel_bounds_are_symmetric_about_the_centre() {
    let b = bounds();
    assert_eq!(b.min_left, 300.0 - 150.0 - 60.0);
    assert_eq!(b.max_left, 300.0 + 150.0 - 60.0);
    assert_eq!(b.center_left(), 240.0);
}

#[test]
fn drag_without_grab_is_a_noop() {
    let drag = DragController::new(MOVEMENT_RANGE_PX);
    let mut s = slot();
    assert_eq!(drag.drag_to(Some(&mut s), 500.0, CONTAINER_LEFT, CONTAINER_WIDTH), None);
    assert_eq!(s.left_px(), 240.0);
}

#[test]
fn grab_requires_an_active_slot() {
    let mut drag = DragController::new(MOVEMENT_RANGE_PX);
    assert!(!drag.begin(None, 100.0, 50.0));
    assert!(!drag.is_dragging());
}

#[test]
fn drag_keeps_the_grab_offset() {
    let mut drag = DragController::new(MOVEMENT_RANGE_PX);
    let mut s = slot();
    let object_left = CONTAINER_LEFT + s.left_px();
    assert!(drag.begin(Some(&s), object_left + 30.0, object_left));
    assert_eq!(drag.state().grab_offset, 30.0);

    // Move the pointer 25px right: the piece follows by 25px.
    let left = drag
        .drag_to(Some(&mut s), object_left + 55.0, CONTAINER_LEFT, CONTAINER_WIDTH)
        .unwrap();
    assert_eq!(left, 265.0);
    assert_eq!(s.left_px(), 265.0);
}

#[test]
fn drag_clamps_far_outside_the_container() {
    let mut drag = DragController::new(MOVEMENT_RANGE_PX);
    let mut s = slot();
    drag.begin(Some(&s), 0.0, 0.0);
    let left = drag
        .drag_to(Some(&mut s), -10_000.0, CONTAINER_LEFT, CONTAINER_WIDTH)
        .unwrap();
    assert_eq!(left, bounds().min_left);
    let left = drag
        .drag_to(Some(&mut s), 10_000.0, CONTAINER_LEFT, CONTAINER_WIDTH)
        .unwrap();
    assert_eq!(left, bounds().max_left);
}

#[test]
fn release_disengages_without_snapping() {
    let mut drag = DragController::new(MOVEMENT_RANGE_PX);
    let mut s = slot();
    drag.begin(Some(&s), 0.0, 0.0);
    drag.drag_to(Some(&mut s), 250.0, CONTAINER_LEFT, CONTAINER_WIDTH);
    assert!(drag.end());
    assert!(!drag.end());
    assert_eq!(s.left_px(), 210.0);
    assert_eq!(drag.drag_to(Some(&mut s), 0.0, CONTAINER_LEFT, CONTAINER_WIDTH), None);
    assert_eq!(s.left_px(), 210.0);
}

proptest! {
    #[test]
    fn dragging_never_leaves_bounds(
        grab in 0.0f64..PIECE_WIDTH,
        pointers in prop::collection::vec(-5_000.0f64..5_000.0, 1..100),
    ) {
        let mut drag = DragController::new(MOVEMENT_RANGE_PX);
        let mut s = slot();
        let object_left = CONTAINER_LEFT + s.left_px();
        drag.begin(Some(&s), object_left + grab, object_left);
        let b = bounds();
        for x in pointers {
            let left = drag
                .drag_to(Some(&mut s), x, CONTAINER_LEFT, CONTAINER_WIDTH)
                .unwrap();
            prop_assert!(left >= b.min_left && left <= b.max_left);
            prop_assert_eq!(left, s.left_px());
        }
    }
}

#[test]
fn taps_inside_the_window_form_a_double_tap() {
    let mut taps = TapDetector::new(Duration::from_millis(DOUBLE_TAP_WINDOW_MS));
    let t0 = Instant::now();
    assert_eq!(taps.register(t0), Tap::Single);
    assert_eq!(taps.register(t0 + Duration::from_millis(150)), Tap::Double);
}

#[test]
fn taps_outside_the_window_stay_independent() {
    let mut taps = TapDetector::new(Duration::from_millis(DOUBLE_TAP_WINDOW_MS));
    let t0 = Instant::now();
    assert_eq!(taps.register(t0), Tap::Single);
    assert_eq!(taps.register(t0 + Duration::from_millis(400)), Tap::Single);
    // The second tap is the new reference point.
    assert_eq!(taps.register(t0 + Duration::from_millis(550)), Tap::Double);
}

#[test]
fn simultaneous_taps_do_not_count_as_double() {
    let mut taps = TapDetector::new(Duration::from_millis(DOUBLE_TAP_WINDOW_MS));
    let t0 = Instant::now();
    taps.register(t0);
    assert_eq!(taps.register(t0), Tap::Single);
}

#[test]
fn window_boundary_is_exclusive() {
    let mut taps = TapDetector::new(Duration::from_millis(DOUBLE_TAP_WINDOW_MS));
    let t0 = Instant::now();
    taps.register(t0);
    assert_eq!(
        taps.register(t0 + Duration::from_millis(DOUBLE_TAP_WINDOW_MS)),
        Tap::Single
    );
}
