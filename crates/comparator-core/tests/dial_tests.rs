// Host-side tests for dial geometry and scene building.

use comparator_core::dial::{needle_angle, needle_segment, pinion_angle, rack_center_y, tick_angle};
use comparator_core::*;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn lines(scene: &Scene) -> Vec<(Vec2, Vec2, Stroke)> {
    scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke, .. } => Some((*from, *to, *stroke)),
            _ => None,
        })
        .collect()
}

#[test]
fn zero_points_the_needle_at_the_zero_graduation() {
    let style = DialStyle::default();
    let angle = needle_angle(0.0, MAIN_DIAL_PERIOD_MM);
    assert!(approx(angle, -FRAC_PI_2));
    let (_, tip) = needle_segment(style.center(), angle, 20.0, 100.0);
    // Graduation 0 sits at -PI, i.e. straight left of the centre.
    let zero_dir = Vec2::from_angle(tick_angle(0, style.main_ticks));
    let needle_dir = (tip - style.center()).normalize();
    assert!(needle_dir.abs_diff_eq(zero_dir, 1e-4), "{needle_dir:?} vs {zero_dir:?}");
}

#[test]
fn main_needle_wraps_every_millimetre() {
    let a = needle_angle(0.25, MAIN_DIAL_PERIOD_MM);
    let b = needle_angle(3.25, MAIN_DIAL_PERIOD_MM);
    assert!(approx(a, b));
    assert!(approx(a, 0.25 * 2.0 * PI - FRAC_PI_2));
}

#[test]
fn counter_needle_turns_at_a_tenth_of_the_rate() {
    let main = needle_angle(0.5, MAIN_DIAL_PERIOD_MM) + FRAC_PI_2;
    let counter = needle_angle(5.0, COUNTER_DIAL_PERIOD_MM) + FRAC_PI_2;
    assert!(approx(main, counter));
}

#[test]
fn negative_values_stay_in_one_turn() {
    let a = needle_angle(-0.25, MAIN_DIAL_PERIOD_MM);
    assert!(a >= -FRAC_PI_2 && a < 2.0 * PI - FRAC_PI_2);
    assert!(approx(a, 0.75 * 2.0 * PI - FRAC_PI_2));
}

#[test]
fn needle_tail_points_away_from_the_tip() {
    let pivot = Vec2::new(250.0, 250.0);
    let (tail, tip) = needle_segment(pivot, 0.3, 20.0, 180.0);
    assert!(approx((tip - pivot).length(), 180.0));
    assert!(approx((tail - pivot).length(), 20.0));
    assert!((tip - pivot).dot(tail - pivot) < 0.0);
}

#[test]
fn scene_is_a_pure_function_of_state() {
    let style = DialStyle::default();
    let frame = FrameState {
        displayed_mm: 2.37,
        raw_mm: 2.5,
        displacement_px: 65.0,
    };
    let a = build_scene(&frame, &style);
    let b = build_scene(&frame, &style);
    assert_eq!(a.commands(), b.commands());
    assert_eq!(a.commands().first(), Some(&DrawCommand::Clear));
}

#[test]
fn main_scale_has_ten_labels_and_graded_ticks() {
    let style = DialStyle::default();
    let scene = build_scene(&FrameState::default(), &style);
    let labels: Vec<&str> = scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, bold: true, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["0", "10", "20", "30", "40", "50", "60", "70", "80", "90"]);

    let ink = lines(&scene)
        .into_iter()
        .filter(|(_, _, s)| s.color == style.ink && s.width != 2.0)
        .collect::<Vec<_>>();
    assert_eq!(ink.len(), style.main_ticks as usize);
    let majors = ink.iter().filter(|(_, _, s)| s.width == 3.0).count();
    assert_eq!(majors, 10);
    let (from, to, _) = ink[0];
    assert!(approx((from - to).length(), 25.0));
    let (from, to, _) = ink[5];
    assert!(approx((from - to).length(), 15.0));
    let (from, to, _) = ink[1];
    assert!(approx((from - to).length(), 10.0));
}

#[test]
fn needles_follow_the_damped_value_only() {
    let style = DialStyle::default();
    let a = FrameState {
        displayed_mm: 0.4,
        raw_mm: 0.4,
        displacement_px: 44.0,
    };
    let b = FrameState {
        displayed_mm: 0.4,
        raw_mm: 3.0,
        displacement_px: 70.0,
    };
    let red = |frame: &FrameState| {
        lines(&build_scene(frame, &style))
            .into_iter()
            .find(|(_, _, s)| s.color == style.main_needle)
            .unwrap()
    };
    assert_eq!(red(&a).1, red(&b).1);
}

#[test]
fn linkage_follows_the_raw_displacement() {
    let style = DialStyle::default();
    let rect_y = |frame: &FrameState| {
        build_scene(frame, &style)
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Rect { min, .. } => Some(min.y),
                _ => None,
            })
            .unwrap()
    };
    let rest = FrameState::default();
    let lifted = FrameState {
        displacement_px: 40.0,
        ..FrameState::default()
    };
    assert!(approx(rect_y(&rest) - rect_y(&lifted), 40.0));
    assert!(approx(rack_center_y(&style, 0.0), 250.0 + 70.0));
}

#[test]
fn pinion_turns_once_per_millimetre_of_lift() {
    let style = DialStyle::default();
    assert!(approx(pinion_angle(&style, PIXELS_PER_MM as f32), 2.0 * PI));
    let scene = build_scene(&FrameState::default(), &style);
    let teeth = scene
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::Polygon { points, .. } => Some(points.len()),
            _ => None,
        })
        .unwrap();
    assert_eq!(teeth, style.pinion_teeth as usize * 2);
}

#[test]
fn css_colors_are_hex() {
    assert_eq!(Rgb::new(0xFB, 0xBF, 0x24).to_css(), "#FBBF24");
    assert_eq!(DialStyle::default().main_needle.to_css(), "#FF0000");
}
