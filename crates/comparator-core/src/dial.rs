//! Dial gauge scene.
//!
//! The scene is rebuilt from scratch every frame as a flat list of draw
//! commands in logical units (a `DIAL_LOGICAL_SIZE` square). Painting it is
//! left to the frontend, which keeps the geometry testable on the host.

use crate::constants::{COUNTER_DIAL_PERIOD_MM, DIAL_LOGICAL_SIZE, MAIN_DIAL_PERIOD_MM, PIXELS_PER_MM};
use crate::state::FrameState;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_css(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Rgb, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Rect {
        min: Vec2,
        size: Vec2,
        fill: Rgb,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
        round_cap: bool,
    },
    Polygon {
        points: Vec<Vec2>,
        fill: Rgb,
        stroke: Stroke,
    },
    Text {
        at: Vec2,
        text: String,
        size_px: f32,
        bold: bool,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// Geometry and palette of the gauge.
#[derive(Debug, Clone)]
pub struct DialStyle {
    pub size: f32,
    pub main_radius: f32,
    pub counter_radius: f32,
    /// Offset of the revolution counter's centre from the main centre.
    pub counter_offset: Vec2,
    pub main_ticks: u32,
    pub counter_ticks: u32,
    pub font_family: &'static str,

    pub bezel: Rgb,
    pub bezel_rim: Rgb,
    pub face: Rgb,
    pub ink: Rgb,
    pub main_needle: Rgb,
    pub counter_rim: Rgb,
    pub hub: Rgb,
    pub rack: Rgb,
    pub rack_teeth: Rgb,
    pub pinion: Rgb,
    pub pinion_edge: Rgb,

    pub rack_size: Vec2,
    pub rack_rest_offset: f32,
    pub rack_teeth_count: u32,
    pub pinion_radius: f32,
    pub pinion_teeth: u32,
    pub pinion_tooth_depth: f32,
    /// Plunger lift (px) that turns the pinion once.
    pub pinion_px_per_turn: f32,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            size: DIAL_LOGICAL_SIZE,
            main_radius: 220.0,
            counter_radius: 50.0,
            counter_offset: Vec2::new(0.0, -60.0),
            main_ticks: 100,
            counter_ticks: 10,
            font_family: "Inter",

            bezel: Rgb::new(0xD1, 0xD5, 0xDB),
            bezel_rim: Rgb::new(0x6B, 0x72, 0x80),
            face: Rgb::new(0xFF, 0xFF, 0xFF),
            ink: Rgb::new(0x00, 0x00, 0x00),
            main_needle: Rgb::new(0xFF, 0x00, 0x00),
            counter_rim: Rgb::new(0x9C, 0xA3, 0xAF),
            hub: Rgb::new(0x4B, 0x55, 0x63),
            rack: Rgb::new(0x9C, 0xA3, 0xAF),
            rack_teeth: Rgb::new(0x6B, 0x72, 0x80),
            pinion: Rgb::new(0xFB, 0xBF, 0x24),
            pinion_edge: Rgb::new(0xB4, 0x53, 0x09),

            rack_size: Vec2::new(20.0, 150.0),
            rack_rest_offset: 70.0,
            rack_teeth_count: 15,
            pinion_radius: 40.0,
            pinion_teeth: 20,
            pinion_tooth_depth: 8.0,
            pinion_px_per_turn: PIXELS_PER_MM as f32,
        }
    }
}

impl DialStyle {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.size / 2.0)
    }

    #[inline]
    pub fn counter_center(&self) -> Vec2 {
        self.center() + self.counter_offset
    }
}

/// Needle angle (radians, canvas convention: y down, 0 = +x) for `value` on a
/// dial that turns once per `period`. Zero points straight up at -PI/2.
pub fn needle_angle(value: f64, period: f64) -> f32 {
    let frac = (value.rem_euclid(period) / period) as f32;
    frac * TAU - FRAC_PI_2
}

/// Angle of scale graduation `i` out of `count`; graduation 0 sits at -PI.
#[inline]
pub fn tick_angle(i: u32, count: u32) -> f32 {
    (i as f32 / count as f32) * TAU - PI
}

#[inline]
fn polar(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::from_angle(angle) * radius
}

/// Endpoints `(tail, tip)` of a needle drawn along local -y and rotated by
/// `angle` about `pivot`.
pub fn needle_segment(pivot: Vec2, angle: f32, tail: f32, length: f32) -> (Vec2, Vec2) {
    let rot = Vec2::from_angle(angle);
    (
        pivot + rot.rotate(Vec2::new(0.0, tail)),
        pivot + rot.rotate(Vec2::new(0.0, -length)),
    )
}

/// Vertical centre of the rack for a given plunger lift.
#[inline]
pub fn rack_center_y(style: &DialStyle, displacement_px: f32) -> f32 {
    style.center().y + style.rack_rest_offset - displacement_px
}

#[inline]
pub fn pinion_angle(style: &DialStyle, displacement_px: f32) -> f32 {
    displacement_px * TAU / style.pinion_px_per_turn
}

/// Build the full frame. Needles follow the damped value; the linkage follows
/// the raw displacement.
pub fn build_scene(frame: &FrameState, style: &DialStyle) -> Scene {
    let mut scene = Scene::new();
    scene.add_command(DrawCommand::Clear);
    add_face(&mut scene, style);
    add_linkage(&mut scene, style, frame.displacement_px as f32);
    add_main_scale(&mut scene, style);
    add_counter_dial(&mut scene, style);
    add_needles(&mut scene, style, frame.displayed_mm);
    scene.add_command(DrawCommand::Circle {
        center: style.center(),
        radius: 8.0,
        fill: Some(style.hub),
        stroke: None,
    });
    scene
}

fn add_face(scene: &mut Scene, style: &DialStyle) {
    scene.add_command(DrawCommand::Circle {
        center: style.center(),
        radius: style.main_radius + 15.0,
        fill: Some(style.bezel),
        stroke: Some(Stroke::new(style.bezel_rim, 5.0)),
    });
    scene.add_command(DrawCommand::Circle {
        center: style.center(),
        radius: style.main_radius + 10.0,
        fill: Some(style.face),
        stroke: None,
    });
}

fn add_linkage(scene: &mut Scene, style: &DialStyle, displacement_px: f32) {
    let c = style.center();
    let rack_y = rack_center_y(style, displacement_px);
    let half = style.rack_size / 2.0;
    scene.add_command(DrawCommand::Rect {
        min: Vec2::new(c.x - half.x, rack_y - half.y),
        size: style.rack_size,
        fill: style.rack,
    });
    let pitch = style.rack_size.y / style.rack_teeth_count as f32;
    for i in 0..style.rack_teeth_count {
        let y = rack_y - half.y + i as f32 * pitch + pitch / 2.0;
        scene.add_command(DrawCommand::Line {
            from: Vec2::new(c.x - half.x, y),
            to: Vec2::new(c.x - half.x - 5.0, y),
            stroke: Stroke::new(style.rack_teeth, 2.0),
            round_cap: false,
        });
    }

    let pivot = Vec2::new(c.x + style.pinion_radius - 5.0, c.y);
    let turn = pinion_angle(style, displacement_px);
    let step = TAU / style.pinion_teeth as f32;
    let mut points = Vec::with_capacity(style.pinion_teeth as usize * 2);
    for i in 0..style.pinion_teeth {
        let a = turn + i as f32 * step;
        points.push(polar(pivot, style.pinion_radius, a));
        points.push(polar(
            pivot,
            style.pinion_radius - style.pinion_tooth_depth,
            a + step / 2.0,
        ));
    }
    scene.add_command(DrawCommand::Polygon {
        points,
        fill: style.pinion,
        stroke: Stroke::new(style.pinion_edge, 1.0),
    });
    scene.add_command(DrawCommand::Circle {
        center: pivot,
        radius: 5.0,
        fill: Some(style.hub),
        stroke: None,
    });
}

fn add_main_scale(scene: &mut Scene, style: &DialStyle) {
    let c = style.center();
    let r = style.main_radius;
    for i in 0..style.main_ticks {
        let angle = tick_angle(i, style.main_ticks);
        let major = i % 10 == 0;
        let (len, width) = match (major, i % 5 == 0) {
            (true, _) => (25.0, 3.0),
            (false, true) => (15.0, 1.0),
            (false, false) => (10.0, 1.0),
        };
        scene.add_command(DrawCommand::Line {
            from: polar(c, r, angle),
            to: polar(c, r - len, angle),
            stroke: Stroke::new(style.ink, width),
            round_cap: false,
        });
        if major {
            scene.add_command(DrawCommand::Text {
                at: polar(c, r - 50.0, angle),
                text: i.to_string(),
                size_px: 32.0,
                bold: true,
                color: style.ink,
            });
        }
    }
}

fn add_counter_dial(scene: &mut Scene, style: &DialStyle) {
    let c = style.counter_center();
    let r = style.counter_radius;
    let rim = Stroke::new(style.counter_rim, 4.0);
    scene.add_command(DrawCommand::Circle {
        center: c,
        radius: r,
        fill: Some(style.face),
        stroke: Some(rim),
    });
    for i in 0..style.counter_ticks {
        let angle = tick_angle(i, style.counter_ticks);
        scene.add_command(DrawCommand::Line {
            from: polar(c, r - 5.0, angle),
            to: polar(c, r - 10.0, angle),
            stroke: rim,
            round_cap: false,
        });
        scene.add_command(DrawCommand::Text {
            at: polar(c, r - 22.0, angle),
            text: i.to_string(),
            size_px: 18.0,
            bold: false,
            color: style.ink,
        });
    }
}

fn add_needles(scene: &mut Scene, style: &DialStyle, value_mm: f64) {
    let (tail, tip) = needle_segment(
        style.center(),
        needle_angle(value_mm, MAIN_DIAL_PERIOD_MM),
        20.0,
        style.main_radius - 40.0,
    );
    scene.add_command(DrawCommand::Line {
        from: tail,
        to: tip,
        stroke: Stroke::new(style.main_needle, 4.0),
        round_cap: true,
    });

    let cc = style.counter_center();
    let (tail, tip) = needle_segment(
        cc,
        needle_angle(value_mm, COUNTER_DIAL_PERIOD_MM),
        10.0,
        style.counter_radius - 10.0,
    );
    scene.add_command(DrawCommand::Line {
        from: tail,
        to: tip,
        stroke: Stroke::new(style.ink, 2.0),
        round_cap: true,
    });
    scene.add_command(DrawCommand::Circle {
        center: cc,
        radius: 4.0,
        fill: Some(style.hub),
        stroke: None,
    });
}
