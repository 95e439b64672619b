pub mod config;
pub mod constants;
pub mod dial;
pub mod drag;
pub mod measure;
pub mod needle;
pub mod profile;
pub mod sim;
pub mod state;
pub mod workpiece;

pub use config::*;
pub use constants::*;
pub use dial::{build_scene, DialStyle, DrawCommand, Rgb, Scene, Stroke};
pub use drag::{DragController, DragState, Tap, TapDetector};
pub use measure::{measure, Reading};
pub use needle::NeedleAnimator;
pub use profile::{height_offset, ProfilePoint, ProfileType};
pub use sim::Simulation;
pub use state::*;
pub use workpiece::{ActiveSlot, TravelBounds, WorkpieceError, WorkpieceSpec};
