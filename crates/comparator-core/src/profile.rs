//! Surface profiles.
//!
//! A profile is a height offset as a function of the relative horizontal
//! position across a workpiece (`0.0` = left edge, `1.0` = right edge). The
//! same function drives the clipped silhouette and the plunger contact height,
//! so what is drawn is exactly what is measured.

use crate::workpiece::WorkpieceError;
use smallvec::SmallVec;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ProfileType {
    #[default]
    Flat,
    IrregularA,
    IrregularB,
}

#[derive(Clone, Copy, Debug)]
enum Wave {
    Sin,
    Cos,
}

/// One term of a profile: `weight * wave(half_turns * PI * x)`.
#[derive(Clone, Copy, Debug)]
struct Harmonic {
    wave: Wave,
    weight: f64,
    half_turns: f64,
}

impl Harmonic {
    const fn sin(weight: f64, half_turns: f64) -> Self {
        Self {
            wave: Wave::Sin,
            weight,
            half_turns,
        }
    }

    const fn cos(weight: f64, half_turns: f64) -> Self {
        Self {
            wave: Wave::Cos,
            weight,
            half_turns,
        }
    }

    #[inline]
    fn eval(&self, x: f64) -> f64 {
        let phase = self.half_turns * PI * x;
        let w = match self.wave {
            Wave::Sin => phase.sin(),
            Wave::Cos => phase.cos(),
        };
        self.weight * w
    }
}

const IRREGULAR_A_TERMS: &[Harmonic] = &[Harmonic::sin(1.0, 4.0)];
const IRREGULAR_B_TERMS: &[Harmonic] = &[Harmonic::sin(2.0, 6.0), Harmonic::cos(1.0, 10.0)];

// Both irregular variants deviate by one pixel (0.1 mm) per unit weight.
const IRREGULAR_AMPLITUDE_MM: f64 = 0.1;

impl ProfileType {
    pub const ALL: [ProfileType; 3] = [Self::Flat, Self::IrregularA, Self::IrregularB];

    fn terms(self) -> &'static [Harmonic] {
        match self {
            Self::Flat => &[],
            Self::IrregularA => IRREGULAR_A_TERMS,
            Self::IrregularB => IRREGULAR_B_TERMS,
        }
    }

    /// Amplitude (mm) the unit-weight shape is scaled by.
    pub fn amplitude_mm(self) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::IrregularA | Self::IrregularB => IRREGULAR_AMPLITUDE_MM,
        }
    }

    /// Upper bound of `|height_offset|` for this profile, in mm.
    pub fn peak_offset_mm(self) -> f64 {
        let weights: f64 = self.terms().iter().map(|t| t.weight.abs()).sum();
        weights * self.amplitude_mm()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::IrregularA => "irregularA",
            Self::IrregularB => "irregularB",
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileType {
    type Err = WorkpieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "irregulara" | "irregular10" => Ok(Self::IrregularA),
            "irregularb" | "irregular20" => Ok(Self::IrregularB),
            _ => Err(WorkpieceError::UnknownProfile(s.to_string())),
        }
    }
}

/// Height offset of `profile` at `relative_position`, scaled by `amplitude`.
///
/// Flat profiles are zero everywhere. The position is not clamped; callers
/// decide what happens outside `[0, 1]`.
pub fn height_offset(profile: ProfileType, relative_position: f64, amplitude: f64) -> f64 {
    let shape: f64 = profile
        .terms()
        .iter()
        .map(|t| t.eval(relative_position))
        .sum();
    shape * amplitude
}

/// A point on a workpiece's top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfilePoint {
    pub ratio: f64,
    pub surface_mm: f64,
}

pub type Outline = SmallVec<[ProfilePoint; 24]>;

/// Sample the top edge at `samples` even intervals (`samples + 1` points, left
/// to right, both edges included).
pub fn silhouette(profile: ProfileType, nominal_height_mm: f64, samples: usize) -> Outline {
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| {
            let ratio = i as f64 / samples as f64;
            ProfilePoint {
                ratio,
                surface_mm: nominal_height_mm
                    + height_offset(profile, ratio, profile.amplitude_mm()),
            }
        })
        .collect()
}

/// CSS `clip-path` polygon for an element `box_height_mm` tall whose bottom
/// edge is the workpiece base. The outline is walked right to left after the
/// two bottom corners so the polygon closes without crossing itself.
pub fn clip_path_polygon(outline: &[ProfilePoint], box_height_mm: f64) -> String {
    let mut css = String::from("polygon(0% 100%, 100% 100%");
    for p in outline.iter().rev() {
        let y = if box_height_mm > 0.0 {
            (box_height_mm - p.surface_mm) / box_height_mm * 100.0
        } else {
            0.0
        };
        css.push_str(&format!(", {:.2}% {:.2}%", p.ratio * 100.0, y));
    }
    css.push(')');
    css
}
