//! Workpiece descriptions and the active measurement slot.

use crate::profile::{self, Outline, ProfileType};
use thiserror::Error;

pub const DEFAULT_FILL: &str = "#9CA3AF";
pub const DEFAULT_BORDER: &str = "#4B5563";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkpieceError {
    #[error("missing workpiece attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("nominal height `{0}` is not a number")]
    InvalidHeight(String),
    #[error("nominal height must be positive, got {0}")]
    NonPositiveHeight(f64),
    #[error("unknown profile type `{0}`")]
    UnknownProfile(String),
}

/// Immutable description of a selectable workpiece.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkpieceSpec {
    pub profile: ProfileType,
    pub nominal_height_mm: f64,
    pub fill: String,
    pub border: String,
}

impl WorkpieceSpec {
    pub fn new(profile: ProfileType, nominal_height_mm: f64) -> Result<Self, WorkpieceError> {
        if !(nominal_height_mm > 0.0) {
            return Err(WorkpieceError::NonPositiveHeight(nominal_height_mm));
        }
        Ok(Self {
            profile,
            nominal_height_mm,
            fill: DEFAULT_FILL.to_string(),
            border: DEFAULT_BORDER.to_string(),
        })
    }

    pub fn with_colors(mut self, fill: impl Into<String>, border: impl Into<String>) -> Self {
        self.fill = fill.into();
        self.border = border.into();
        self
    }

    /// Build a spec from the declarative `data-*` attributes of a source
    /// element. An unrecognised profile falls back to flat with a warning; a
    /// missing or invalid height is an error.
    pub fn from_attributes(
        nominal_height: Option<&str>,
        profile: Option<&str>,
        fill: Option<&str>,
        border: Option<&str>,
    ) -> Result<Self, WorkpieceError> {
        let raw = nominal_height.ok_or(WorkpieceError::MissingAttribute("nominal-height"))?;
        let nominal_height_mm: f64 = raw
            .trim()
            .parse()
            .map_err(|_| WorkpieceError::InvalidHeight(raw.to_string()))?;
        let profile = match profile {
            Some(p) => p.parse::<ProfileType>().unwrap_or_else(|e| {
                log::warn!("[workpiece] {e}; treating as flat");
                ProfileType::Flat
            }),
            None => ProfileType::Flat,
        };
        let spec = Self::new(profile, nominal_height_mm)?;
        Ok(spec.with_colors(
            fill.unwrap_or(DEFAULT_FILL),
            border.unwrap_or(DEFAULT_BORDER),
        ))
    }

    /// Surface height (mm) at a relative position across the piece.
    #[inline]
    pub fn surface_height_mm(&self, relative_position: f64) -> f64 {
        self.nominal_height_mm
            + profile::height_offset(
                self.profile,
                relative_position,
                self.profile.amplitude_mm(),
            )
    }

    /// Height of the element box: nominal plus headroom for the profile peak.
    pub fn box_height_mm(&self) -> f64 {
        self.nominal_height_mm + self.profile.peak_offset_mm()
    }

    pub fn silhouette(&self, samples: usize) -> Outline {
        profile::silhouette(self.profile, self.nominal_height_mm, samples)
    }

    pub fn clip_path(&self, samples: usize) -> String {
        profile::clip_path_polygon(&self.silhouette(samples), self.box_height_mm())
    }
}

/// The single workpiece currently under the plunger.
///
/// `left_px` is relative to the active container's left edge and always lies
/// within the [`TravelBounds`] it was last written with.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSlot {
    pub spec: WorkpieceSpec,
    left_px: f64,
    pub width_px: f64,
}

/// Horizontal travel limits for the active slot's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TravelBounds {
    pub min_left: f64,
    pub max_left: f64,
}

impl TravelBounds {
    /// `[centre - range - w/2, centre + range - w/2]` with the centre at half
    /// the container width.
    pub fn new(container_width: f64, range: f64, piece_width: f64) -> Self {
        let center = container_width / 2.0;
        let half = piece_width / 2.0;
        Self {
            min_left: center - range - half,
            max_left: center + range - half,
        }
    }

    #[inline]
    pub fn clamp(&self, left: f64) -> f64 {
        left.max(self.min_left).min(self.max_left)
    }

    /// Left edge that centres the piece in the container.
    #[inline]
    pub fn center_left(&self) -> f64 {
        (self.min_left + self.max_left) / 2.0
    }
}

impl ActiveSlot {
    /// Place `spec` at `left_px`, clamped into `bounds`.
    pub fn new(spec: WorkpieceSpec, left_px: f64, width_px: f64, bounds: &TravelBounds) -> Self {
        Self {
            spec,
            left_px: bounds.clamp(left_px),
            width_px,
        }
    }

    #[inline]
    pub fn left_px(&self) -> f64 {
        self.left_px
    }

    pub fn set_left_clamped(&mut self, left: f64, bounds: &TravelBounds) -> f64 {
        self.left_px = bounds.clamp(left);
        self.left_px
    }

    /// Relative position of `x` across the slot; outside `[0, 1]` when `x`
    /// misses the piece. Zero-width slots never overlap.
    pub fn relative_position(&self, x: f64) -> f64 {
        if self.width_px > 0.0 {
            (x - self.left_px) / self.width_px
        } else {
            f64::NAN
        }
    }
}
