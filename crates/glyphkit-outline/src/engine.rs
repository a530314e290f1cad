//! Geometry engine capability and buffer parameters.
//!
//! Offsetting itself is delegated: a [`GeometryEngine`] takes a
//! polygon-with-holes plus a signed distance and join/cap styles and returns
//! a new polygon-with-holes. Positive distances dilate, negative distances
//! erode.

use std::fmt;
use std::str::FromStr;

use glyphkit_core::{GeometryError, Result};
use serde::{Deserialize, Serialize};

use crate::extract::{DEFAULT_TOLERANCE, MIN_TOLERANCE};
use crate::geometry::Geometry;

/// Corner treatment where two offset edges meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStyle {
    #[default]
    Round,
    Mitre,
    Bevel,
}

impl fmt::Display for JoinStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Round => write!(f, "round"),
            Self::Mitre => write!(f, "mitre"),
            Self::Bevel => write!(f, "bevel"),
        }
    }
}

impl FromStr for JoinStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round" => Ok(Self::Round),
            "mitre" | "miter" => Ok(Self::Mitre),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!("Unknown join style: {}", s)),
        }
    }
}

/// End treatment of open lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapStyle {
    #[default]
    Round,
    Square,
    Flat,
}

impl fmt::Display for CapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Round => write!(f, "round"),
            Self::Square => write!(f, "square"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

impl FromStr for CapStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            "flat" | "butt" => Ok(Self::Flat),
            _ => Err(format!("Unknown cap style: {}", s)),
        }
    }
}

/// Parameters of one buffer operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BufferParams {
    /// Signed offset distance; negative erodes.
    pub distance: f64,
    pub join: JoinStyle,
    pub cap: CapStyle,
    /// Maximum ratio of mitre length to offset distance before a mitre join
    /// is bevelled instead.
    pub mitre_limit: f64,
    /// Curve flattening tolerance, used both when extracting the input
    /// geometry and when the engine discretizes arcs.
    pub tolerance: f64,
}

impl BufferParams {
    pub const DEFAULT_MITRE_LIMIT: f64 = 5.0;

    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            join: JoinStyle::default(),
            cap: CapStyle::default(),
            mitre_limit: Self::DEFAULT_MITRE_LIMIT,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_join(mut self, join: JoinStyle) -> Self {
        self.join = join;
        self
    }

    pub fn with_cap(mut self, cap: CapStyle) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_mitre_limit(mut self, mitre_limit: f64) -> Self {
        self.mitre_limit = mitre_limit;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.distance.is_finite() {
            return Err(GeometryError::invalid_parameter("distance", "must be finite").into());
        }
        if !self.tolerance.is_finite() || self.tolerance < MIN_TOLERANCE {
            return Err(GeometryError::invalid_parameter(
                "tolerance",
                format!("must be at least {MIN_TOLERANCE:e}, got {}", self.tolerance),
            )
            .into());
        }
        if self.mitre_limit.is_nan() || self.mitre_limit < 1.0 {
            return Err(GeometryError::invalid_parameter(
                "mitre_limit",
                format!("must be at least 1.0, got {}", self.mitre_limit),
            )
            .into());
        }
        Ok(())
    }
}

impl Default for BufferParams {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A polygon offsetting implementation.
///
/// Engines may return rings in any orientation; callers re-orient the result.
pub trait GeometryEngine: Send + Sync {
    fn buffer(&self, geometry: &Geometry, params: &BufferParams) -> Result<Geometry>;
}

impl<E: GeometryEngine + ?Sized> GeometryEngine for &E {
    fn buffer(&self, geometry: &Geometry, params: &BufferParams) -> Result<Geometry> {
        (**self).buffer(geometry, params)
    }
}

impl<E: GeometryEngine + ?Sized> GeometryEngine for Box<E> {
    fn buffer(&self, geometry: &Geometry, params: &BufferParams) -> Result<Geometry> {
        (**self).buffer(geometry, params)
    }
}
