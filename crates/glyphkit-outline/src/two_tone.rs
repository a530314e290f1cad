//! Two-tone glyphs: a filled silhouette with an inset highlight on top.

use glyphkit_core::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bbox::BoundingBox;
use crate::engine::{BufferParams, CapStyle, GeometryEngine, JoinStyle};
use crate::extract::DEFAULT_TOLERANCE;
use crate::svg::SvgAttributes;
use crate::transform::AffineTransform;
use crate::vector_path::VectorPath;

/// How the inner highlight is derived and how both layers are filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoToneStyle {
    /// Erosion distance from the silhouette to the highlight, in path units.
    pub inset: f64,
    pub join: JoinStyle,
    pub cap: CapStyle,
    pub mitre_limit: f64,
    pub tolerance: f64,
    pub outer_fill: String,
    pub inner_fill: String,
}

impl Default for TwoToneStyle {
    fn default() -> Self {
        Self {
            inset: 25.0,
            join: JoinStyle::Round,
            cap: CapStyle::Round,
            mitre_limit: BufferParams::DEFAULT_MITRE_LIMIT,
            tolerance: DEFAULT_TOLERANCE,
            outer_fill: "rgb(52, 92, 161)".to_string(),
            inner_fill: "rgb(249, 201, 50)".to_string(),
        }
    }
}

impl TwoToneStyle {
    /// Buffer parameters eroding the silhouette by `inset`.
    pub fn buffer_params(&self) -> BufferParams {
        BufferParams::new(-self.inset)
            .with_join(self.join)
            .with_cap(self.cap)
            .with_mitre_limit(self.mitre_limit)
            .with_tolerance(self.tolerance)
    }

    fn fill(color: &str) -> SvgAttributes {
        SvgAttributes::empty().with("fill", color)
    }
}

/// Outer silhouette plus the inner path eroded from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoToneGlyph {
    outer: VectorPath,
    inner: VectorPath,
    style: TwoToneStyle,
}

impl TwoToneGlyph {
    pub fn new<E>(outer: VectorPath, engine: &E, style: &TwoToneStyle) -> Result<Self>
    where
        E: GeometryEngine + ?Sized,
    {
        let inner = outer.buffer(engine, &style.buffer_params())?;
        if inner.is_empty() && !outer.is_empty() {
            debug!(inset = style.inset, "Inset erodes the whole glyph");
        }
        Ok(Self {
            outer,
            inner,
            style: style.clone(),
        })
    }

    pub fn outer(&self) -> &VectorPath {
        &self.outer
    }

    pub fn inner(&self) -> &VectorPath {
        &self.inner
    }

    pub fn style(&self) -> &TwoToneStyle {
        &self.style
    }

    /// Applies `t` to both layers.
    pub fn transform(&self, t: &AffineTransform) -> TwoToneGlyph {
        TwoToneGlyph {
            outer: self.outer.transform(t),
            inner: self.inner.transform(t),
            style: self.style.clone(),
        }
    }

    pub fn scale(&self, xfact: f64, yfact: f64) -> TwoToneGlyph {
        self.transform(&AffineTransform::scale(xfact, yfact))
    }

    pub fn translate(&self, xoff: f64, yoff: f64) -> TwoToneGlyph {
        self.transform(&AffineTransform::translation(xoff, yoff))
    }

    pub fn bbox(&self) -> BoundingBox {
        self.outer.bbox().union(self.inner.bbox())
    }

    /// Both layers in a `<g>`, silhouette first so the highlight paints on
    /// top.
    pub fn svg(&self) -> String {
        format!(
            "<g>\n    {}\n    {}\n</g>",
            self.outer.svg(&TwoToneStyle::fill(&self.style.outer_fill)),
            self.inner.svg(&TwoToneStyle::fill(&self.style.inner_fill)),
        )
    }
}
