//! The immutable vector path value.

use glyphkit_core::Result;
use tracing::debug;

use crate::bbox::BoundingBox;
use crate::builder::PathBuilder;
use crate::engine::{BufferParams, GeometryEngine};
use crate::extract::{self, DEFAULT_TOLERANCE};
use crate::geometry::Geometry;
use crate::segment::Segment;
use crate::svg::{self, SvgAttributes};
use crate::transform::AffineTransform;

/// An ordered segment stream plus a reflection parity flag.
///
/// `Empty` is absorbing: every operation on it yields `Empty` again (or the
/// empty value of its output type). Paths are never mutated; every
/// operation returns a new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VectorPath {
    #[default]
    Empty,
    Populated(PathData),
}

/// Segments of a non-empty path. Always starts with a `MoveTo` and closes
/// every sub-contour.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    segments: Vec<Segment>,
    inverted: bool,
}

impl PathData {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }
}

impl VectorPath {
    pub(crate) fn from_segments(segments: Vec<Segment>, inverted: bool) -> Self {
        if segments.is_empty() {
            VectorPath::Empty
        } else {
            VectorPath::Populated(PathData { segments, inverted })
        }
    }

    /// Builds a path from a glyph outline produced by rusttype.
    ///
    /// rusttype hands out y-down coordinates (it scales y by the negated
    /// scale), which is a reflection of font space, so the path starts out
    /// inverted. Glyphs without an outline, such as a space, give `Empty`.
    pub fn from_glyph(glyph: &rusttype::ScaledGlyph<'_>) -> Self {
        let mut builder = PathBuilder::with_parity(true);
        if !glyph.build_outline(&mut builder) {
            debug!(glyph = glyph.id().0, "Glyph has no outline");
            return VectorPath::Empty;
        }
        builder.build()
    }

    /// Rebuilds a path from polygon rings, not inverted.
    pub fn from_geometry(geometry: &Geometry) -> Self {
        Self::from_geometry_with_parity(geometry, false)
    }

    pub fn from_geometry_with_parity(geometry: &Geometry, inverted: bool) -> Self {
        let mut builder = PathBuilder::with_parity(inverted);
        builder.add_geometry(geometry);
        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, VectorPath::Empty)
    }

    /// Whether an odd number of reflections has been applied.
    pub fn inverted(&self) -> bool {
        match self {
            VectorPath::Empty => false,
            VectorPath::Populated(data) => data.inverted,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        match self {
            VectorPath::Empty => &[],
            VectorPath::Populated(data) => &data.segments,
        }
    }

    pub fn contour_count(&self) -> usize {
        self.segments().iter().filter(|s| s.is_move()).count()
    }

    /// Maps every point of every segment through `t`.
    ///
    /// Bezier curves are affine invariant, so curves keep their arity and
    /// only their control points move. The parity flag flips when `t` has an
    /// odd number of negative linear coefficients.
    pub fn transform(&self, t: &AffineTransform) -> VectorPath {
        match self {
            VectorPath::Empty => VectorPath::Empty,
            VectorPath::Populated(data) => VectorPath::Populated(PathData {
                segments: data
                    .segments
                    .iter()
                    .map(|s| s.map_points(|p| t.apply(p)))
                    .collect(),
                inverted: data.inverted ^ t.flips_parity(),
            }),
        }
    }

    /// `x' = a·x + b·y + c`, `y' = d·x + e·y + f`.
    pub fn transform_coeffs(&self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> VectorPath {
        self.transform(&AffineTransform::new(a, b, c, d, e, f))
    }

    pub fn scale(&self, xfact: f64, yfact: f64) -> VectorPath {
        self.transform(&AffineTransform::scale(xfact, yfact))
    }

    pub fn translate(&self, xoff: f64, yoff: f64) -> VectorPath {
        self.transform(&AffineTransform::translation(xoff, yoff))
    }

    /// Mirrors the path top-to-bottom inside its own bounding box, turning
    /// y-up coordinates into y-down ones without moving the box.
    pub fn invert_y(&self) -> VectorPath {
        match self.bbox().extent() {
            None => VectorPath::Empty,
            Some(extent) => self.transform_coeffs(1.0, 0.0, 0.0, 0.0, -1.0, extent.ymax + extent.ymin),
        }
    }

    /// Box over every coordinate-bearing point, curve control points
    /// included.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::from_points(self.segments().iter().flat_map(|s| s.points()))
    }

    /// Polygon-with-holes view of the path at [`DEFAULT_TOLERANCE`].
    pub fn shapely_polygon(&self) -> Geometry {
        self.to_geometry(DEFAULT_TOLERANCE)
    }

    /// Polygon-with-holes view of the path, flattening curves to within
    /// `tolerance`. A tolerance that is not finite or is too small to
    /// flatten with uses [`DEFAULT_TOLERANCE`] instead.
    pub fn to_geometry(&self, tolerance: f64) -> Geometry {
        match self {
            VectorPath::Empty => Geometry::Empty,
            VectorPath::Populated(data) => extract::extract(&data.segments, data.inverted, tolerance),
        }
    }

    /// Bare path data, e.g. `M 0.000,0.000 L 1.000,0.000 Z`.
    pub fn path_data(&self) -> String {
        svg::path_data(self.segments())
    }

    /// A `<path>` element with the given attributes. `Empty` renders as an
    /// empty string.
    pub fn svg(&self, attributes: &SvgAttributes) -> String {
        match self {
            VectorPath::Empty => String::new(),
            VectorPath::Populated(data) => svg::path_element(attributes, &svg::path_data(&data.segments)),
        }
    }

    /// [`VectorPath::svg`] with a thin red stroke and no fill.
    pub fn svg_default(&self) -> String {
        self.svg(&SvgAttributes::default())
    }

    /// Offsets the path by `params.distance` through `engine`.
    ///
    /// The result keeps this path's parity. Its rings are re-oriented so that
    /// classification under that parity matches the engine's outer/hole
    /// split whatever orientation the engine returned.
    pub fn buffer<E>(&self, engine: &E, params: &BufferParams) -> Result<VectorPath>
    where
        E: GeometryEngine + ?Sized,
    {
        let data = match self {
            VectorPath::Empty => return Ok(VectorPath::Empty),
            VectorPath::Populated(data) => data,
        };
        params.validate()?;

        let geometry = extract::extract(&data.segments, data.inverted, params.tolerance);
        if geometry.is_empty() {
            debug!("Nothing to buffer, path has no fillable rings");
            return Ok(VectorPath::Empty);
        }

        debug!(
            distance = params.distance,
            join = %params.join,
            polygons = geometry.len(),
            "Buffering path"
        );
        let buffered = engine.buffer(&geometry, params)?;
        let oriented = buffered.oriented(data.inverted);
        Ok(Self::from_geometry_with_parity(&oriented, data.inverted))
    }
}
