//! Polygon extraction: closed sub-contours to polygons-with-holes.
//!
//! Curves are flattened with lyon, then each ring is classified by the sign
//! of its shoelace area against the path's parity flag. A ring is an outer
//! boundary when `is_ccw == inverted`; any other ring is a hole of the most
//! recently opened outer boundary.
//!
//! For a glyph in font space (y-up, not reflected) that gives the TrueType
//! convention: clockwise contours are solid, counter-clockwise ones are holes.

use lyon::geom::{CubicBezierSegment, QuadraticBezierSegment};
use tracing::{debug, warn};

use crate::geometry::{Geometry, Polygon, Ring};
use crate::segment::{Point, Segment};

/// Flattening tolerance used by [`crate::VectorPath::shapely_polygon`], in
/// path units.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Smallest tolerance lyon can flatten with.
pub const MIN_TOLERANCE: f64 = f64::EPSILON * f64::EPSILON;

/// Returns `tolerance` when lyon can flatten with it, otherwise
/// [`DEFAULT_TOLERANCE`].
pub fn usable_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_finite() && tolerance >= MIN_TOLERANCE {
        tolerance
    } else {
        debug!(tolerance, "Unusable flattening tolerance, using default");
        DEFAULT_TOLERANCE
    }
}

/// How a ring takes part in the polygon it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRole {
    Outer,
    Hole,
}

/// Classifies one ring under the given parity.
pub fn classify(ring: &Ring, inverted: bool) -> RingRole {
    if ring.is_ccw() == inverted {
        RingRole::Outer
    } else {
        RingRole::Hole
    }
}

/// Splits a segment stream into flattened rings, one per sub-contour.
///
/// A trailing contour without `ClosePoly` is closed implicitly. Rings keep
/// the point order of the segments and are never deduplicated here. An
/// unusable tolerance falls back to [`DEFAULT_TOLERANCE`].
pub fn flatten_contours(segments: &[Segment], tolerance: f64) -> Vec<Ring> {
    let tolerance = usable_tolerance(tolerance);
    let mut rings = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut cursor = Point::default();

    for segment in segments {
        match *segment {
            Segment::MoveTo(p) => {
                if !current.is_empty() {
                    rings.push(Ring::new(std::mem::take(&mut current)));
                }
                current.push(p);
                cursor = p;
            }
            Segment::LineTo(p) => {
                current.push(p);
                cursor = p;
            }
            Segment::QuadTo { ctrl, to } => {
                let curve: QuadraticBezierSegment<f64> = QuadraticBezierSegment {
                    from: cursor.into(),
                    ctrl: ctrl.into(),
                    to: to.into(),
                };
                current.extend(curve.flattened(tolerance).map(Point::from));
                cursor = to;
            }
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                let curve: CubicBezierSegment<f64> = CubicBezierSegment {
                    from: cursor.into(),
                    ctrl1: ctrl1.into(),
                    ctrl2: ctrl2.into(),
                    to: to.into(),
                };
                current.extend(curve.flattened(tolerance).map(Point::from));
                cursor = to;
            }
            Segment::ClosePoly => {
                if !current.is_empty() {
                    rings.push(Ring::new(std::mem::take(&mut current)));
                }
            }
        }
    }

    if !current.is_empty() {
        rings.push(Ring::new(current));
    }
    rings
}

/// Assembles classified rings into a geometry value.
///
/// Degenerate rings (fewer than 3 distinct points, or no area) and holes
/// that appear before any outer boundary are dropped.
pub fn assemble(rings: Vec<Ring>, inverted: bool) -> Geometry {
    let mut polygons: Vec<Polygon> = Vec::new();

    for (index, ring) in rings.into_iter().enumerate() {
        if ring.is_degenerate() {
            debug!(
                ring = index,
                points = ring.len(),
                "Dropping degenerate ring"
            );
            continue;
        }

        match classify(&ring, inverted) {
            RingRole::Outer => polygons.push(Polygon::new(ring)),
            RingRole::Hole => match polygons.last_mut() {
                Some(outer) => outer.interiors.push(ring),
                None => {
                    warn!(
                        ring = index,
                        area = ring.area(),
                        "Dropping hole ring with no enclosing outer boundary"
                    );
                }
            },
        }
    }

    Geometry::from_polygons(polygons)
}

/// Full extraction: flatten then assemble.
pub fn extract(segments: &[Segment], inverted: bool, tolerance: f64) -> Geometry {
    assemble(flatten_contours(segments, tolerance), inverted)
}
