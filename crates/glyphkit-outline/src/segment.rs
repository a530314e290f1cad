//! Points and typed path segments.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// A point in path coordinate space (font units, pixels, mm - whatever the
/// outline source emits).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for lyon::geom::Point<f64> {
    fn from(p: Point) -> Self {
        lyon::geom::point(p.x, p.y)
    }
}

impl From<lyon::geom::Point<f64>> for Point {
    fn from(p: lyon::geom::Point<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// One drawing instruction of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Starts a new sub-contour.
    MoveTo(Point),
    /// Straight edge to a point.
    LineTo(Point),
    /// Quadratic curve through one control point.
    QuadTo { ctrl: Point, to: Point },
    /// Cubic curve through two control points.
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// Closes the current sub-contour.
    ClosePoly,
}

impl Segment {
    /// All coordinate-bearing points of the segment, control points first.
    pub fn points(&self) -> SmallVec<[Point; 3]> {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => smallvec![p],
            Segment::QuadTo { ctrl, to } => smallvec![ctrl, to],
            Segment::CubicTo { ctrl1, ctrl2, to } => smallvec![ctrl1, ctrl2, to],
            Segment::ClosePoly => SmallVec::new(),
        }
    }

    /// The point the pen ends on, if the segment carries coordinates.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => Some(p),
            Segment::QuadTo { to, .. } | Segment::CubicTo { to, .. } => Some(to),
            Segment::ClosePoly => None,
        }
    }

    /// Returns a copy with every point passed through `f`. Curves keep their
    /// arity: each control point is mapped independently.
    pub fn map_points<F>(&self, f: F) -> Segment
    where
        F: Fn(Point) -> Point,
    {
        match *self {
            Segment::MoveTo(p) => Segment::MoveTo(f(p)),
            Segment::LineTo(p) => Segment::LineTo(f(p)),
            Segment::QuadTo { ctrl, to } => Segment::QuadTo {
                ctrl: f(ctrl),
                to: f(to),
            },
            Segment::CubicTo { ctrl1, ctrl2, to } => Segment::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            Segment::ClosePoly => Segment::ClosePoly,
        }
    }

    /// True for `MoveTo`.
    pub fn is_move(&self) -> bool {
        matches!(self, Segment::MoveTo(_))
    }

    /// True for `ClosePoly`.
    pub fn is_close(&self) -> bool {
        matches!(self, Segment::ClosePoly)
    }
}
