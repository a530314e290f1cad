//! Path construction from curve-decomposition events or polygon rings.
//!
//! The builder is the only mutable stage of a path's life: it accumulates
//! segments and is consumed by [`PathBuilder::build`], which freezes the
//! result into an immutable [`VectorPath`]. Partially built paths are never
//! observable.

use tracing::trace;

use crate::geometry::{Geometry, Polygon, Ring};
use crate::segment::{Point, Segment};
use crate::vector_path::VectorPath;

/// One drawing instruction emitted by a glyph outline source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveEvent {
    Move(Point),
    Line(Point),
    Quad(Point, Point),
    Cubic(Point, Point, Point),
    Close,
}

/// Accumulates segments in event order.
///
/// Every new sub-contour closes the previous one first, and `build` closes
/// the last one, so each sub-contour ends in exactly one
/// [`Segment::ClosePoly`].
#[derive(Debug, Default)]
pub struct PathBuilder {
    segments: Vec<Segment>,
    contour_open: bool,
    contour_start: Point,
    inverted: bool,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder whose path starts with the given parity, for sources that
    /// emit already reflected coordinates.
    pub fn with_parity(inverted: bool) -> Self {
        Self {
            inverted,
            ..Self::default()
        }
    }

    pub fn move_to(&mut self, p: Point) {
        self.close();
        self.segments.push(Segment::MoveTo(p));
        self.contour_open = true;
        self.contour_start = p;
    }

    pub fn line_to(&mut self, p: Point) {
        self.ensure_contour();
        self.segments.push(Segment::LineTo(p));
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.ensure_contour();
        self.segments.push(Segment::QuadTo { ctrl, to });
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.ensure_contour();
        self.segments.push(Segment::CubicTo { ctrl1, ctrl2, to });
    }

    /// Closes the current sub-contour. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.contour_open {
            self.segments.push(Segment::ClosePoly);
            self.contour_open = false;
        }
    }

    pub fn push_event(&mut self, event: CurveEvent) {
        match event {
            CurveEvent::Move(p) => self.move_to(p),
            CurveEvent::Line(p) => self.line_to(p),
            CurveEvent::Quad(ctrl, to) => self.quad_to(ctrl, to),
            CurveEvent::Cubic(ctrl1, ctrl2, to) => self.cubic_to(ctrl1, ctrl2, to),
            CurveEvent::Close => self.close(),
        }
    }

    /// `MoveTo` the first point, `LineTo` each following one. Points are
    /// taken exactly as given.
    pub fn add_ring(&mut self, ring: &Ring) {
        let mut points = ring.points().iter();
        if let Some(first) = points.next() {
            self.move_to(*first);
            for p in points {
                self.line_to(*p);
            }
        }
    }

    /// Exterior first, then each interior.
    pub fn add_polygon(&mut self, polygon: &Polygon) {
        for ring in polygon.rings() {
            self.add_ring(ring);
        }
    }

    pub fn add_geometry(&mut self, geometry: &Geometry) {
        for polygon in geometry.polygons() {
            self.add_polygon(polygon);
        }
    }

    /// Freezes the accumulated segments. No segments at all gives
    /// [`VectorPath::Empty`].
    pub fn build(mut self) -> VectorPath {
        self.close();
        if self.segments.is_empty() {
            return VectorPath::Empty;
        }
        trace!(segments = self.segments.len(), "path built");
        VectorPath::from_segments(self.segments, self.inverted)
    }

    // Drawing without a current contour reopens one where the last contour
    // started (the origin if there was none), as SVG does.
    fn ensure_contour(&mut self) {
        if !self.contour_open {
            let start = self.contour_start;
            self.move_to(start);
        }
    }
}

impl Extend<CurveEvent> for PathBuilder {
    fn extend<I: IntoIterator<Item = CurveEvent>>(&mut self, iter: I) {
        for event in iter {
            self.push_event(event);
        }
    }
}

impl FromIterator<CurveEvent> for VectorPath {
    fn from_iter<I: IntoIterator<Item = CurveEvent>>(iter: I) -> Self {
        let mut builder = PathBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}

/// Glyph outlines from rusttype arrive through its `OutlineBuilder`
/// callbacks in `f32`.
impl rusttype::OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        PathBuilder::move_to(self, Point::new(x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        PathBuilder::line_to(self, Point::new(x as f64, y as f64));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        PathBuilder::quad_to(
            self,
            Point::new(x1 as f64, y1 as f64),
            Point::new(x as f64, y as f64),
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        PathBuilder::cubic_to(
            self,
            Point::new(x1 as f64, y1 as f64),
            Point::new(x2 as f64, y2 as f64),
            Point::new(x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        PathBuilder::close(self);
    }
}
