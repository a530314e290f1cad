//! Polygon-with-holes geometry, the representation exchanged with the
//! geometry engine.
//!
//! Orientation is measured in the mathematical y-up sense: a positive
//! shoelace area means counter-clockwise.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::segment::Point;

/// A closed ring of points. The closing edge from the last point back to the
/// first is implicit; a repeated closing point is kept as given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&c| Point::from(c)).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let p1 = self.points[i];
            let p2 = self.points[(i + 1) % n];
            sum += p1.x * p2.y - p2.x * p1.y;
        }
        sum / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Number of points after dropping consecutive repeats (including the
    /// wrap-around from last to first).
    pub fn distinct_point_count(&self) -> usize {
        let n = self.points.len();
        (0..n)
            .filter(|&i| self.points[i] != self.points[(i + 1) % n])
            .count()
            .max(usize::from(n > 0))
    }

    /// A ring that cannot bound any area: fewer than three distinct points or
    /// all points collinear.
    pub fn is_degenerate(&self) -> bool {
        self.distinct_point_count() < 3 || self.signed_area() == 0.0
    }

    pub fn reversed(&self) -> Ring {
        let mut points = self.points.clone();
        points.reverse();
        Ring { points }
    }

    /// Returns the ring traversed counter-clockwise when `ccw` is true,
    /// clockwise otherwise. Degenerate rings are returned unchanged.
    pub fn oriented(&self, ccw: bool) -> Ring {
        let area = self.signed_area();
        if area == 0.0 || (area > 0.0) == ccw {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Even-odd point-in-ring test.
    pub fn contains_point(&self, p: &Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > p.y) != (pj.y > p.y)
                && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::from_points(self.points.iter().copied())
    }
}

/// One outer boundary plus zero or more holes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub exterior: Ring,
    pub interiors: Vec<Ring>,
}

impl Polygon {
    pub fn new(exterior: Ring) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }

    pub fn with_holes(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Exterior first, then each hole.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Filled area: exterior minus holes.
    pub fn area(&self) -> f64 {
        self.exterior.area() - self.interiors.iter().map(Ring::area).sum::<f64>()
    }

    /// Re-orients the rings: the exterior counter-clockwise when `outer_ccw`,
    /// holes always the opposite way.
    pub fn oriented(&self, outer_ccw: bool) -> Polygon {
        Polygon {
            exterior: self.exterior.oriented(outer_ccw),
            interiors: self
                .interiors
                .iter()
                .map(|r| r.oriented(!outer_ccw))
                .collect(),
        }
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        self.exterior.contains_point(p) && !self.interiors.iter().any(|h| h.contains_point(p))
    }
}

/// A polygon-with-holes, a multi-polygon, or nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Geometry {
    #[default]
    Empty,
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// Zero polygons give `Empty`, one gives `Polygon`, more give
    /// `MultiPolygon` in the given order.
    pub fn from_polygons(mut polygons: Vec<Polygon>) -> Self {
        match polygons.len() {
            0 => Geometry::Empty,
            1 => Geometry::Polygon(polygons.remove(0)),
            _ => Geometry::MultiPolygon(polygons),
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Geometry::Empty => &[],
            Geometry::Polygon(p) => std::slice::from_ref(p),
            Geometry::MultiPolygon(ps) => ps,
        }
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        match self {
            Geometry::Empty => Vec::new(),
            Geometry::Polygon(p) => vec![p],
            Geometry::MultiPolygon(ps) => ps,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons().is_empty()
    }

    pub fn len(&self) -> usize {
        self.polygons().len()
    }

    pub fn area(&self) -> f64 {
        self.polygons().iter().map(Polygon::area).sum()
    }

    pub fn ring_count(&self) -> usize {
        self.polygons().iter().map(|p| 1 + p.interiors.len()).sum()
    }

    pub fn oriented(&self, outer_ccw: bool) -> Geometry {
        Geometry::from_polygons(
            self.polygons()
                .iter()
                .map(|p| p.oriented(outer_ccw))
                .collect(),
        )
    }

    pub fn bbox(&self) -> BoundingBox {
        self.polygons()
            .iter()
            .fold(BoundingBox::Empty, |bb, p| bb.union(p.exterior.bbox()))
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}
