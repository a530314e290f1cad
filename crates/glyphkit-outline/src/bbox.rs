//! Axis-aligned bounding boxes over path points.

use serde::{Deserialize, Serialize};

use crate::segment::Point;

/// Extent of a non-empty point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// `(xmin, xmax, ymin, ymax)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.xmin, self.xmax, self.ymin, self.ymax)
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }
}

/// Bounding box of a path. A path without points has the distinguished
/// [`BoundingBox::Empty`] value rather than infinities or zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum BoundingBox {
    #[default]
    Empty,
    Extent(Extent),
}

impl BoundingBox {
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .fold(BoundingBox::Empty, |bb, p| bb.including(p))
    }

    /// Grows the box to include `p`.
    pub fn including(self, p: Point) -> Self {
        match self {
            BoundingBox::Empty => BoundingBox::Extent(Extent {
                xmin: p.x,
                xmax: p.x,
                ymin: p.y,
                ymax: p.y,
            }),
            BoundingBox::Extent(e) => BoundingBox::Extent(Extent {
                xmin: e.xmin.min(p.x),
                xmax: e.xmax.max(p.x),
                ymin: e.ymin.min(p.y),
                ymax: e.ymax.max(p.y),
            }),
        }
    }

    pub fn union(self, other: BoundingBox) -> Self {
        match (self, other) {
            (BoundingBox::Empty, bb) | (bb, BoundingBox::Empty) => bb,
            (BoundingBox::Extent(a), BoundingBox::Extent(b)) => BoundingBox::Extent(Extent {
                xmin: a.xmin.min(b.xmin),
                xmax: a.xmax.max(b.xmax),
                ymin: a.ymin.min(b.ymin),
                ymax: a.ymax.max(b.ymax),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BoundingBox::Empty)
    }

    pub fn extent(&self) -> Option<Extent> {
        match self {
            BoundingBox::Empty => None,
            BoundingBox::Extent(e) => Some(*e),
        }
    }
}
