//! [`GeometryEngine`] backed by cavalier_contours.
//!
//! cavalier offsets closed polylines with arc-joined corners. Each output
//! arc (a vertex with a non-zero bulge) is turned back into straight edges
//! according to the requested join style.

use std::f64::consts::PI;
use std::panic;

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use cavalier_contours::shape_algorithms::{Shape, ShapeOffsetOptions};
use glyphkit_core::{GeometryError, Result};
use tracing::{debug, warn};

use crate::engine::{BufferParams, GeometryEngine, JoinStyle};
use crate::geometry::{Geometry, Polygon, Ring};
use crate::segment::Point;

/// Points closer than this are merged before offsetting.
const REPEAT_POS_EPS: f64 = 1e-6;
/// Bulges below this are treated as straight edges.
const BULGE_EPS: f64 = 1e-9;
const MAX_ARC_SEGMENTS: usize = 256;

/// Offsets polygons with cavalier_contours' shape offset.
///
/// Caps only apply to open lines; every ring handed to this engine is
/// closed, so [`BufferParams::cap`] has no effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct CavalierEngine;

impl CavalierEngine {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryEngine for CavalierEngine {
    fn buffer(&self, geometry: &Geometry, params: &BufferParams) -> Result<Geometry> {
        params.validate()?;
        if geometry.is_empty() || params.distance == 0.0 {
            return Ok(geometry.clone());
        }

        let plines: Vec<Polyline<f64>> = geometry
            .polygons()
            .iter()
            .flat_map(|polygon| {
                let exterior = to_polyline(&polygon.exterior, true);
                let holes = polygon.interiors.iter().map(|h| to_polyline(h, false));
                std::iter::once(exterior).chain(holes)
            })
            .flatten()
            .collect();
        if plines.is_empty() {
            debug!("No offsettable rings after clean-up");
            return Ok(Geometry::Empty);
        }

        let shape = Shape::from_plines(plines);
        // cavalier offsets to the left of each polyline, which is inward for
        // counter-clockwise outers, so dilation is a negative shape offset.
        let offset = -params.distance;
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            shape.parallel_offset(offset, ShapeOffsetOptions::default())
        }));
        let offset_shape = match result {
            Ok(shape) => shape,
            Err(_) => {
                warn!(distance = params.distance, "Panic during shape parallel offset");
                return Err(GeometryError::OffsetFailed {
                    reason: format!("offset engine panicked at distance {}", params.distance),
                }
                .into());
            }
        };

        let exteriors: Vec<Ring> = offset_shape
            .ccw_plines
            .iter()
            .map(|ip| from_polyline(&ip.polyline, params))
            .filter(|ring| !ring.is_degenerate())
            .collect();
        let holes: Vec<Ring> = offset_shape
            .cw_plines
            .iter()
            .map(|ip| from_polyline(&ip.polyline, params))
            .filter(|ring| !ring.is_degenerate())
            .collect();

        debug!(
            exteriors = exteriors.len(),
            holes = holes.len(),
            "Shape offset complete"
        );
        Ok(assign_holes(exteriors, holes))
    }
}

/// Cleans a ring and converts it to a closed polyline with the given
/// orientation. Rings that collapse below three vertices are skipped.
fn to_polyline(ring: &Ring, ccw: bool) -> Option<Polyline<f64>> {
    let mut points: Vec<Point> = Vec::with_capacity(ring.len());
    for p in ring.points() {
        if points
            .last()
            .is_none_or(|last| last.distance_to(p) > REPEAT_POS_EPS)
        {
            points.push(*p);
        }
    }
    while points.len() > 1
        && points[0].distance_to(&points[points.len() - 1]) <= REPEAT_POS_EPS
    {
        points.pop();
    }
    if points.len() < 3 {
        return None;
    }

    let oriented = Ring::new(points).oriented(ccw);
    if oriented.is_degenerate() {
        return None;
    }

    let mut pline = Polyline::new();
    for p in oriented.points() {
        pline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    pline.set_is_closed(true);
    Some(pline)
}

/// Converts a closed polyline back into a ring, replacing arcs per the join
/// style.
fn from_polyline(pline: &Polyline<f64>, params: &BufferParams) -> Ring {
    let count = pline.vertex_count();
    let mut points = Vec::with_capacity(count);

    for i in 0..count {
        let v1 = pline.at(i);
        let v2 = pline.at((i + 1) % count);
        let p1 = Point::new(v1.x, v1.y);
        let p2 = Point::new(v2.x, v2.y);
        points.push(p1);

        if v1.bulge.abs() > BULGE_EPS {
            append_join(&mut points, p1, p2, v1.bulge, params);
        }
    }

    Ring::new(points)
}

/// Appends the interior points of the join replacing the arc `p1 -> p2`.
/// Neither endpoint is pushed.
fn append_join(points: &mut Vec<Point>, p1: Point, p2: Point, bulge: f64, params: &BufferParams) {
    let chord = p1.distance_to(&p2);
    if chord <= REPEAT_POS_EPS {
        return;
    }
    // signed sweep, positive counter-clockwise
    let sweep = 4.0 * bulge.atan();

    match params.join {
        JoinStyle::Bevel => {}
        JoinStyle::Mitre => {
            let half = sweep.abs() / 2.0;
            if half >= PI / 2.0 - 1e-9 || 1.0 / half.cos() > params.mitre_limit {
                return;
            }
            // Tangent at p1 is the chord direction turned back by half the sweep.
            let dir = ((p2.x - p1.x) / chord, (p2.y - p1.y) / chord);
            let (sin, cos) = (-sweep / 2.0).sin_cos();
            let tangent = (dir.0 * cos - dir.1 * sin, dir.0 * sin + dir.1 * cos);
            let reach = (chord / 2.0) / half.cos();
            points.push(Point::new(p1.x + tangent.0 * reach, p1.y + tangent.1 * reach));
        }
        JoinStyle::Round => {
            let radius = (chord / 2.0) / (sweep / 2.0).sin().abs();
            let mid = Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
            let normal = (-(p2.y - p1.y) / chord, (p2.x - p1.x) / chord);
            let to_center = (chord / 2.0) / (sweep / 2.0).tan();
            let center = Point::new(mid.x + normal.0 * to_center, mid.y + normal.1 * to_center);

            let segments = arc_segment_count(radius, sweep.abs(), params.tolerance);
            let start = (p1.y - center.y).atan2(p1.x - center.x);
            for j in 1..segments {
                let angle = start + sweep * (j as f64 / segments as f64);
                points.push(Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ));
            }
        }
    }
}

/// Segments needed so that no chord strays more than `tolerance` from the
/// arc.
fn arc_segment_count(radius: f64, sweep: f64, tolerance: f64) -> usize {
    if radius <= tolerance {
        return 1;
    }
    let step = 2.0 * (1.0 - tolerance / radius).acos();
    if step.is_nan() || step <= 0.0 {
        return MAX_ARC_SEGMENTS;
    }
    ((sweep / step).ceil() as usize).clamp(1, MAX_ARC_SEGMENTS)
}

/// Gives each hole to the smallest exterior containing it.
fn assign_holes(exteriors: Vec<Ring>, holes: Vec<Ring>) -> Geometry {
    let mut polygons: Vec<Polygon> = exteriors.into_iter().map(Polygon::new).collect();

    for hole in holes {
        let Some(probe) = hole.points().first().copied() else {
            continue;
        };
        let owner = polygons
            .iter_mut()
            .filter(|p| p.exterior.contains_point(&probe))
            .min_by(|a, b| a.exterior.area().total_cmp(&b.exterior.area()));
        match owner {
            Some(polygon) => polygon.interiors.push(hole),
            None => debug!(area = hole.area(), "Dropping offset hole outside every exterior"),
        }
    }

    Geometry::from_polygons(polygons)
}
