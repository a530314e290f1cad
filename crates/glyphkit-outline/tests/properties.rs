use glyphkit_outline::{AffineTransform, CurveEvent, Point, VectorPath};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn coefficient() -> impl Strategy<Value = f64> {
    prop_oneof![-10.0..10.0f64, Just(0.0), Just(1.0), Just(-1.0)]
}

fn transform() -> impl Strategy<Value = AffineTransform> {
    prop::array::uniform6(coefficient()).prop_map(AffineTransform::from)
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn event() -> impl Strategy<Value = CurveEvent> {
    prop_oneof![
        point().prop_map(CurveEvent::Move),
        point().prop_map(CurveEvent::Line),
        (point(), point()).prop_map(|(c, p)| CurveEvent::Quad(c, p)),
        (point(), point(), point()).prop_map(|(c1, c2, p)| CurveEvent::Cubic(c1, c2, p)),
        Just(CurveEvent::Close),
    ]
}

fn path() -> impl Strategy<Value = VectorPath> {
    (point(), prop::collection::vec(event(), 0..24)).prop_map(|(start, events)| {
        std::iter::once(CurveEvent::Move(start))
            .chain(events)
            .collect()
    })
}

fn near(a: Point, b: Point) -> bool {
    let scale = 1.0 + a.x.abs().max(a.y.abs()).max(b.x.abs()).max(b.y.abs());
    (a.x - b.x).abs() <= 1e-9 * scale && (a.y - b.y).abs() <= 1e-9 * scale
}

proptest! {
    #[test]
    fn composed_transform_matches_sequential(path in path(), t1 in transform(), t2 in transform()) {
        let stepwise = path.transform(&t1).transform(&t2);
        let once = path.transform(&t1.then(&t2));

        prop_assert_eq!(stepwise.segments().len(), once.segments().len());
        for (a, b) in stepwise.segments().iter().zip(once.segments()) {
            for (pa, pb) in a.points().into_iter().zip(b.points()) {
                prop_assert!(near(pa, pb), "{:?} vs {:?}", pa, pb);
            }
        }
    }

    #[test]
    fn parity_follows_negative_coefficient_count(path in path(), ts in prop::collection::vec(transform(), 0..6)) {
        let mut expected = path.inverted();
        let mut current = path;
        for t in &ts {
            let negatives = [t.a, t.b, t.d, t.e].iter().filter(|v| **v < 0.0).count();
            if negatives % 2 == 1 {
                expected = !expected;
            }
            current = current.transform(t);
        }
        prop_assert_eq!(current.inverted(), expected);
    }

    #[test]
    fn transform_preserves_segment_kinds(path in path(), t in transform()) {
        let out = path.transform(&t);
        for (a, b) in path.segments().iter().zip(out.segments()) {
            prop_assert_eq!(std::mem::discriminant(a), std::mem::discriminant(b));
        }
    }

    #[test]
    fn bbox_contains_every_point(path in path()) {
        let extent = path.bbox().extent();
        prop_assert!(extent.is_some());
        let extent = extent.unwrap();
        for seg in path.segments() {
            for p in seg.points() {
                prop_assert!(extent.contains(&p));
            }
        }
    }

    #[test]
    fn extraction_never_panics(path in path(), inverted in any::<bool>()) {
        let path = if inverted { path.scale(-1.0, 1.0) } else { path };
        let geometry = path.shapely_polygon();
        for polygon in geometry.polygons() {
            prop_assert!(polygon.exterior.distinct_point_count() >= 3);
        }
    }
}
