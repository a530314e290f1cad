use glyphkit_outline::{CurveEvent, Geometry, PathBuilder, Point, Polygon, Ring, Segment, VectorPath};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_glyph_events_close_every_contour() {
    // outline of an "o": outer contour then counter
    let events = vec![
        CurveEvent::Move(p(0.0, 0.0)),
        CurveEvent::Quad(p(0.0, 10.0), p(10.0, 10.0)),
        CurveEvent::Quad(p(20.0, 10.0), p(20.0, 0.0)),
        CurveEvent::Quad(p(20.0, -10.0), p(10.0, -10.0)),
        CurveEvent::Quad(p(0.0, -10.0), p(0.0, 0.0)),
        CurveEvent::Move(p(5.0, 0.0)),
        CurveEvent::Cubic(p(5.0, -5.0), p(15.0, -5.0), p(15.0, 0.0)),
        CurveEvent::Cubic(p(15.0, 5.0), p(5.0, 5.0), p(5.0, 0.0)),
    ];
    let path: VectorPath = events.into_iter().collect();

    let segments = path.segments();
    assert_eq!(segments.len(), 10);
    assert!(segments[0].is_move());
    assert_eq!(segments[5], Segment::ClosePoly);
    assert!(segments[6].is_move());
    assert_eq!(segments[9], Segment::ClosePoly);
    assert_eq!(path.contour_count(), 2);
}

#[test]
fn test_every_move_after_first_preceded_by_close() {
    let mut builder = PathBuilder::new();
    for i in 0..5 {
        let x = i as f64 * 10.0;
        builder.move_to(p(x, 0.0));
        builder.line_to(p(x + 1.0, 0.0));
        builder.line_to(p(x + 1.0, 1.0));
        if i % 2 == 0 {
            builder.close();
        }
    }
    let path = builder.build();
    let segments = path.segments();

    assert!(segments[0].is_move());
    for (i, seg) in segments.iter().enumerate().skip(1) {
        if seg.is_move() {
            assert_eq!(segments[i - 1], Segment::ClosePoly, "move at {} not closed before", i);
        }
    }
}

#[test]
fn test_multipolygon_rings_in_source_order() {
    let a = Polygon::with_holes(
        Ring::from_coords(&[(0.0, 0.0), (0.0, 9.0), (9.0, 9.0), (9.0, 0.0), (0.0, 0.0)]),
        vec![Ring::from_coords(&[(3.0, 3.0), (6.0, 3.0), (6.0, 6.0), (3.0, 6.0), (3.0, 3.0)])],
    );
    let b = Polygon::new(Ring::from_coords(&[(20.0, 0.0), (20.0, 2.0), (22.0, 2.0)]));
    let path = VectorPath::from_geometry(&Geometry::MultiPolygon(vec![a, b]));

    let moves: Vec<Point> = path
        .segments()
        .iter()
        .filter_map(|s| match s {
            Segment::MoveTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(moves, vec![p(0.0, 0.0), p(3.0, 3.0), p(20.0, 0.0)]);
    // 5 + 5 + 3 coordinate segments, 3 closes
    assert_eq!(path.segments().len(), 16);
    assert!(!path.inverted());
}

#[test]
fn test_empty_geometry_is_empty_path() {
    assert_eq!(VectorPath::from_geometry(&Geometry::Empty), VectorPath::Empty);
}
