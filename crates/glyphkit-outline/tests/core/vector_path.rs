use glyphkit_outline::{
    AffineTransform, BoundingBox, CurveEvent, PathBuilder, Point, Segment, SvgAttributes, VectorPath,
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn curved() -> VectorPath {
    let mut b = PathBuilder::new();
    b.move_to(p(0.0, 0.0));
    b.quad_to(p(5.0, 5.0), p(10.0, 0.0));
    b.cubic_to(p(12.0, -3.0), p(8.0, -6.0), p(5.0, -5.0));
    b.build()
}

#[test]
fn test_to_geometry_with_unusable_tolerance() {
    let mut b = PathBuilder::new();
    b.move_to(p(0.0, 0.0));
    b.quad_to(p(5.0, 10.0), p(10.0, 0.0));
    let path = b.build();

    let expected = path.shapely_polygon();
    assert_eq!(expected.len(), 1);
    assert_eq!(path.to_geometry(0.0), expected);
    assert_eq!(path.to_geometry(-1.0), expected);
    assert_eq!(path.to_geometry(f64::NAN), expected);
}

#[test]
fn test_transform_keeps_curve_arity() {
    let t = AffineTransform::new(2.0, 1.0, 3.0, 0.5, 1.0, -1.0);
    let out = curved().transform(&t);

    assert_eq!(out.segments().len(), curved().segments().len());
    match out.segments()[1] {
        Segment::QuadTo { ctrl, to } => {
            assert_eq!(ctrl, t.apply(p(5.0, 5.0)));
            assert_eq!(to, t.apply(p(10.0, 0.0)));
        }
        other => panic!("expected quad, got {:?}", other),
    }
    match out.segments()[2] {
        Segment::CubicTo { ctrl1, ctrl2, to } => {
            assert_eq!(ctrl1, t.apply(p(12.0, -3.0)));
            assert_eq!(ctrl2, t.apply(p(8.0, -6.0)));
            assert_eq!(to, t.apply(p(5.0, -5.0)));
        }
        other => panic!("expected cubic, got {:?}", other),
    }
}

#[test]
fn test_sugar_matches_coefficients() {
    let path = curved();
    assert_eq!(path.scale(2.0, -3.0), path.transform_coeffs(2.0, 0.0, 0.0, 0.0, -3.0, 0.0));
    assert_eq!(path.translate(4.0, 5.0), path.transform_coeffs(1.0, 0.0, 4.0, 0.0, 1.0, 5.0));
}

#[test]
fn test_bbox_over_all_points() {
    let extent = curved().bbox().extent().unwrap();
    assert_eq!(extent.as_tuple(), (0.0, 12.0, -6.0, 5.0));
    assert_eq!(VectorPath::Empty.bbox(), BoundingBox::Empty);
}

#[test]
fn test_svg_with_custom_attributes() {
    let path: VectorPath = vec![
        CurveEvent::Move(p(1.0, 2.0)),
        CurveEvent::Cubic(p(3.0, 4.0), p(5.0, 6.0), p(7.0, 8.0)),
    ]
    .into_iter()
    .collect();
    let attrs = SvgAttributes::empty().with("fill", "rgb(52, 92, 161)");

    assert_eq!(
        path.svg(&attrs),
        r#"<path fill="rgb(52, 92, 161)" d="M 1.000,2.000 Q 3.000,4.000, 5.000,6.000, 7.000,8.000 Z" />"#
    );
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VectorPath>();
    assert_send_sync::<AffineTransform>();
    assert_send_sync::<glyphkit_outline::Geometry>();
    assert_send_sync::<glyphkit_outline::CavalierEngine>();
}
