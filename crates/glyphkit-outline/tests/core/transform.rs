use glyphkit_outline::{AffineTransform, Point};

fn assert_close(actual: Point, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < 1e-9 && (actual.y - y).abs() < 1e-9,
        "expected ({}, {}), got ({}, {})",
        x,
        y,
        actual.x,
        actual.y
    );
}

#[test]
fn test_font_to_svg_pipeline() {
    // shift the baseline down by the ascender, then flip y
    let ascender = 800.0;
    let t = AffineTransform::translation(0.0, -ascender).then(&AffineTransform::scale(1.0, -1.0));

    assert_close(t.apply(Point::new(100.0, 800.0)), 100.0, 0.0);
    assert_close(t.apply(Point::new(100.0, 0.0)), 100.0, 800.0);
    assert!(t.flips_parity());
}

#[test]
fn test_then_is_not_commutative() {
    let s = AffineTransform::scale(2.0, 2.0);
    let m = AffineTransform::translation(1.0, 0.0);
    let p = Point::new(1.0, 1.0);

    assert_close(s.then(&m).apply(p), 3.0, 2.0);
    assert_close(m.then(&s).apply(p), 4.0, 2.0);
}

#[test]
fn test_coefficient_round_trip() {
    let t = AffineTransform::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(t.coefficients(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(t.determinant(), -3.0);
}

#[test]
fn test_parity_counts_negative_linear_coefficients() {
    assert!(!AffineTransform::IDENTITY.flips_parity());
    assert!(AffineTransform::scale(-1.0, 1.0).flips_parity());
    assert!(!AffineTransform::scale(-1.0, -1.0).flips_parity());
    assert!(AffineTransform::new(-1.0, -1.0, 0.0, -1.0, 1.0, 0.0).flips_parity());
    assert!(!AffineTransform::new(-1.0, -1.0, 0.0, -1.0, -1.0, 0.0).flips_parity());
    // offsets never count
    assert!(!AffineTransform::translation(-5.0, -5.0).flips_parity());
}
