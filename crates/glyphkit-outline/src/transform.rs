//! 2D affine transforms.
//!
//! Coefficients follow the row layout
//!
//! ```text
//! | a  b  c |
//! | d  e  f |
//! | 0  0  1 |
//! ```
//!
//! so that `x' = a*x + b*y + c` and `y' = d*x + e*y + f`.

use serde::{Deserialize, Serialize};

use crate::segment::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 1.0,
        f: 0.0,
    };

    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Axis scaling about the origin.
    pub fn scale(xfact: f64, yfact: f64) -> Self {
        Self::new(xfact, 0.0, 0.0, 0.0, yfact, 0.0)
    }

    pub fn translation(xoff: f64, yoff: f64) -> Self {
        Self::new(1.0, 0.0, xoff, 0.0, 1.0, yoff)
    }

    /// Counter-clockwise rotation about the origin (y-up).
    pub fn rotation(angle_deg: f64) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0)
    }

    pub fn coefficients(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.b * p.y + self.c,
            self.d * p.x + self.e * p.y + self.f,
        )
    }

    /// Composition: the returned transform applies `self` first, then `next`.
    pub fn then(&self, next: &AffineTransform) -> AffineTransform {
        AffineTransform {
            a: next.a * self.a + next.b * self.d,
            b: next.a * self.b + next.b * self.e,
            c: next.a * self.c + next.b * self.f + next.c,
            d: next.d * self.a + next.e * self.d,
            e: next.d * self.b + next.e * self.e,
            f: next.d * self.c + next.e * self.f + next.f,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.e - self.b * self.d
    }

    /// Number of negative coefficients among the linear part `{a, b, d, e}`.
    pub fn negative_linear_count(&self) -> usize {
        [self.a, self.b, self.d, self.e]
            .iter()
            .filter(|v| **v < 0.0)
            .count()
    }

    /// Whether applying this transform toggles a path's winding parity.
    ///
    /// Parity flips once per negative linear coefficient, so only an odd
    /// count changes it. For axis-aligned scales this is exactly "an odd
    /// number of mirrored axes".
    pub fn flips_parity(&self) -> bool {
        self.negative_linear_count() % 2 == 1
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 6]> for AffineTransform {
    fn from([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self::new(a, b, c, d, e, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: Point, x: f64, y: f64) -> bool {
        (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
    }

    #[test]
    fn test_apply_row_layout() {
        let t = AffineTransform::new(2.0, 1.0, 3.0, 0.5, -1.0, 4.0);
        let p = t.apply(Point::new(1.0, 2.0));
        assert!(close(p, 2.0 + 2.0 + 3.0, 0.5 - 2.0 + 4.0));
    }

    #[test]
    fn test_then_matches_sequential_application() {
        let t1 = AffineTransform::new(1.0, 0.0, -5.0, 0.0, 1.0, 2.0);
        let t2 = AffineTransform::new(0.1, 0.3, 0.0, -0.2, -0.1, 7.5);
        let p = Point::new(13.0, -4.0);
        let seq = t2.apply(t1.apply(p));
        let composed = t1.then(&t2).apply(p);
        assert!(close(composed, seq.x, seq.y));
    }

    #[test]
    fn test_identity_is_neutral() {
        let t = AffineTransform::new(1.5, 0.2, 3.0, -0.7, 2.0, 1.0);
        assert_eq!(t.then(&AffineTransform::IDENTITY), t);
        assert_eq!(AffineTransform::IDENTITY.then(&t), t);
    }

    #[test]
    fn test_parity_counts() {
        assert!(!AffineTransform::IDENTITY.flips_parity());
        assert!(AffineTransform::scale(-1.0, 1.0).flips_parity());
        assert!(AffineTransform::scale(1.0, -1.0).flips_parity());
        assert!(!AffineTransform::scale(-1.0, -1.0).flips_parity());
        assert_eq!(
            AffineTransform::new(-1.0, -1.0, 0.0, -1.0, 1.0, 0.0).negative_linear_count(),
            3
        );
        assert!(AffineTransform::new(-1.0, -1.0, 0.0, -1.0, 1.0, 0.0).flips_parity());
        // Translation offsets never count.
        assert!(!AffineTransform::translation(-10.0, -10.0).flips_parity());
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let p = AffineTransform::rotation(90.0).apply(Point::new(1.0, 0.0));
        assert!(close(p, 0.0, 1.0));
    }
}
