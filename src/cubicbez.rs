//! Cubic Bézier segments.

use crate::common::arange_inclusive;
use crate::{Point, QuadBez};

/// A single cubic Bézier segment.
///
/// Provided as a general-purpose primitive; the circle samplers only need
/// quadratic arcs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<V: Into<Point>>(p0: V, p1: V, p2: V, p3: V) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Computed by de Casteljau blending of the two overlapping quadratics,
    /// `(1-t)·Q1(t) + t·Q2(t)` with `Q1 = (p0, p1, p2)` and
    /// `Q2 = (p1, p2, p3)`, which is exactly the cubic Bernstein form.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let q1 = QuadBez::new(self.p0, self.p1, self.p2).eval(t);
        let q2 = QuadBez::new(self.p1, self.p2, self.p3).eval(t);
        q1.lerp(q2, t)
    }

    /// Sample the curve as an ordered point sequence, with the same `1/n`
    /// inclusive stepping as [`QuadBez::sample`].
    pub fn sample(&self, n: f64) -> Vec<Point> {
        arange_inclusive(1.0, n.recip())
            .map(|t| self.eval(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Direct Bernstein-basis evaluation, for cross-checking the blended form.
    fn eval_bernstein(c: &CubicBez, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = c.p0.to_vec2() * (mt * mt * mt)
            + c.p1.to_vec2() * (3.0 * mt * mt * t)
            + c.p2.to_vec2() * (3.0 * mt * t * t)
            + c.p3.to_vec2() * (t * t * t);
        v.to_point()
    }

    #[test]
    fn cubicbez_eval() {
        let c = CubicBez::new((0.0, 0.0), (0.5, 1.5), (1.5, -0.5), (2.0, 1.0));
        assert_eq!(c.eval(0.0), c.p0);
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!(c.eval(t).distance(eval_bernstein(&c, t)) < 1e-12);
        }
        assert!(c.eval(1.0).distance(c.p3) < 1e-12);
    }

    #[test]
    fn cubicbez_sample() {
        let c = CubicBez::new((0.0, 0.0), (0.5, 1.5), (1.5, -0.5), (2.0, 1.0));
        let pts = c.sample(10.0);
        assert_eq!(pts.len(), 12);
        assert_eq!(pts[0], c.p0);
        assert!(pts[10].distance(c.p3) < 1e-12);
    }
}
