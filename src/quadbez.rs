//! Quadratic Bézier segments.

use crate::common::arange_inclusive;
use crate::Point;

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<V: Into<Point>>(p0: V, p1: V, p2: V) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Evaluate the curve at parameter `t`,
    /// `(1-t)²·p0 + 2(1-t)t·p1 + t²·p2`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        (self.p0.to_vec2() * (mt * mt)
            + (self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t) * t)
            .to_point()
    }

    /// Sample the curve as an ordered point sequence.
    ///
    /// `t` walks from 0 in steps of `1/n` until one step past 1, so the end
    /// point is always reached and the final sample may sit slightly beyond
    /// it. `n` need not be an integer; it sets the step, not an exact sample
    /// count.
    pub fn sample(&self, n: f64) -> Vec<Point> {
        arange_inclusive(1.0, n.recip())
            .map(|t| self.eval(t))
            .collect()
    }
}
