//! Circle boundary sampling strategies.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::common::arange_inclusive;
use crate::{Circle, Point, QuadBez, Vec2};

/// A strategy producing an ordered, finite point sequence approximating a
/// circle boundary.
///
/// `n` controls sampling density. It is a `f64` so fractional densities
/// (for instance a quarter share of a total) need no rounding; the exact
/// number of points produced is strategy-dependent.
pub trait CircleSampler {
    /// Trace the boundary of `circle`.
    fn sample(&self, circle: Circle, n: f64) -> Vec<Point>;
}

/// Samples the parametric circle `center + r·(cos t, sin t)`.
///
/// The parameter steps by `1/n` radians from 0 until one step past `2π`, so
/// the trace closes: the count of points is about `2πn`, not `n`, and the
/// final point may nearly duplicate the first. Every point lies exactly on
/// the circle (up to floating point).
#[derive(Clone, Copy, Debug, Default)]
pub struct TrigSampler;

impl CircleSampler for TrigSampler {
    fn sample(&self, circle: Circle, n: f64) -> Vec<Point> {
        arange_inclusive(2.0 * PI, n.recip())
            .map(|t| circle.center + circle.radius * Vec2::new(t.cos(), t.sin()))
            .collect()
    }
}

/// Approximates the circle with four quadratic Bézier quarter arcs.
///
/// The control triple `(0, r), (r, r), (r, 0)` is rotated through the four
/// quadrants and each arc is sampled with `n/4` steps. A quadratic quarter
/// arc bulges about 6% past the true circle at its midpoint; this sampler
/// trades that radial error for polynomial evaluation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BezierSampler;

impl CircleSampler for BezierSampler {
    fn sample(&self, circle: Circle, n: f64) -> Vec<Point> {
        let r = circle.radius;
        let triple = [Point::new(0.0, r), Point::new(r, r), Point::new(r, 0.0)];
        let mut pts = Vec::new();
        for quadrant in 0..4 {
            // Clockwise quarter turns, so each arc starts where the previous
            // one ended and the four concatenate into a closed tour.
            let (sin, cos) = (f64::from(quadrant) * FRAC_PI_2).sin_cos();
            let rotate =
                |p: Point| Point::new(p.x * cos + p.y * sin, -p.x * sin + p.y * cos);
            let arc = QuadBez::new(rotate(triple[0]), rotate(triple[1]), rotate(triple[2]));
            pts.extend(arc.sample(n / 4.0));
        }
        let translate = circle.center.to_vec2();
        pts.iter().map(|p| *p + translate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trig_points_on_circle() {
        let circle = Circle::new((2.0, 3.0), 1.5);
        let pts = TrigSampler.sample(circle, 40.0);
        assert!(!pts.is_empty());
        for p in &pts {
            let err = (p.distance(circle.center) - circle.radius).abs() / circle.radius;
            assert!(err < 1e-6, "point {p:?} off circle by {err}");
        }
    }

    #[test]
    fn trig_step_count() {
        // 1/n radian stepping gives about 2πn points, not n.
        let pts = TrigSampler.sample(Circle::new((0.0, 0.0), 1.0), 80.0);
        assert_eq!(pts.len(), 504);
        // Starts at angle 0 and closes past 2π.
        assert!(pts[0].distance(Point::new(1.0, 0.0)) < 1e-12);
        assert!(pts[pts.len() - 1].distance(pts[0]) < 2.0 / 80.0);
    }

    #[test]
    fn bezier_points_near_circle() {
        let circle = Circle::new((-1.0, 4.0), 2.0);
        let pts = BezierSampler.sample(circle, 40.0);
        assert!(!pts.is_empty());
        for p in &pts {
            let err = (p.distance(circle.center) - circle.radius).abs() / circle.radius;
            // Quadratic quarter arcs sag/bulge by up to ~6.1%.
            assert!(err < 0.07, "point {p:?} off circle by {err}");
        }
    }

    #[test]
    fn bezier_hits_axis_points() {
        let circle = Circle::new((0.0, 0.0), 3.0);
        let pts = BezierSampler.sample(circle, 40.0);
        // Each quadrant arc starts on an axis extreme of the circle.
        for target in [
            Point::new(0.0, 3.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, -3.0),
            Point::new(-3.0, 0.0),
        ] {
            assert!(
                pts.iter().any(|p| p.distance(target) < 1e-9),
                "no sample near {target:?}"
            );
        }
    }

    #[test]
    fn fractional_per_quadrant_count() {
        // n/4 is not an integer here; the step loop handles it as-is.
        let pts = BezierSampler.sample(Circle::new((0.0, 0.0), 1.0), 10.0);
        assert!(!pts.is_empty());
    }
}
