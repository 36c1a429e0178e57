//! The lens formed by two overlapping circles.

use crate::Point;

/// Geometry of the lens (overlap region) of two circles whose centers are a
/// given distance apart, in the frame where circle A's center is the origin
/// and circle B's center lies at `(distance, 0)`.
///
/// Construction is pure and total over feasible inputs; a distance at which
/// the circles have no real intersection yields `None` rather than an error,
/// so a scanning caller can simply skip it.
#[derive(Clone, Copy, Debug)]
pub struct Lens {
    radius_a: f64,
    radius_b: f64,
    /// Offset of the radical line from circle A's center.
    m1: f64,
    /// Offset of the radical line from circle B's center.
    m2: f64,
    /// Half the chord length, the `y` extent of the intersection points.
    half_chord: f64,
}

impl Lens {
    /// The lens of circles with radii `radius_a` and `radius_b` whose
    /// centers are `distance` apart.
    ///
    /// Returns `None` when the geometry has no real solution: the circles
    /// are too far apart, one strictly contains the other, or `distance`
    /// is zero or otherwise degenerate.
    pub fn new(radius_a: f64, radius_b: f64, distance: f64) -> Option<Lens> {
        let m1 = (distance * distance - radius_b * radius_b + radius_a * radius_a)
            / (2.0 * distance);
        let h2 = radius_a * radius_a - m1 * m1;
        // A negative squared height means no real chord; a zero distance or
        // non-finite input shows up here as NaN.
        if h2 < 0.0 || h2.is_nan() {
            return None;
        }
        Some(Lens {
            radius_a,
            radius_b,
            m1,
            m2: distance - m1,
            half_chord: h2.sqrt(),
        })
    }

    /// The lens area, as the sum of the two circular segments cut off by
    /// the common chord.
    pub fn area(&self) -> f64 {
        segment_area(self.radius_a, self.m1, self.half_chord)
            + segment_area(self.radius_b, self.m2, self.half_chord)
    }

    /// The two points where the circle boundaries cross, `(m1, ±h)` in
    /// circle A's frame. For tangent circles the two coincide.
    pub fn chord(&self) -> [Point; 2] {
        [
            Point::new(self.m1, self.half_chord),
            Point::new(self.m1, -self.half_chord),
        ]
    }
}

/// Area of the circular segment of radius `r` cut off by a chord at signed
/// distance `m` from the center, with half-chord height `h`.
fn segment_area(r: f64, m: f64, h: f64) -> f64 {
    // The ratio can drift a hair outside [-1, 1] for the far circle.
    let ratio = (m / r).clamp(-1.0, 1.0);
    r * r * ratio.acos() - m * h
}
