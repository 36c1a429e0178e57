//! A circle.

use std::f64::consts::PI;
use std::ops::{Add, Sub};

use crate::{Point, Vec2};

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// A new circle from center and enclosed area, `radius = sqrt(area / π)`.
    ///
    /// This is how set cardinalities, normalized to areas, become circles.
    #[inline]
    pub fn from_area(center: impl Into<Point>, area: f64) -> Circle {
        Circle::new(center, (area / PI).sqrt())
    }

    /// The enclosed area.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_round_trip() {
        for area in [0.25, 0.5, 1.0, 123.456] {
            let c = Circle::from_area(Point::ZERO, area);
            assert!((c.area() - area).abs() < 1e-12);
        }
    }

    #[test]
    fn unit_area_radius() {
        // The normalized larger set always gets area 1.
        let c = Circle::from_area((0.0, 0.0), 1.0);
        assert!((c.radius - 0.5641895835477563).abs() < 1e-15);
    }

    #[test]
    fn translate() {
        let c = Circle::new((1.0, 1.0), 2.0) + Vec2::new(3.0, -1.0);
        assert_eq!(c.center, Point::new(4.0, 0.0));
        assert_eq!(c.radius, 2.0);
        assert_eq!((c - Vec2::new(3.0, -1.0)).center, Point::new(1.0, 1.0));
    }
}
