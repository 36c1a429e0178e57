//! The area-matching layout solver.

use std::error::Error as StdError;
use std::fmt;

use log::debug;

use crate::{Circle, Lens, Point};

/// Spacing of the candidate scan over the center distance.
///
/// This is an absolute step in normalized-radius units (the larger set is
/// normalized to area 1, so radii never exceed `sqrt(1/π) ≈ 0.564`), the
/// same fixed 0.01 grid the search has always used. It bounds how closely
/// the returned distance can match the true optimum.
pub const DISTANCE_STEP: f64 = 0.01;

/// Error produced by layout solving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The counts are not a valid set triple: a count is negative or
    /// non-finite, the intersection exceeds one of the sets, or both sets
    /// are empty.
    InvalidCounts,
    /// No candidate distance on the scan grid produced a real lens, so there
    /// is no layout to return.
    NoFeasibleLayout,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCounts => write!(f, "invalid set counts"),
            Error::NoFeasibleLayout => {
                write!(f, "no feasible layout on the distance grid")
            }
        }
    }
}

impl StdError for Error {}

/// Validated cardinalities of two sets and their intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetCounts {
    a: f64,
    b: f64,
    ab: f64,
}

impl SetCounts {
    /// Create counts for set A, set B, and their intersection A∩B.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCounts`] unless all three are finite and
    /// non-negative, `ab <= min(a, b)`, and at least one set is non-empty.
    pub fn new(a: f64, b: f64, ab: f64) -> Result<SetCounts, Error> {
        let valid = a.is_finite()
            && b.is_finite()
            && ab.is_finite()
            && a >= 0.0
            && b >= 0.0
            && ab >= 0.0
            && ab <= a.min(b)
            && a.max(b) > 0.0;
        if valid {
            Ok(SetCounts { a, b, ab })
        } else {
            Err(Error::InvalidCounts)
        }
    }

    /// The cardinality of set A.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The cardinality of set B.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The cardinality of the intersection A∩B.
    #[inline]
    pub fn ab(&self) -> f64 {
        self.ab
    }

    /// Solve for the circle layout whose lens area best matches the
    /// intersection, proportionally to the circle areas.
    ///
    /// The larger set is normalized to area 1 and both radii derived from
    /// the normalized areas; the center distance is then scanned over
    /// `(0, radius_a + radius_b)` on the fixed [`DISTANCE_STEP`] grid,
    /// keeping the first candidate with the strictly smallest area
    /// mismatch (so ties go to the smallest distance). Candidates where the
    /// circles have no real intersection are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFeasibleLayout`] when no candidate on the grid
    /// yields a real lens, e.g. when one normalized radius is smaller than
    /// the grid spacing.
    pub fn solve(&self) -> Result<Layout, Error> {
        let max = self.a.max(self.b);
        let target = self.ab / max;
        let radius_a = Circle::from_area(Point::ZERO, self.a / max).radius;
        let radius_b = Circle::from_area(Point::ZERO, self.b / max).radius;

        let mut best: Option<(f64, f64, Lens)> = None;
        let mut d = DISTANCE_STEP;
        while d < radius_a + radius_b {
            if let Some(lens) = Lens::new(radius_a, radius_b, d) {
                let residual = (target - lens.area()).abs();
                if best
                    .as_ref()
                    .map_or(true, |(best_residual, ..)| residual < *best_residual)
                {
                    best = Some((residual, d, lens));
                }
            }
            d += DISTANCE_STEP;
        }

        let (residual, distance, lens) = best.ok_or(Error::NoFeasibleLayout)?;
        debug!("layout distance {distance:.4}, area residual {residual:.3e}");
        Ok(Layout {
            radius_a,
            radius_b,
            distance,
            intersections: lens.chord(),
        })
    }
}

/// A solved two-circle layout.
///
/// Coordinates are in the frame where circle A's center is the origin and
/// circle B's center lies at `(distance, 0)`; radii are in normalized units
/// (the larger set has area 1).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Radius of circle A.
    pub radius_a: f64,
    /// Radius of circle B.
    pub radius_b: f64,
    /// Distance between the circle centers.
    pub distance: f64,
    /// The two points where the circle boundaries cross.
    pub intersections: [Point; 2],
}
