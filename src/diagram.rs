//! Assembling a solved layout into drawable geometry.

use crate::{Circle, CircleSampler, Error, Layout, Point, SetCounts, TrigSampler, Vec2};

/// Sampling density handed to the trig sampler for each boundary.
const BOUNDARY_SAMPLES: f64 = 80.0;

/// The seam to the rendering collaborator.
///
/// The crate computes geometry only; whatever turns filled regions and a
/// title into pixels or vector output implements this.
pub trait Renderer {
    /// Fill the closed region bounded by the given point sequence.
    fn fill(&mut self, boundary: &[Point]);

    /// Set the diagram title.
    fn title(&mut self, text: &str);
}

/// A solved two-set Venn diagram positioned in a shared coordinate frame.
///
/// Circle A sits at `(radius_a, radius_a)` so the figure's lower-left corner
/// is near the origin; circle B sits `distance` to its right.
#[derive(Clone, Debug)]
pub struct Diagram {
    counts: SetCounts,
    layout: Layout,
    circle_a: Circle,
    circle_b: Circle,
}

impl Diagram {
    /// Solve the layout for `counts` and position the circles.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::NoFeasibleLayout`] from the solver.
    pub fn new(counts: SetCounts) -> Result<Diagram, Error> {
        let layout = counts.solve()?;
        let circle_a = Circle::new((layout.radius_a, layout.radius_a), layout.radius_a);
        let circle_b = Circle::new(
            circle_a.center + Vec2::new(layout.distance, 0.0),
            layout.radius_b,
        );
        Ok(Diagram {
            counts,
            layout,
            circle_a,
            circle_b,
        })
    }

    /// The solved layout, in circle A's frame.
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Circle A, positioned in the diagram frame.
    #[inline]
    pub fn circle_a(&self) -> Circle {
        self.circle_a
    }

    /// Circle B, positioned in the diagram frame.
    #[inline]
    pub fn circle_b(&self) -> Circle {
        self.circle_b
    }

    /// The boundary of circle A, freshly sampled.
    pub fn boundary_a(&self) -> Vec<Point> {
        TrigSampler.sample(self.circle_a, BOUNDARY_SAMPLES)
    }

    /// The boundary of circle B, freshly sampled.
    pub fn boundary_b(&self) -> Vec<Point> {
        TrigSampler.sample(self.circle_b, BOUNDARY_SAMPLES)
    }

    /// The region-count label, `A=<A only> A+B=<both> B=<B only>`.
    pub fn label(&self) -> String {
        format!(
            "A={} A+B={} B={}",
            self.counts.a() - self.counts.ab(),
            self.counts.ab(),
            self.counts.b() - self.counts.ab(),
        )
    }

    /// Hand both filled boundaries and the label to the renderer.
    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.fill(&self.boundary_a());
        renderer.fill(&self.boundary_b());
        renderer.title(&self.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagram(a: f64, b: f64, ab: f64) -> Diagram {
        Diagram::new(SetCounts::new(a, b, ab).unwrap()).unwrap()
    }

    #[test]
    fn placement() {
        let d = diagram(100.0, 50.0, 40.0);
        let layout = *d.layout();
        assert_eq!(
            d.circle_a().center,
            Point::new(layout.radius_a, layout.radius_a)
        );
        assert_eq!(
            d.circle_b().center,
            Point::new(layout.radius_a + layout.distance, layout.radius_a)
        );
        assert_eq!(d.circle_b().radius, layout.radius_b);
    }

    #[test]
    fn boundaries_on_placed_circles() {
        let d = diagram(10.0, 50.0, 10.0);
        for (boundary, circle) in [
            (d.boundary_a(), d.circle_a()),
            (d.boundary_b(), d.circle_b()),
        ] {
            assert!(!boundary.is_empty());
            for p in &boundary {
                let err = (p.distance(circle.center) - circle.radius).abs();
                assert!(err < 1e-9 * circle.radius.max(1.0));
            }
        }
    }

    #[test]
    fn label_counts_regions() {
        assert_eq!(diagram(100.0, 50.0, 40.0).label(), "A=60 A+B=40 B=10");
        assert_eq!(diagram(10.0, 10.0, 0.0).label(), "A=10 A+B=0 B=10");
    }

    #[test]
    fn render_hands_over_both_regions() {
        struct Recording {
            fills: Vec<usize>,
            title: Option<String>,
        }
        impl Renderer for Recording {
            fn fill(&mut self, boundary: &[Point]) {
                self.fills.push(boundary.len());
            }
            fn title(&mut self, text: &str) {
                self.title = Some(text.to_owned());
            }
        }

        let mut recording = Recording {
            fills: Vec::new(),
            title: None,
        };
        diagram(10.0, 50.0, 10.0).render(&mut recording);
        assert_eq!(recording.fills.len(), 2);
        assert!(recording.fills.iter().all(|&n| n > 0));
        assert_eq!(recording.title.as_deref(), Some("A=0 A+B=10 B=40"));
    }

    #[test]
    fn infeasible_counts_propagate() {
        let counts = SetCounts::new(0.0, 10.0, 0.0).unwrap();
        assert!(matches!(Diagram::new(counts), Err(Error::NoFeasibleLayout)));
    }
}
