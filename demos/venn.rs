// Copyright 2026 the Venn2 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a few proportional Venn diagrams as SVG files.
//!
//! Run with `RUST_LOG=debug` to see the solver's accepted candidates.

use std::error::Error;
use std::fmt::Write as _;
use std::fs;

use venn2::{Diagram, Point, Renderer, SetCounts};

/// Pixels per normalized-radius unit.
const SCALE: f64 = 400.0;
/// Margin around the figure, in normalized units.
const MARGIN: f64 = 0.1;

/// Collects filled regions and a title, then serializes to an SVG document.
struct SvgRenderer {
    fills: Vec<Vec<Point>>,
    title: String,
}

impl SvgRenderer {
    fn new() -> SvgRenderer {
        SvgRenderer {
            fills: Vec::new(),
            title: String::new(),
        }
    }

    fn to_svg(&self) -> String {
        let mut max = Point::ZERO;
        for p in self.fills.iter().flatten() {
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        let width = (max.x + 2.0 * MARGIN) * SCALE;
        let height = (max.y + 2.0 * MARGIN) * SCALE;
        // SVG y grows downward; the diagram is y-symmetric so flipping only
        // moves the title.
        let place = |p: &Point| {
            (
                (p.x + MARGIN) * SCALE,
                height - (p.y + MARGIN) * SCALE,
            )
        };

        let mut doc = String::new();
        let _ = writeln!(
            doc,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\">"
        );
        for (boundary, color) in self.fills.iter().zip(["#3465a4", "#cc0000"].iter().cycle()) {
            let mut points = String::new();
            for p in boundary {
                let (x, y) = place(p);
                let _ = write!(points, "{x:.2},{y:.2} ");
            }
            let _ = writeln!(
                doc,
                "  <polygon points=\"{}\" fill=\"{color}\" fill-opacity=\"0.8\" />",
                points.trim_end()
            );
        }
        let _ = writeln!(
            doc,
            "  <text x=\"{:.2}\" y=\"16\" text-anchor=\"middle\" font-family=\"sans-serif\">{}</text>",
            width / 2.0,
            self.title
        );
        let _ = writeln!(doc, "</svg>");
        doc
    }
}

impl Renderer for SvgRenderer {
    fn fill(&mut self, boundary: &[Point]) {
        self.fills.push(boundary.to_vec());
    }

    fn title(&mut self, text: &str) {
        self.title = text.to_owned();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    for (a, b, ab) in [
        (10.0, 10.0, 0.0),
        (10.0, 50.0, 10.0),
        (100.0, 50.0, 10.0),
        (100.0, 50.0, 40.0),
    ] {
        let diagram = Diagram::new(SetCounts::new(a, b, ab)?)?;
        let mut svg = SvgRenderer::new();
        diagram.render(&mut svg);
        let path = format!("venn_{a}_{b}_{ab}.svg");
        fs::write(&path, svg.to_svg())?;
        println!("{path}: {}", diagram.label());
    }
    Ok(())
}
