// Copyright 2026 the Venn2 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional two-set Venn diagram layout.
//!
//! Given the cardinalities of set A, set B, and their intersection, this
//! crate derives two circle radii and a center-to-center distance such that
//! the overlapping lens area is proportional to the intersection size, and
//! produces the circle boundary point sequences a renderer needs to draw the
//! diagram.
//!
//! The crate does no drawing itself; the [`Renderer`] trait is the seam to
//! whatever produces the actual image.
//!
//! # Examples
//!
//! Solving a layout directly:
//! ```
//! use venn2::SetCounts;
//!
//! let layout = SetCounts::new(100.0, 50.0, 40.0)?.solve()?;
//! assert!((layout.radius_a - 0.5641896).abs() < 1e-6);
//! assert!((layout.radius_b - 0.3989423).abs() < 1e-6);
//! assert!(layout.distance > 0.0 && layout.distance < layout.radius_a + layout.radius_b);
//! # Ok::<(), venn2::Error>(())
//! ```
//!
//! Assembling a full diagram and handing it to a renderer:
//! ```
//! use venn2::{Diagram, Point, Renderer, SetCounts};
//!
//! struct Count(usize);
//! impl Renderer for Count {
//!     fn fill(&mut self, boundary: &[Point]) {
//!         self.0 += boundary.len();
//!     }
//!     fn title(&mut self, _text: &str) {}
//! }
//!
//! let diagram = Diagram::new(SetCounts::new(10.0, 50.0, 10.0)?)?;
//! let mut count = Count(0);
//! diagram.render(&mut count);
//! assert!(count.0 > 0);
//! # Ok::<(), venn2::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![allow(clippy::unreadable_literal, clippy::many_single_char_names)]

mod circle;
mod common;
mod cubicbez;
mod diagram;
mod layout;
mod lens;
mod point;
mod quadbez;
mod sampler;
mod vec2;

pub use crate::circle::*;
pub use crate::cubicbez::*;
pub use crate::diagram::*;
pub use crate::layout::*;
pub use crate::lens::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::sampler::*;
pub use crate::vec2::*;
