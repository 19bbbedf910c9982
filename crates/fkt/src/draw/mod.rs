//! Optional drawing of a graph and its orientation.
//!
//! Drawing is a side effect at the end of a run and never feeds back into
//! the count. `tutte_layout` produces coordinates from the faces; a
//! `Visualizer` consumes them.

mod layout;
mod svg;

use nalgebra::Point2;

use crate::graph::Graph;
use crate::matching::OrientedGraph;

pub use layout::{circle_layout, tutte_layout};
pub use svg::SvgVisualizer;

/// Sink for drawings.
pub trait Visualizer {
    fn draw(&mut self, graph: &Graph, layout: &[Point2<f64>]);

    /// Draw with arc directions; sinks that cannot show them fall back to
    /// `draw`.
    fn draw_oriented(&mut self, graph: &Graph, layout: &[Point2<f64>], oriented: &OrientedGraph) {
        let _ = oriented;
        self.draw(graph, layout);
    }
}
