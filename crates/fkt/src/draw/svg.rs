//! SVG rendering of a laid-out graph.

use std::fmt::Write;

use nalgebra::Point2;

use super::Visualizer;
use crate::graph::Graph;
use crate::matching::OrientedGraph;

const MARGIN: f64 = 24.0;
const RADIUS: f64 = 9.0;

/// Renders into an in-memory SVG document; the last drawing wins.
///
/// Vertices without a position in `layout` are left out, together with
/// their edges.
#[derive(Clone, Debug)]
pub struct SvgVisualizer {
    /// Width and height of the square canvas in pixels.
    pub size: f64,
    pub svg: String,
}

impl Default for SvgVisualizer {
    fn default() -> Self {
        Self {
            size: 480.0,
            svg: String::new(),
        }
    }
}

impl SvgVisualizer {
    fn render(&mut self, graph: &Graph, layout: &[Point2<f64>], oriented: Option<&OrientedGraph>) {
        let size = self.size;
        let (lo, hi) = bounds(layout);
        let span = (hi.x - lo.x).max(hi.y - lo.y).max(1e-9);
        let scale = (size - 2.0 * MARGIN) / span;
        // SVG y grows downwards.
        let px = |p: Point2<f64>| {
            (
                MARGIN + (p.x - lo.x) * scale,
                size - MARGIN - (p.y - lo.y) * scale,
            )
        };

        let mut s = String::new();
        let _ = writeln!(
            s,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        if oriented.is_some() {
            let _ = writeln!(
                s,
                r#"<defs><marker id="arrow" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z"/></marker></defs>"#
            );
        }
        for (e, &(u, v)) in graph.edges().iter().enumerate() {
            let (from, to, marker) = match oriented.and_then(|o| o.arc(e)) {
                Some((t, h)) => (t, h, r#" marker-end="url(#arrow)""#),
                None => (u, v, ""),
            };
            let (Some(&a), Some(&b)) = (layout.get(from), layout.get(to)) else {
                continue;
            };
            let (x1, y1) = px(a);
            let (x2, y2) = px(b);
            // Stop the line at the target's rim so arrowheads stay visible.
            let (dx, dy) = (x2 - x1, y2 - y1);
            let len = (dx * dx + dy * dy).sqrt().max(1e-9);
            let shrink = if marker.is_empty() { 0.0 } else { RADIUS / len };
            let _ = writeln!(
                s,
                r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{:.2}" y2="{:.2}" stroke="black"{marker}/>"#,
                x2 - dx * shrink,
                y2 - dy * shrink
            );
        }
        for (v, &p) in layout.iter().enumerate().take(graph.vertex_count()) {
            let (x, y) = px(p);
            let _ = writeln!(
                s,
                r#"<circle cx="{x:.2}" cy="{y:.2}" r="{RADIUS}" fill="lightblue" stroke="black"/>"#
            );
            let _ = writeln!(
                s,
                r#"<text x="{x:.2}" y="{:.2}" font-size="10" text-anchor="middle">{}</text>"#,
                y + 3.5,
                escape(graph.label(v))
            );
        }
        s.push_str("</svg>\n");
        self.svg = s;
    }
}

impl Visualizer for SvgVisualizer {
    fn draw(&mut self, graph: &Graph, layout: &[Point2<f64>]) {
        self.render(graph, layout, None);
    }

    fn draw_oriented(&mut self, graph: &Graph, layout: &[Point2<f64>], oriented: &OrientedGraph) {
        self.render(graph, layout, Some(oriented));
    }
}

fn bounds(layout: &[Point2<f64>]) -> (Point2<f64>, Point2<f64>) {
    let mut lo = Point2::new(f64::INFINITY, f64::INFINITY);
    let mut hi = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in layout {
        lo = Point2::new(lo.x.min(p.x), lo.y.min(p.y));
        hi = Point2::new(hi.x.max(p.x), hi.y.max(p.y));
    }
    if layout.is_empty() {
        (Point2::origin(), Point2::new(1.0, 1.0))
    } else {
        (lo, hi)
    }
}

fn escape(label: &str) -> String {
    label
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
