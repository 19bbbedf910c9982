//! Barycentric (Tutte) layout.
//!
//! The longest face is pinned to the unit circle and every other vertex sits
//! at the average of its neighbours. For 3-connected planar graphs this is a
//! crossing-free straight-line drawing; for the rest it is still a readable
//! picture.

use std::f64::consts::TAU;

use nalgebra::{DMatrix, Point2};

use crate::graph::Graph;
use crate::matching::Face;

/// `n` points evenly spaced on the unit circle, starting at angle 0.
pub fn circle_layout(n: usize) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n.max(1) as f64;
            Point2::new(t.cos(), t.sin())
        })
        .collect()
}

/// Tutte layout with the longest face as the outer boundary.
///
/// Falls back to `circle_layout` when there is no face or the barycentric
/// system is singular.
pub fn tutte_layout(graph: &Graph, faces: &[Face]) -> Vec<Point2<f64>> {
    let n = graph.vertex_count();
    let Some(outer) = faces.iter().max_by_key(|f| f.len()) else {
        return circle_layout(n);
    };
    let mut ring = Vec::new();
    let mut fixed = vec![false; n];
    for &v in &outer.vertices {
        if !fixed[v] {
            fixed[v] = true;
            ring.push(v);
        }
    }
    let mut pos = vec![Point2::origin(); n];
    for (p, &v) in circle_layout(ring.len()).into_iter().zip(&ring) {
        pos[v] = p;
    }

    let free: Vec<usize> = (0..n).filter(|&v| !fixed[v]).collect();
    if free.is_empty() {
        return pos;
    }
    let mut slot = vec![usize::MAX; n];
    for (i, &v) in free.iter().enumerate() {
        slot[v] = i;
    }
    let m = free.len();
    let mut a = DMatrix::<f64>::zeros(m, m);
    let mut b = DMatrix::<f64>::zeros(m, 2);
    for (i, &v) in free.iter().enumerate() {
        a[(i, i)] = graph.degree(v) as f64;
        for w in graph.neighbors(v) {
            if fixed[w] {
                b[(i, 0)] += pos[w].x;
                b[(i, 1)] += pos[w].y;
            } else {
                a[(i, slot[w])] -= 1.0;
            }
        }
    }
    match a.lu().solve(&b) {
        Some(x) => {
            for (i, &v) in free.iter().enumerate() {
                pos[v] = Point2::new(x[(i, 0)], x[(i, 1)]);
            }
            pos
        }
        None => circle_layout(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::{PathAddition, PlanarEmbedder};
    use crate::graph::generators::{grid, wheel};
    use crate::matching::extract_faces;

    #[test]
    fn wheel_hub_lands_at_the_center() {
        let g = wheel(7);
        let emb = PathAddition.embed(&g).unwrap();
        let faces = extract_faces(&g, &emb).unwrap();
        let pos = tutte_layout(&g, &faces.faces);
        assert!(pos[0].coords.norm() < 1e-9);
        for p in &pos[1..] {
            assert!((p.coords.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn interior_grid_vertices_stay_inside_the_circle() {
        let g = grid(3, 3);
        let emb = PathAddition.embed(&g).unwrap();
        let faces = extract_faces(&g, &emb).unwrap();
        let pos = tutte_layout(&g, &faces.faces);
        assert_eq!(pos.len(), 9);
        assert!(pos[4].coords.norm() < 1.0);
    }

    #[test]
    fn edgeless_graph_uses_the_circle() {
        let g = Graph::new(3);
        let pos = tutte_layout(&g, &[]);
        assert_eq!(pos, circle_layout(3));
    }
}
