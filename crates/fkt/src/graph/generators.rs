//! Sample graph families.
//!
//! Vertex numbering follows networkx (`grid_graph`, `star_graph`,
//! `barbell_graph`, ...) so counts can be compared against the usual
//! reference values. `random_planar` draws reproducible connected planar
//! graphs for property tests and benchmarks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{spanning_tree, Graph};

fn with_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
    let mut g = Graph::new(n);
    for (u, v) in edges {
        g.push_edge_unchecked(u, v);
    }
    g
}

fn clique_edges(offset: usize, m: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..m).flat_map(move |i| (i + 1..m).map(move |j| (offset + i, offset + j)))
}

fn path_edges(offset: usize, m: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..m).map(move |i| (offset + i - 1, offset + i))
}

/// `rows × cols` grid; vertex `(r, c)` is `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                edges.push((v, v + 1));
            }
            if r + 1 < rows {
                edges.push((v, v + cols));
            }
        }
    }
    with_edges(rows * cols, edges)
}

/// Complete graph `K_n`.
pub fn complete(n: usize) -> Graph {
    with_edges(n, clique_edges(0, n))
}

/// Cycle `C_n` (`n >= 3`; smaller `n` degrades to a path).
pub fn cycle(n: usize) -> Graph {
    let mut g = with_edges(n, path_edges(0, n));
    if n >= 3 {
        g.push_edge_unchecked(n - 1, 0);
    }
    g
}

/// Path on `n` vertices.
pub fn path(n: usize) -> Graph {
    with_edges(n, path_edges(0, n))
}

/// Star with center `0` and `leaves` leaves (`leaves + 1` vertices).
pub fn star(leaves: usize) -> Graph {
    with_edges(leaves + 1, (1..=leaves).map(|v| (0, v)))
}

/// Wheel on `n` vertices: hub `0` joined to the cycle `1..n`.
pub fn wheel(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for v in 1..n {
        g.push_edge_unchecked(0, v);
    }
    for (u, v) in path_edges(1, n.saturating_sub(1)) {
        g.push_edge_unchecked(u, v);
    }
    if n >= 4 {
        g.push_edge_unchecked(n - 1, 1);
    }
    g
}

/// Two `K_bell` joined by a path of `bridge` extra vertices.
pub fn barbell(bell: usize, bridge: usize) -> Graph {
    let n = 2 * bell + bridge;
    let right = bell + bridge;
    let mut edges: Vec<(usize, usize)> = clique_edges(0, bell).collect();
    edges.extend(path_edges(bell, bridge));
    edges.extend(clique_edges(right, bell));
    if bell > 0 {
        edges.push((bell - 1, bell));
        if bridge > 0 {
            edges.push((right - 1, right));
        }
    }
    with_edges(n, edges)
}

/// `K_head` with a tail path of `tail` vertices attached to vertex `head - 1`.
pub fn lollipop(head: usize, tail: usize) -> Graph {
    let mut edges: Vec<(usize, usize)> = clique_edges(0, head).collect();
    edges.extend(path_edges(head, tail));
    if head > 0 && tail > 0 {
        edges.push((head - 1, head));
    }
    with_edges(head + tail, edges)
}

/// The demo dictionary: name, graph.
pub fn sample_graphs() -> Vec<(&'static str, Graph)> {
    vec![
        ("grid2x2", grid(2, 2)),
        ("grid3x2", grid(3, 2)),
        ("complete", complete(4)),
        ("cycle", cycle(6)),
        ("star", star(5)),
        ("grid4x4", grid(4, 4)),
        ("barbell4x4", barbell(4, 4)),
        ("lollipop", lollipop(4, 6)),
    ]
}

/// Random connected planar graph on a `rows × cols` triangulated grid.
///
/// A uniformly shuffled spanning tree of the triangulated grid is always
/// kept; every other edge survives with probability `keep` (NaN counts as 0).
pub fn random_planar(rows: usize, cols: usize, keep: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut candidates = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                candidates.push((v, v + 1));
            }
            if r + 1 < rows {
                candidates.push((v, v + cols));
                if c + 1 < cols {
                    candidates.push((v, v + cols + 1));
                }
            }
        }
    }
    candidates.shuffle(&mut rng);
    let full = with_edges(rows * cols, candidates.iter().copied());
    let keep = if keep.is_nan() { 0.0 } else { keep.clamp(0.0, 1.0) };
    match spanning_tree(&full) {
        Ok(tree) => with_edges(
            rows * cols,
            candidates
                .iter()
                .enumerate()
                .filter(|&(e, _)| tree.contains(e) || rng.gen_bool(keep))
                .map(|(_, &uv)| uv)
                .collect::<Vec<_>>(),
        ),
        // A triangulated grid is connected for every size, empty included.
        Err(_) => full,
    }
}
