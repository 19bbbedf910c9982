//! Combinatorial planar embeddings (rotation systems).
//!
//! Purpose
//! - Store, for each vertex, the cyclic order of its neighbours and expose
//!   the face-walk step: after arriving at `v` via `(u, v)`, continue along
//!   `(v, w)` where `w` follows `u` in `v`'s rotation.
//! - Provide the `PlanarEmbedder` seam. `PathAddition` computes an embedding
//!   from scratch; `StraightLine` reads one off a caller-supplied drawing.
//!
//! Layout
//! - Half-edges are numbered per vertex: the half-edge `v → rotation[v][i]`
//!   is `offset[v] + i`. `head`, `twin`, `next` and `edge` are flat arrays
//!   indexed by half-edge, so face walks never hash.

mod blocks;
mod path_addition;

use nalgebra::Point2;

use crate::error::FktError;
use crate::graph::Graph;

pub use path_addition::PathAddition;

/// Computes a planar rotation system for a graph.
pub trait PlanarEmbedder {
    /// Returns `FktError::NotPlanar` when no planar embedding exists.
    fn embed(&self, graph: &Graph) -> Result<Embedding, FktError>;
}

/// Rotation system with precomputed half-edge tables.
#[derive(Clone, Debug)]
pub struct Embedding {
    rotation: Vec<Vec<usize>>,
    offset: Vec<usize>,
    head: Vec<usize>,
    tail: Vec<usize>,
    edge: Vec<usize>,
    twin: Vec<usize>,
    next: Vec<usize>,
    by_edge: Vec<[usize; 2]>, // [stored direction, reverse]
}

impl Embedding {
    /// Validate `rotation` against `graph` and build the half-edge tables.
    ///
    /// `rotation[v]` must list every neighbour of `v` exactly once. Planarity
    /// of the resulting surface is checked later, during face extraction.
    pub fn from_rotations(graph: &Graph, rotation: Vec<Vec<usize>>) -> Result<Self, FktError> {
        let n = graph.vertex_count();
        if rotation.len() != n {
            return Err(FktError::malformed(format!(
                "rotation system covers {} vertices, graph has {n}",
                rotation.len()
            )));
        }
        let mut offset = Vec::with_capacity(n + 1);
        offset.push(0);
        for (v, rot) in rotation.iter().enumerate() {
            let mut got = rot.clone();
            let mut want: Vec<usize> = graph.neighbors(v).collect();
            got.sort_unstable();
            want.sort_unstable();
            if got != want {
                return Err(FktError::malformed(format!(
                    "rotation at vertex {v} is not a permutation of its neighbours"
                )));
            }
            offset.push(offset[v] + rot.len());
        }

        let total = offset[n];
        let mut head = Vec::with_capacity(total);
        let mut tail = Vec::with_capacity(total);
        let mut edge = Vec::with_capacity(total);
        let mut by_edge = vec![[usize::MAX; 2]; graph.edge_count()];
        for (v, rot) in rotation.iter().enumerate() {
            for &w in rot {
                let h = head.len();
                let e = graph
                    .edge_between(v, w)
                    .ok_or_else(|| FktError::inconsistent(format!("no edge {{{v}, {w}}}")))?;
                let side = usize::from(graph.edge(e).0 != v);
                by_edge[e][side] = h;
                head.push(w);
                tail.push(v);
                edge.push(e);
            }
        }
        let twin: Vec<usize> = (0..total)
            .map(|h| {
                let [fwd, rev] = by_edge[edge[h]];
                if h == fwd {
                    rev
                } else {
                    fwd
                }
            })
            .collect();
        let next = (0..total)
            .map(|h| {
                let v = head[h];
                let slot = twin[h] - offset[v];
                let deg = offset[v + 1] - offset[v];
                offset[v] + (slot + 1) % deg
            })
            .collect();

        Ok(Self {
            rotation,
            offset,
            head,
            tail,
            edge,
            twin,
            next,
            by_edge,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.rotation.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.head.len()
    }

    /// Neighbours of `v` in cyclic order.
    pub fn rotation(&self, v: usize) -> &[usize] {
        &self.rotation[v]
    }

    /// Id of the half-edge `u → v`.
    pub fn half_edge(&self, u: usize, v: usize) -> Option<usize> {
        self.rotation[u]
            .iter()
            .position(|&w| w == v)
            .map(|i| self.offset[u] + i)
    }

    /// `[stored direction, reverse]` half-edges of undirected edge `e`.
    pub fn half_edges_of(&self, e: usize) -> [usize; 2] {
        self.by_edge[e]
    }

    pub fn head(&self, h: usize) -> usize {
        self.head[h]
    }

    pub fn tail(&self, h: usize) -> usize {
        self.tail[h]
    }

    /// Undirected edge id carried by half-edge `h`.
    pub fn edge_of(&self, h: usize) -> usize {
        self.edge[h]
    }

    pub fn twin(&self, h: usize) -> usize {
        self.twin[h]
    }

    /// Face-walk successor of half-edge `h`.
    pub fn next(&self, h: usize) -> usize {
        self.next[h]
    }

    /// The half-edge following `(u, v)` on its face, as a vertex pair.
    pub fn next_half_edge(&self, u: usize, v: usize) -> Option<(usize, usize)> {
        let h = self.next[self.half_edge(u, v)?];
        Some((self.tail[h], self.head[h]))
    }
}

/// Embedding read off a straight-line drawing: neighbours sorted by angle.
///
/// The drawing is trusted only as far as the rotation it induces; a drawing
/// with crossings yields a non-planar rotation system, which face extraction
/// rejects through Euler's formula.
#[derive(Clone, Copy, Debug)]
pub struct StraightLine<'a> {
    pub positions: &'a [Point2<f64>],
}

impl PlanarEmbedder for StraightLine<'_> {
    fn embed(&self, graph: &Graph) -> Result<Embedding, FktError> {
        if self.positions.len() != graph.vertex_count() {
            return Err(FktError::malformed(format!(
                "{} positions for {} vertices",
                self.positions.len(),
                graph.vertex_count()
            )));
        }
        let rotation = (0..graph.vertex_count())
            .map(|v| {
                let p = self.positions[v];
                let mut around: Vec<(f64, usize)> = graph
                    .neighbors(v)
                    .map(|w| {
                        let d = self.positions[w] - p;
                        (d.y.atan2(d.x), w)
                    })
                    .collect();
                around.sort_by(|a, b| a.0.total_cmp(&b.0));
                around.into_iter().map(|(_, w)| w).collect()
            })
            .collect();
        Embedding::from_rotations(graph, rotation)
    }
}

#[cfg(test)]
mod tests;
