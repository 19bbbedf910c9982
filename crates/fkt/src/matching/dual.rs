//! Dual tree T2: faces joined across primal edges outside T1.
//!
//! The complement of a spanning tree in a connected plane graph is a
//! spanning tree of the dual, so the result is a tree whenever the embedding
//! is planar. That is assumed here and enforced by the orienter, which fails
//! when leaf processing gets stuck.

use std::collections::HashSet;

use super::faces::{extract_faces, FaceSet};
use crate::embedding::Embedding;
use crate::error::FktError;
use crate::graph::{Graph, SpanningTree};

/// Undirected multigraph-free dual restricted to non-T1 edges.
#[derive(Clone, Debug, Default)]
pub struct DualGraph {
    adj: Vec<Vec<(usize, usize)>>, // (face, primal edge)
    edge_count: usize,
}

impl DualGraph {
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn degree(&self, f: usize) -> usize {
        self.adj[f].len()
    }

    /// `(neighbouring face, shared primal edge)` pairs.
    pub fn neighbors(&self, f: usize) -> &[(usize, usize)] {
        &self.adj[f]
    }

    #[cfg(test)]
    pub(crate) fn from_links(nodes: usize, links: &[(usize, usize, usize)]) -> Self {
        let mut adj = vec![Vec::new(); nodes];
        for &(f, g, e) in links {
            adj[f].push((g, e));
            adj[g].push((f, e));
        }
        Self {
            adj,
            edge_count: links.len(),
        }
    }
}

/// Extract faces and join every face pair that shares a non-T1 edge.
///
/// At most one dual edge is kept per face pair (the lowest primal edge id);
/// in a simple plane graph a second one would close a cycle in the dual of
/// a tree complement, which cannot happen.
pub fn build_dual_tree(
    graph: &Graph,
    embedding: &Embedding,
    tree: &SpanningTree,
) -> Result<(DualGraph, FaceSet), FktError> {
    let faces = extract_faces(graph, embedding)?;
    let mut adj = vec![Vec::new(); faces.len()];
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut edge_count = 0;
    for e in 0..graph.edge_count() {
        if tree.contains(e) {
            continue;
        }
        let [fwd, rev] = embedding.half_edges_of(e);
        let (f, g) = (faces.face_of[fwd], faces.face_of[rev]);
        if f == g {
            // Only a bridge borders one face twice, and bridges are in T1.
            return Err(FktError::inconsistent(format!(
                "non-tree edge {e} borders face {f} on both sides"
            )));
        }
        if seen.insert((f.min(g), f.max(g))) {
            adj[f].push((g, e));
            adj[g].push((f, e));
            edge_count += 1;
        }
    }
    Ok((DualGraph { adj, edge_count }, faces))
}
