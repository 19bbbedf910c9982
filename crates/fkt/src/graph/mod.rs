//! Simple undirected graphs on vertices `0..n`.
//!
//! Purpose
//! - The single input container for the pipeline: no self-loops, no parallel
//!   edges, edges indexed in insertion order.
//! - Edge ids are stable and shared by every later stage (spanning tree,
//!   orientation, dual edges), so they are plain `usize`.
//!
//! Vertices carry display labels so callers can build graphs from arbitrary
//! hashable identifiers (`from_labeled_edges`) and still read results back.

pub mod generators;
pub mod spanning;

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::GraphError;

pub use spanning::{spanning_tree, SpanningTree};

/// Simple undirected graph with insertion-ordered edges.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    labels: Vec<String>,
    edges: Vec<(usize, usize)>,
    adj: Vec<Vec<(usize, usize)>>, // (neighbor, edge id), insertion order
    index: HashMap<(usize, usize), usize>, // normalized (min, max) -> edge id
}

impl Graph {
    /// Graph with `n` isolated vertices labelled `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            labels: (0..n).map(|v| v.to_string()).collect(),
            edges: Vec::new(),
            adj: vec![Vec::new(); n],
            index: HashMap::new(),
        }
    }

    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut g = Self::new(n);
        for &(u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Build a graph from edges between arbitrary identifiers.
    ///
    /// Vertices are numbered in order of first appearance; extra `isolated`
    /// identifiers are appended afterwards.
    pub fn from_labeled_edges<K, I>(edges: I, isolated: &[K]) -> Result<Self, GraphError>
    where
        K: Hash + Eq + Clone + Display,
        I: IntoIterator<Item = (K, K)>,
    {
        let mut ids: HashMap<K, usize> = HashMap::new();
        let mut g = Self::new(0);
        let mut intern = |g: &mut Graph, k: K| -> usize {
            *ids.entry(k.clone()).or_insert_with(|| g.add_vertex(k.to_string()))
        };
        let mut pending = Vec::new();
        for (a, b) in edges {
            let u = intern(&mut g, a);
            let v = intern(&mut g, b);
            pending.push((u, v));
        }
        for k in isolated {
            intern(&mut g, k.clone());
        }
        for (u, v) in pending {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> usize {
        self.labels.push(label.into());
        self.adj.push(Vec::new());
        self.labels.len() - 1
    }

    /// Insert the undirected edge `{u, v}` stored as `(u, v)`; returns its id.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<usize, GraphError> {
        let n = self.vertex_count();
        for w in [u, v] {
            if w >= n {
                return Err(GraphError::VertexOutOfRange { v: w, n });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { v });
        }
        let key = (u.min(v), u.max(v));
        if self.index.contains_key(&key) {
            return Err(GraphError::ParallelEdge { u, v });
        }
        Ok(self.push_edge_unchecked(u, v))
    }

    /// Insert an edge known to be valid.
    pub(crate) fn push_edge_unchecked(&mut self, u: usize, v: usize) -> usize {
        debug_assert!(u != v && u < self.vertex_count() && v < self.vertex_count());
        debug_assert!(self.edge_between(u, v).is_none());
        let e = self.edges.len();
        self.edges.push((u, v));
        self.adj[u].push((v, e));
        self.adj[v].push((u, e));
        self.index.insert((u.min(v), u.max(v)), e);
        e
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as stored: `edges()[e] = (u, v)` with the insertion direction.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn edge(&self, e: usize) -> (usize, usize) {
        self.edges[e]
    }

    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[v].iter().map(|&(w, _)| w)
    }

    /// `(neighbor, edge id)` pairs around `v` in insertion order.
    pub fn incident(&self, v: usize) -> &[(usize, usize)] {
        &self.adj[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Id of the undirected edge `{u, v}`, in either direction.
    pub fn edge_between(&self, u: usize, v: usize) -> Option<usize> {
        self.index.get(&(u.min(v), u.max(v))).copied()
    }

    pub fn label(&self, v: usize) -> &str {
        &self.labels[v]
    }

    /// Number of connected components (isolated vertices count as one each).
    pub fn component_count(&self) -> usize {
        self.component_ids().1
    }

    /// Component id per vertex plus the number of components.
    pub(crate) fn component_ids(&self) -> (Vec<usize>, usize) {
        let n = self.vertex_count();
        let mut comp = vec![usize::MAX; n];
        let mut count = 0;
        let mut stack = Vec::new();
        for root in 0..n {
            if comp[root] != usize::MAX {
                continue;
            }
            comp[root] = count;
            stack.push(root);
            while let Some(v) = stack.pop() {
                for w in self.neighbors(v) {
                    if comp[w] == usize::MAX {
                        comp[w] = count;
                        stack.push(w);
                    }
                }
            }
            count += 1;
        }
        (comp, count)
    }
}

#[cfg(test)]
mod tests;
