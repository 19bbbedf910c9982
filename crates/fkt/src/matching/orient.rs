//! Pfaffian orientation by leaf elimination on the dual tree.
//!
//! State
//! - Faces: unprocessed or removed. Edges: unoriented or oriented.
//! - Initially every T1 edge points in its stored direction and no face is
//!   removed.
//!
//! Step
//! - Take the lowest-numbered leaf of what remains of T2. Its boundary has
//!   exactly one unoriented edge (the dual edge to its last neighbour).
//!   Orient it so the face has an odd number of clockwise steps, then remove
//!   the leaf.
//!
//! Leaves are kept in an ordered set updated as degrees drop, so each face
//! is touched a constant number of times. The last face is never processed;
//! it plays the role of the outer face.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::dual::{build_dual_tree, DualGraph};
use super::faces::{Face, FaceSet};
use crate::embedding::Embedding;
use crate::error::FktError;
use crate::graph::{spanning_tree, Graph, SpanningTree};

/// Directed version of a graph, built one edge at a time.
#[derive(Clone, Debug)]
pub struct OrientedGraph {
    n: usize,
    edges: Vec<(usize, usize)>,
    forward: Vec<Option<bool>>, // Some(true): stored direction
}

impl OrientedGraph {
    /// All edges unoriented.
    pub fn new(graph: &Graph) -> Self {
        Self {
            n: graph.vertex_count(),
            edges: graph.edges().to_vec(),
            forward: vec![None; graph.edge_count()],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Direct edge `e` as `from → to`. Each edge is oriented at most once.
    pub fn orient(&mut self, e: usize, from: usize, to: usize) -> Result<(), FktError> {
        let (u, v) = self.edges[e];
        let forward = if (from, to) == (u, v) {
            true
        } else if (from, to) == (v, u) {
            false
        } else {
            return Err(FktError::inconsistent(format!(
                "edge {e} does not join {from} and {to}"
            )));
        };
        if self.forward[e].is_some() {
            return Err(FktError::inconsistent(format!("edge {e} oriented twice")));
        }
        self.forward[e] = Some(forward);
        Ok(())
    }

    /// The arc `(tail, head)` of edge `e`, if oriented.
    pub fn arc(&self, e: usize) -> Option<(usize, usize)> {
        let (u, v) = self.edges[e];
        self.forward[e].map(|f| if f { (u, v) } else { (v, u) })
    }

    /// Whether edge `e` is oriented `from → to` (`None` if unoriented).
    pub fn points_along(&self, e: usize, from: usize) -> Option<bool> {
        self.arc(e).map(|(tail, _)| tail == from)
    }

    pub fn is_complete(&self) -> bool {
        self.forward.iter().all(Option::is_some)
    }

    pub fn unoriented_count(&self) -> usize {
        self.forward.iter().filter(|f| f.is_none()).count()
    }

    /// Every oriented arc `(tail, head)`.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.edges.len()).filter_map(|e| self.arc(e))
    }
}

/// Number of boundary steps of `face` whose edge points along the walk.
pub fn clockwise_count(face: &Face, oriented: &OrientedGraph) -> usize {
    face.steps()
        .filter(|&(e, from, _)| oriented.points_along(e, from) == Some(true))
        .count()
}

/// Result of the orientation stage, kept for inspection.
#[derive(Clone, Debug)]
pub struct PfaffianOrientation {
    pub oriented: OrientedGraph,
    pub faces: FaceSet,
    pub tree: SpanningTree,
    /// Faces in the order they were removed from T2.
    pub processed: Vec<usize>,
    /// The face left over at the end (none for edgeless graphs).
    pub root: Option<usize>,
}

/// T1, T2 and leaf elimination for a connected graph and its embedding.
pub fn pfaffian_orientation(
    graph: &Graph,
    embedding: &Embedding,
) -> Result<PfaffianOrientation, FktError> {
    let tree = spanning_tree(graph)?;
    let (dual, faces) = build_dual_tree(graph, embedding, &tree)?;
    debug!(
        faces = faces.len(),
        tree_edges = tree.edges.len(),
        dual_edges = dual.edge_count(),
        "dual_tree_built"
    );
    let mut oriented = OrientedGraph::new(graph);
    for &e in &tree.edges {
        let (u, v) = graph.edge(e);
        oriented.orient(e, u, v)?;
    }
    let (processed, root) = eliminate_leaves(&dual, &faces, &mut oriented)?;
    if !oriented.is_complete() {
        return Err(FktError::inconsistent(format!(
            "{} edges left unoriented after leaf elimination",
            oriented.unoriented_count()
        )));
    }
    debug!(processed = processed.len(), root = ?root, "oriented");
    Ok(PfaffianOrientation {
        oriented,
        faces,
        tree,
        processed,
        root,
    })
}

/// Run the leaf-elimination state machine over `dual`.
///
/// Returns the removal order and the surviving face.
pub fn eliminate_leaves(
    dual: &DualGraph,
    faces: &FaceSet,
    oriented: &mut OrientedGraph,
) -> Result<(Vec<usize>, Option<usize>), FktError> {
    let nf = dual.node_count();
    let mut degree: Vec<usize> = (0..nf).map(|f| dual.degree(f)).collect();
    let mut removed = vec![false; nf];
    let mut leaves: BTreeSet<usize> = (0..nf).filter(|&f| degree[f] == 1).collect();
    let mut processed = Vec::with_capacity(nf.saturating_sub(1));
    let mut remaining = nf;

    while remaining > 1 {
        let Some(leaf) = leaves.pop_first() else {
            return Err(FktError::DisconnectedDualTree { remaining });
        };
        orient_leaf_face(leaf, &faces.faces[leaf], oriented)?;
        removed[leaf] = true;
        remaining -= 1;
        processed.push(leaf);
        for &(g, _) in dual.neighbors(leaf) {
            if removed[g] {
                continue;
            }
            degree[g] -= 1;
            match degree[g] {
                1 => {
                    leaves.insert(g);
                }
                0 => {
                    leaves.remove(&g);
                }
                _ => {}
            }
        }
    }
    let root = (0..nf).find(|&f| !removed[f]);
    Ok((processed, root))
}

fn orient_leaf_face(
    id: usize,
    face: &Face,
    oriented: &mut OrientedGraph,
) -> Result<(), FktError> {
    let mut clockwise = 0;
    let mut open: Vec<(usize, usize, usize)> = Vec::new();
    for (e, from, to) in face.steps() {
        match oriented.points_along(e, from) {
            Some(true) => clockwise += 1,
            Some(false) => {}
            None => {
                if !open.iter().any(|&(o, _, _)| o == e) {
                    open.push((e, from, to));
                }
            }
        }
    }
    let &[(e, from, to)] = open.as_slice() else {
        return Err(FktError::AmbiguousFaceOrientation {
            face: id,
            unoriented: open.len(),
        });
    };
    if clockwise % 2 == 0 {
        oriented.orient(e, from, to)?;
    } else {
        oriented.orient(e, to, from)?;
    }
    trace!(face = id, edge = e, clockwise, "leaf_oriented");
    Ok(())
}
