//! Spanning tree T1 (unit-weight Kruskal over edges in insertion order).

use super::Graph;
use crate::error::FktError;

/// A spanning tree given as a per-edge membership mask.
#[derive(Clone, Debug)]
pub struct SpanningTree {
    pub in_tree: Vec<bool>,
    /// Tree edge ids in the order Kruskal accepted them.
    pub edges: Vec<usize>,
}

impl SpanningTree {
    pub fn contains(&self, e: usize) -> bool {
        self.in_tree[e]
    }
}

/// Disjoint-set forest with path halving and union by size.
struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }
}

/// Spanning tree of a connected graph.
///
/// All weights are equal, so Kruskal reduces to scanning edges in insertion
/// order and keeping those that join two components. A result with fewer than
/// `n - 1` edges means the graph is disconnected.
pub fn spanning_tree(graph: &Graph) -> Result<SpanningTree, FktError> {
    let n = graph.vertex_count();
    let mut uf = UnionFind::new(n);
    let mut in_tree = vec![false; graph.edge_count()];
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for (e, &(u, v)) in graph.edges().iter().enumerate() {
        if uf.union(u, v) {
            in_tree[e] = true;
            edges.push(e);
        }
    }
    if n > 0 && edges.len() + 1 < n {
        return Err(FktError::NotConnected {
            components: n - edges.len(),
        });
    }
    Ok(SpanningTree { in_tree, edges })
}
