//! Planar embedding by path addition (Demoucron–Malgrange–Pertuiset).
//!
//! Algorithm
//! - Split the graph into biconnected blocks. Bridges embed trivially.
//! - In a 2-connected block, start from any cycle (two faces) and repeatedly
//!   embed a path of some fragment into an admissible face, i.e. a face that
//!   contains all of the fragment's attachment vertices. A fragment with no
//!   admissible face proves the block non-planar. Fragments with a single
//!   admissible face are served first.
//! - Faces of the finished block give each vertex's successor map, hence its
//!   rotation. Block rotations are concatenated at cut vertices, which keeps
//!   every block inside one corner of the others.
//!
//! Complexity is O(V·E) per block: fragments are recomputed after every
//! path. Adequate for the graph sizes this crate targets.

use std::collections::HashMap;

use tracing::trace;

use super::blocks::biconnected_blocks;
use super::{Embedding, PlanarEmbedder};
use crate::error::FktError;
use crate::graph::Graph;

const NONE: usize = usize::MAX;

/// Embedder that needs nothing but the graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathAddition;

impl PlanarEmbedder for PathAddition {
    fn embed(&self, graph: &Graph) -> Result<Embedding, FktError> {
        let (n, m) = (graph.vertex_count(), graph.edge_count());
        if n >= 3 && m > 3 * n - 6 {
            return Err(FktError::NotPlanar);
        }
        let mut rotation: Vec<Vec<usize>> = vec![Vec::new(); n];
        for block_edges in biconnected_blocks(graph) {
            let block = Block::new(graph, &block_edges);
            let local = if block.edges.len() == 1 {
                vec![vec![1], vec![0]]
            } else {
                PathAdder::new(&block)?.run()?
            };
            for (lv, rot) in local.into_iter().enumerate() {
                rotation[block.verts[lv]].extend(rot.into_iter().map(|lw| block.verts[lw]));
            }
        }
        Embedding::from_rotations(graph, rotation)
    }
}

/// One block with local vertex numbering.
struct Block {
    verts: Vec<usize>,              // local -> global
    adj: Vec<Vec<(usize, usize)>>,  // local (neighbour, local edge)
    edges: Vec<(usize, usize)>,
}

impl Block {
    fn new(graph: &Graph, block_edges: &[usize]) -> Self {
        let mut local: HashMap<usize, usize> = HashMap::new();
        let mut verts = Vec::new();
        let mut edges = Vec::with_capacity(block_edges.len());
        for &e in block_edges {
            let (u, v) = graph.edge(e);
            let mut id = |x: usize| {
                *local.entry(x).or_insert_with(|| {
                    verts.push(x);
                    verts.len() - 1
                })
            };
            let lu = id(u);
            let lv = id(v);
            edges.push((lu, lv));
        }
        let mut adj = vec![Vec::new(); verts.len()];
        for (le, &(a, b)) in edges.iter().enumerate() {
            adj[a].push((b, le));
            adj[b].push((a, le));
        }
        Self { verts, adj, edges }
    }

    fn edge_between(&self, a: usize, b: usize) -> Option<usize> {
        self.adj[a].iter().find(|&&(w, _)| w == b).map(|&(_, e)| e)
    }
}

/// A piece of the block not yet embedded.
struct Fragment {
    attachments: Vec<usize>,
    /// Vertices outside the embedded subgraph; empty for a chord.
    inner: Vec<usize>,
}

/// Path-addition state for one 2-connected block.
struct PathAdder<'b> {
    block: &'b Block,
    vert_in: Vec<bool>,
    edge_in: Vec<bool>,
    embedded_edges: usize,
    faces: Vec<Vec<usize>>,
}

impl<'b> PathAdder<'b> {
    fn new(block: &'b Block) -> Result<Self, FktError> {
        let k = block.verts.len();
        let mut this = Self {
            block,
            vert_in: vec![false; k],
            edge_in: vec![false; block.edges.len()],
            embedded_edges: 0,
            faces: Vec::new(),
        };
        let cycle = this.initial_cycle()?;
        this.mark_path(&cycle);
        let (first, last) = (cycle[0], cycle[cycle.len() - 1]);
        let closing = block
            .edge_between(last, first)
            .ok_or_else(|| FktError::inconsistent("initial cycle does not close"))?;
        this.edge_in[closing] = true;
        this.embedded_edges += 1;
        let mut reversed = cycle.clone();
        reversed.reverse();
        this.faces = vec![cycle, reversed];
        Ok(this)
    }

    /// Cycle through local edge 0: a shortest path that avoids it.
    fn initial_cycle(&self) -> Result<Vec<usize>, FktError> {
        let (a, b) = self.block.edges[0];
        let mut parent = vec![NONE; self.block.verts.len()];
        parent[b] = b;
        let mut queue = std::collections::VecDeque::from([b]);
        while let Some(x) = queue.pop_front() {
            for &(y, e) in &self.block.adj[x] {
                if e == 0 || parent[y] != NONE {
                    continue;
                }
                parent[y] = x;
                if y == a {
                    let mut cycle = vec![a];
                    let mut cur = a;
                    while cur != b {
                        cur = parent[cur];
                        cycle.push(cur);
                    }
                    return Ok(cycle);
                }
                queue.push_back(y);
            }
        }
        Err(FktError::inconsistent(
            "block without a cycle through its first edge",
        ))
    }

    fn mark_path(&mut self, path: &[usize]) {
        for &v in path {
            self.vert_in[v] = true;
        }
        for pair in path.windows(2) {
            if let Some(e) = self.block.edge_between(pair[0], pair[1]) {
                if !self.edge_in[e] {
                    self.edge_in[e] = true;
                    self.embedded_edges += 1;
                }
            }
        }
    }

    fn run(mut self) -> Result<Vec<Vec<usize>>, FktError> {
        while self.embedded_edges < self.block.edges.len() {
            let fragments = self.fragments();
            let (frag, face) = self.choose(&fragments)?;
            let path = self.fragment_path(&fragments[frag])?;
            trace!(face, path_len = path.len(), "embed_path");
            self.split_face(face, &path)?;
            self.mark_path(&path);
        }
        self.rotations()
    }

    fn fragments(&self) -> Vec<Fragment> {
        let k = self.block.verts.len();
        let mut out = Vec::new();
        for (e, &(a, b)) in self.block.edges.iter().enumerate() {
            if !self.edge_in[e] && self.vert_in[a] && self.vert_in[b] {
                out.push(Fragment {
                    attachments: vec![a, b],
                    inner: Vec::new(),
                });
            }
        }
        let mut seen = vec![false; k];
        let mut stamp = vec![NONE; k];
        for root in 0..k {
            if self.vert_in[root] || seen[root] {
                continue;
            }
            let frag_id = out.len();
            let mut inner = vec![root];
            let mut attachments = Vec::new();
            seen[root] = true;
            let mut i = 0;
            while i < inner.len() {
                let x = inner[i];
                i += 1;
                for &(y, _) in &self.block.adj[x] {
                    if self.vert_in[y] {
                        if stamp[y] != frag_id {
                            stamp[y] = frag_id;
                            attachments.push(y);
                        }
                    } else if !seen[y] {
                        seen[y] = true;
                        inner.push(y);
                    }
                }
            }
            out.push(Fragment { attachments, inner });
        }
        out
    }

    /// Pick a fragment and an admissible face for it.
    fn choose(&self, fragments: &[Fragment]) -> Result<(usize, usize), FktError> {
        let k = self.block.verts.len();
        let members: Vec<Vec<bool>> = self
            .faces
            .iter()
            .map(|f| {
                let mut mask = vec![false; k];
                for &v in f {
                    mask[v] = true;
                }
                mask
            })
            .collect();
        let mut forced = None;
        let mut fallback = None;
        for (i, frag) in fragments.iter().enumerate() {
            let mut admissible = members
                .iter()
                .enumerate()
                .filter(|(_, mask)| frag.attachments.iter().all(|&a| mask[a]))
                .map(|(fi, _)| fi);
            let Some(first) = admissible.next() else {
                return Err(FktError::NotPlanar);
            };
            if admissible.next().is_none() {
                forced.get_or_insert((i, first));
            } else {
                fallback.get_or_insert((i, first));
            }
        }
        forced
            .or(fallback)
            .ok_or_else(|| FktError::inconsistent("no fragment left to embed"))
    }

    /// A path through the fragment joining two distinct attachments.
    fn fragment_path(&self, frag: &Fragment) -> Result<Vec<usize>, FktError> {
        if frag.inner.is_empty() {
            return Ok(frag.attachments.clone());
        }
        let [a, b] = match frag.attachments.as_slice() {
            [a, b, ..] => [*a, *b],
            _ => {
                return Err(FktError::inconsistent(
                    "fragment with fewer than two attachments in a 2-connected block",
                ))
            }
        };
        let k = self.block.verts.len();
        let mut in_frag = vec![false; k];
        for &x in &frag.inner {
            in_frag[x] = true;
        }
        let mut parent = vec![NONE; k];
        let mut queue = std::collections::VecDeque::new();
        for &(x, _) in &self.block.adj[a] {
            if in_frag[x] {
                parent[x] = a;
                queue.push_back(x);
            }
        }
        while let Some(x) = queue.pop_front() {
            if self.block.adj[x].iter().any(|&(y, _)| y == b) {
                let mut path = vec![b, x];
                let mut cur = x;
                while parent[cur] != a {
                    cur = parent[cur];
                    path.push(cur);
                }
                path.push(a);
                path.reverse();
                return Ok(path);
            }
            for &(y, _) in &self.block.adj[x] {
                if in_frag[y] && parent[y] == NONE {
                    parent[y] = x;
                    queue.push_back(y);
                }
            }
        }
        Err(FktError::inconsistent("fragment does not connect its attachments"))
    }

    /// Replace `faces[fi]` by the two faces the path `a ~ b` cuts it into.
    fn split_face(&mut self, fi: usize, path: &[usize]) -> Result<(), FktError> {
        let face = &self.faces[fi];
        let (a, b) = (path[0], path[path.len() - 1]);
        let pos = |x: usize| {
            face.iter()
                .position(|&v| v == x)
                .ok_or_else(|| FktError::inconsistent("attachment missing from chosen face"))
        };
        let (ia, ib) = (pos(a)?, pos(b)?);
        let m = face.len();
        let arc = |from: usize, to: usize| {
            let mut out = Vec::new();
            let mut i = from;
            loop {
                out.push(face[i]);
                if i == to {
                    break;
                }
                i = (i + 1) % m;
            }
            out
        };
        let interior = &path[1..path.len() - 1];
        // a..b along the face, then back to a against the path.
        let mut first = arc(ia, ib);
        first.extend(interior.iter().rev());
        // b..a along the face, then forward along the path.
        let mut second = arc(ib, ia);
        second.extend(interior.iter());
        self.faces[fi] = first;
        self.faces.push(second);
        Ok(())
    }

    /// Rotation per local vertex from the successor relation of the faces.
    fn rotations(&self) -> Result<Vec<Vec<usize>>, FktError> {
        let mut succ: HashMap<(usize, usize), usize> = HashMap::new();
        for face in &self.faces {
            let m = face.len();
            for i in 0..m {
                let prev = face[(i + m - 1) % m];
                succ.insert((face[i], prev), face[(i + 1) % m]);
            }
        }
        self.block
            .adj
            .iter()
            .enumerate()
            .map(|(v, nbrs)| {
                let start = nbrs[0].0;
                let mut rot = vec![start];
                let mut cur = start;
                loop {
                    cur = *succ.get(&(v, cur)).ok_or_else(|| {
                        FktError::malformed("face walk leaves a corner undefined")
                    })?;
                    if cur == start {
                        break;
                    }
                    if rot.len() >= nbrs.len() {
                        return Err(FktError::malformed("rotation does not close"));
                    }
                    rot.push(cur);
                }
                if rot.len() != nbrs.len() {
                    return Err(FktError::malformed("rotation misses a neighbour"));
                }
                Ok(rot)
            })
            .collect()
    }
}
