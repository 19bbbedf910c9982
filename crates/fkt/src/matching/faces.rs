//! Face extraction by half-edge walks.
//!
//! Every half-edge lies on exactly one face walk, so the walks partition the
//! half-edges and each undirected edge is seen twice, once per direction.
//! Walk direction is the same for every face; a boundary step `(u, v)` is
//! "clockwise" for its face when the edge is oriented `u → v`.

use tracing::debug;

use crate::embedding::Embedding;
use crate::error::FktError;
use crate::graph::Graph;

const UNVISITED: usize = usize::MAX;

/// Boundary walk of one face.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Face {
    /// `vertices[i] → vertices[i + 1]` (cyclically) is the i-th step.
    pub vertices: Vec<usize>,
    /// Undirected edge id of the i-th step.
    pub edges: Vec<usize>,
}

impl Face {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// `(edge, from, to)` for each boundary step, in walk order.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let m = self.vertices.len();
        (0..m).map(move |i| (self.edges[i], self.vertices[i], self.vertices[(i + 1) % m]))
    }
}

/// All faces of an embedding plus the owning face of every half-edge.
#[derive(Clone, Debug, Default)]
pub struct FaceSet {
    pub faces: Vec<Face>,
    pub face_of: Vec<usize>,
}

impl FaceSet {
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Walk every face of `embedding`.
///
/// Half-edges are visited in edge order (stored direction first), so face
/// numbering is deterministic. The face count is checked against Euler's
/// formula per component; a mismatch means the rotation system describes a
/// surface of positive genus.
pub fn extract_faces(graph: &Graph, embedding: &Embedding) -> Result<FaceSet, FktError> {
    let total = embedding.half_edge_count();
    let mut face_of = vec![UNVISITED; total];
    let mut faces = Vec::new();

    for e in 0..graph.edge_count() {
        for start in embedding.half_edges_of(e) {
            if face_of[start] != UNVISITED {
                continue;
            }
            let id = faces.len();
            let mut face = Face::default();
            let mut h = start;
            loop {
                if face_of[h] != UNVISITED || face.len() > total {
                    return Err(FktError::malformed(format!(
                        "face walk from half-edge {start} does not close"
                    )));
                }
                face_of[h] = id;
                face.vertices.push(embedding.tail(h));
                face.edges.push(embedding.edge_of(h));
                h = embedding.next(h);
                if h == start {
                    break;
                }
            }
            faces.push(face);
        }
    }

    let expected = euler_face_count(graph);
    if faces.len() != expected {
        return Err(FktError::malformed(format!(
            "{} faces but Euler's formula requires {expected} for a planar embedding",
            faces.len()
        )));
    }
    debug!(faces = faces.len(), "faces_extracted");
    Ok(FaceSet { faces, face_of })
}

/// `E - V + 2C` over components that have at least one edge.
fn euler_face_count(graph: &Graph) -> usize {
    let (comp, count) = graph.component_ids();
    let mut has_edge = vec![false; count];
    let mut verts = 0;
    for v in 0..graph.vertex_count() {
        if graph.degree(v) > 0 {
            has_edge[comp[v]] = true;
            verts += 1;
        }
    }
    let comps = has_edge.iter().filter(|&&b| b).count();
    (graph.edge_count() + 2 * comps).saturating_sub(verts)
}
