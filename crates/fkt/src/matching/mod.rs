//! Counting perfect matchings of planar graphs (FKT).
//!
//! Purpose
//! - Wire the stages together: planar embedding, face walks, dual tree T2
//!   avoiding a spanning tree T1, Pfaffian orientation by leaf elimination,
//!   and the Pfaffian of the oriented adjacency matrix.
//!
//! Data flows strictly forward; each stage consumes the previous one's
//! output and nothing is revisited. Every failure is fatal for the input.
//!
//! Layout
//! - `faces.rs` (half-edge walks), `dual.rs` (T2), `orient.rs` (leaf
//!   elimination); this file holds the driver.

mod dual;
mod faces;
mod orient;

use tracing::debug;

pub use dual::{build_dual_tree, DualGraph};
pub use faces::{extract_faces, Face, FaceSet};
pub use orient::{
    clockwise_count, eliminate_leaves, pfaffian_orientation, OrientedGraph, PfaffianOrientation,
};

use crate::cfg::FktCfg;
use crate::draw::{tutte_layout, Visualizer};
use crate::embedding::{Embedding, PathAddition, PlanarEmbedder};
use crate::error::FktError;
use crate::graph::Graph;
use crate::pfaffian::{pfaffian_magnitude, SkewAdjacencyMatrix};

/// Everything the pipeline produced for one graph.
#[derive(Clone, Debug)]
pub struct FktRun {
    /// Number of perfect matchings.
    pub count: u128,
    pub embedding: Embedding,
    pub orientation: PfaffianOrientation,
    pub matrix: SkewAdjacencyMatrix,
}

/// Run the full pipeline with an explicit embedder and configuration.
pub fn run_fkt(
    graph: &Graph,
    embedder: &dyn PlanarEmbedder,
    cfg: FktCfg,
) -> Result<FktRun, FktError> {
    let components = graph.component_count();
    if components > 1 {
        return Err(FktError::NotConnected { components });
    }
    let embedding = embedder.embed(graph)?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        half_edges = embedding.half_edge_count(),
        "embedded"
    );
    let orientation = pfaffian_orientation(graph, &embedding)?;
    let matrix = SkewAdjacencyMatrix::from_oriented(&orientation.oriented);
    let count = pfaffian_magnitude(&matrix, cfg)?;
    Ok(FktRun {
        count,
        embedding,
        orientation,
        matrix,
    })
}

/// Same as [`run_fkt`], then draw the oriented graph once.
pub fn run_fkt_with_visualizer(
    graph: &Graph,
    embedder: &dyn PlanarEmbedder,
    cfg: FktCfg,
    visualizer: &mut dyn Visualizer,
) -> Result<FktRun, FktError> {
    let run = run_fkt(graph, embedder, cfg)?;
    let layout = tutte_layout(graph, &run.orientation.faces.faces);
    visualizer.draw_oriented(graph, &layout, &run.orientation.oriented);
    Ok(run)
}

/// Number of perfect matchings of a connected planar graph (defaults:
/// path-addition embedding, exact Pfaffian).
pub fn count_perfect_matchings(graph: &Graph) -> Result<u128, FktError> {
    run_fkt(graph, &PathAddition, FktCfg::default()).map(|run| run.count)
}
