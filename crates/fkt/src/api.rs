//! Curated re-exports for callers that want one import line.

// Graphs and sample families
pub use crate::graph::generators::{
    barbell, complete, cycle, grid, lollipop, path, random_planar, sample_graphs, star, wheel,
};
pub use crate::graph::{spanning_tree, Graph, SpanningTree};
// Embeddings
pub use crate::embedding::{Embedding, PathAddition, PlanarEmbedder, StraightLine};
// Pipeline stages
pub use crate::matching::{
    build_dual_tree, clockwise_count, count_perfect_matchings, eliminate_leaves, extract_faces,
    pfaffian_orientation, run_fkt, run_fkt_with_visualizer, DualGraph, Face, FaceSet, FktRun,
    OrientedGraph, PfaffianOrientation,
};
pub use crate::pfaffian::{
    determinant_lu, pfaffian_exact, pfaffian_magnitude, SkewAdjacencyMatrix,
};
// Oracle, drawing, configuration
pub use crate::brute::count_perfect_matchings_brute;
pub use crate::cfg::{FktCfg, PfaffianMethod};
pub use crate::draw::{circle_layout, tutte_layout, SvgVisualizer, Visualizer};
pub use crate::error::{FktError, GraphError};
