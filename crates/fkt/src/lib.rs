//! Perfect-matching counts of planar graphs via Pfaffian orientations (FKT).
//!
//! Pipeline
//! - `embedding`: rotation system of a planar embedding (`PlanarEmbedder`).
//! - `matching`: face walks, the dual tree avoiding a spanning tree, leaf
//!   elimination into a Pfaffian orientation, and the driver.
//! - `pfaffian`: skew-symmetric adjacency matrix and `|Pf|`.
//!
//! Around it
//! - `graph`: the input container, spanning trees and sample families.
//! - `brute`: exhaustive counter used to cross-check results.
//! - `draw`: optional Tutte layout and SVG output.
//!
//! The computation is single-shot and in-memory; every stage returns
//! `Result<_, FktError>` and failures are never recovered locally.

pub mod api;
pub mod brute;
pub mod cfg;
pub mod draw;
pub mod embedding;
pub mod error;
pub mod graph;
pub mod matching;
pub mod pfaffian;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{FktCfg, PfaffianMethod};
pub use error::{FktError, GraphError};
pub use graph::Graph;
pub use matching::{count_perfect_matchings, run_fkt, run_fkt_with_visualizer, FktRun};
