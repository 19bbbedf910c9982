//! Errors surfaced by graph construction and the FKT pipeline.
//!
//! Every failure is fatal for the current input: the matching count only
//! exists for a fully oriented graph, so stages never return partial results.

use std::fmt;

/// Rejected edits to a [`crate::graph::Graph`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Edge `(v, v)`.
    SelfLoop { v: usize },
    /// The undirected edge `{u, v}` already exists.
    ParallelEdge { u: usize, v: usize },
    /// Vertex index `v` is not in `0..n`.
    VertexOutOfRange { v: usize, n: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::SelfLoop { v } => write!(f, "self-loop at vertex {v} is not allowed"),
            GraphError::ParallelEdge { u, v } => {
                write!(f, "edge {{{u}, {v}}} already present (simple graphs only)")
            }
            GraphError::VertexOutOfRange { v, n } => {
                write!(f, "vertex {v} out of range for graph with {n} vertices")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Errors raised while counting perfect matchings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FktError {
    /// The input graph has more than one connected component.
    NotConnected { components: usize },
    /// The input graph admits no planar embedding.
    NotPlanar,
    /// The rotation system is inconsistent (a face walk does not close, or
    /// the face count violates Euler's formula).
    MalformedEmbedding { reason: String },
    /// Leaf processing found no leaf while faces were still unprocessed.
    DisconnectedDualTree { remaining: usize },
    /// A processed face had `unoriented != 1` undirected boundary edges left.
    AmbiguousFaceOrientation { face: usize, unoriented: usize },
    /// `|Pf|` of a `dim × dim` matrix does not fit the method: `u128` when
    /// exact, `2^53` for the float path.
    ArithmeticOverflow { dim: usize },
    /// A numeric or structural cross-check failed.
    InternalConsistency { reason: String },
}

impl FktError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedEmbedding {
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InternalConsistency {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FktError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FktError::NotConnected { components } => {
                write!(f, "graph is not connected ({components} components)")
            }
            FktError::NotPlanar => write!(f, "graph is not planar"),
            FktError::MalformedEmbedding { reason } => write!(f, "malformed embedding: {reason}"),
            FktError::DisconnectedDualTree { remaining } => write!(
                f,
                "dual tree has no leaf while {remaining} faces remain unprocessed"
            ),
            FktError::AmbiguousFaceOrientation { face, unoriented } => write!(
                f,
                "face {face} has {unoriented} unoriented boundary edges (expected exactly 1)"
            ),
            FktError::ArithmeticOverflow { dim } => write!(
                f,
                "|Pf| of a {dim}x{dim} matrix exceeds the range of the chosen arithmetic"
            ),
            FktError::InternalConsistency { reason } => {
                write!(f, "internal consistency check failed: {reason}")
            }
        }
    }
}

impl std::error::Error for FktError {}
