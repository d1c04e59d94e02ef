//! The narrow error surface of the crate.
//!
//! The algorithmic core never returns a `Result`: precondition violations
//! are programming errors, checked with `debug_assert!` and otherwise left
//! to the caller. The one place an error type is useful is at the edge —
//! building one of the minimal adjacency-list containers in
//! [`crate::graph`] from raw edges.

use alloc::string::String;
use core::fmt;

/// An error building or mutating one of this crate's minimal graph
/// containers.
///
/// This is not used by the analysis algorithms themselves (they are total on
/// well-formed input) — only by the constructors in [`crate::graph`] that
/// validate input before it ever reaches an algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// An edge referenced a vertex outside `0..n`.
    VertexOutOfRange {
        /// The vertex id that was out of range.
        vertex: usize,
        /// The number of vertices in the graph.
        num_vertices: usize,
    },
    /// An edge had identical endpoints; self-loops are not representable.
    SelfLoop {
        /// The vertex with a self-loop.
        vertex: usize,
    },
    /// A duplicate edge was inserted into a simple graph.
    DuplicateEdge {
        /// Source endpoint of the duplicate edge.
        source: usize,
        /// Target endpoint of the duplicate edge.
        target: usize,
    },
    /// A free-tree constructor was given a number of edges different from
    /// `n - 1`, or the edges did not form a connected acyclic graph.
    NotATree {
        /// Human-readable detail.
        reason: String,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange {
                vertex,
                num_vertices,
            } => write!(
                f,
                "vertex {vertex} is out of range for a graph with {num_vertices} vertices"
            ),
            GraphError::SelfLoop { vertex } => {
                write!(f, "self-loop at vertex {vertex} is not allowed")
            }
            GraphError::DuplicateEdge { source, target } => {
                write!(f, "duplicate edge ({source}, {target})")
            }
            GraphError::NotATree { reason } => write!(f, "not a tree: {reason}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GraphError {}
