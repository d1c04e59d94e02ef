//! Convenience re-export of the types most consumers need.
//!
//! A single `use linarr::prelude::*` pulls in the arrangement type, the
//! graph marker types, and the most commonly used adaptors without reaching
//! into submodules.

pub use crate::arrangement::Arrangement;
pub use crate::graph::{Directed, DiGraph, EdgeType, FreeTree, RootedTree, UnGraph, Undirected};
pub use crate::{Position, Vertex};
