//! **linarr** computes structural metrics and optimal orderings on syntactic
//! dependency trees and general graphs.
//!
//! A *linear arrangement* is a bijection between a graph's vertex set and the
//! integer positions `0..n`. Given a graph (or tree) and an arrangement, this
//! crate computes:
//!
//! - `C`, the number of edge crossings ([`linarr::crossings`]),
//! - `D`, the sum of edge lengths ([`linarr::dsum`]),
//!
//! and it searches for arrangements that minimize or maximize `D` under one
//! of several structural constraints: unconstrained, bipartite, planar, or
//! projective ([`linarr::bipartite`], [`linarr::dmin`], [`linarr::dmax`]).
//!
//! # Example
//!
//! ```
//! use linarr::graph::FreeTree;
//! use linarr::linarr::dsum;
//!
//! // star graph: center 0, leaves 1..=4
//! let mut tree = FreeTree::new(5);
//! tree.add_edge(0, 1);
//! tree.add_edge(0, 2);
//! tree.add_edge(0, 3);
//! tree.add_edge(0, 4);
//!
//! // identity arrangement
//! let arr = linarr::arrangement::Arrangement::identity(5);
//! let arr_ref = linarr::arrangement::ArrangementRef::Explicit(&arr);
//! assert_eq!(dsum::d(&tree, arr_ref), 1 + 2 + 3 + 4);
//! ```
//!
//! The crate is organized leaves-first: sorting kernels and traversals sit
//! below the arrangement primitives, which sit below the crossing counters
//! and `D`, which sit below the bipartite/projective/planar optimizers and
//! the unconstrained `Dmin`/`DMax` solvers, with the branch-and-bound `DMax`
//! solver ([`linarr::dmax::bnb`]) as the deepest and largest component.
//!
//! This crate never suspends, yields, or returns an error from the
//! algorithmic core: precondition violations (non-tree input to a tree
//! algorithm, a missing 2-coloring, …) are `debug_assert!`-checked rather
//! than surfaced as `Result`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod arrangement;
pub mod bibliography;
pub mod error;
pub mod graph;
pub mod linarr;
pub mod prelude;
pub mod properties;
pub mod sorting;
pub mod visit;

pub use crate::arrangement::Arrangement;
pub use crate::graph::{Directed, EdgeType, Undirected};

/// A vertex identifier: an opaque index into `0..n`.
///
/// Kept as a distinct nominal type from [`Position`] so the two cannot be
/// accidentally swapped at API boundaries.
pub type Vertex = usize;

/// A position in a linear arrangement: an opaque index into `0..n`.
pub type Position = usize;
