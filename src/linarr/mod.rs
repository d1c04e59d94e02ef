//! Arrangement-level analysis: edge crossings, sum of edge lengths, and the
//! optimizers that search for the best arrangement under a given structural
//! constraint.
//!
//! Organized leaves-first: [`crossings`] and [`dsum`] are pure measurements
//! of a *given* arrangement; [`bipartite`], [`dmin`] and [`dmax`] search for
//! one, each under a different constraint on which arrangements are
//! admissible.

pub mod bipartite;
pub mod crossings;
pub mod dmax;
pub mod dmin;
pub mod dsum;

/// Which kernel [`dmin::minimum_d`] dispatches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DminAlgorithm {
    /// Best projective arrangement of a tree already rooted by the caller.
    Projective,
    /// Best planar (root unconstrained) arrangement of a free tree: tries
    /// every centroidal root and keeps the best projective solution.
    Planar,
    /// Shiloach's unconstrained-tree algorithm, with Esteban & Ferrer-i-
    /// Cancho's correction applied.
    Unconstrained,
}

/// Which kernel [`dmax::maximum_d`] dispatches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DmaxAlgorithm {
    /// Best projective arrangement of a tree already rooted by the caller.
    Projective,
    /// Best planar (root unconstrained) arrangement of a free tree: tries
    /// every root and keeps the best projective solution, since (unlike
    /// `Dmin`) the planar maximum is not attained only at a centroid.
    Planar,
    /// Best arrangement of a bipartite graph consistent with its 2-coloring.
    Bipartite,
    /// Exhaustive branch-and-bound search, unconstrained.
    BranchAndBound,
}
