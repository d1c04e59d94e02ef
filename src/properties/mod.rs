//! Graph/tree properties consumed by the optimizers: bipartite coloring,
//! centroid, branchless-path decomposition, automorphism orbits.
//!
//! Each of these is exposed as its own independently testable query rather
//! than folded into the optimizer that happens to need it first, since
//! several optimizers share the same precomputed property as an input.

pub mod branchless_path;
pub mod centroid;
pub mod coloring;
pub mod orbits;

pub use branchless_path::{branchless_paths, BranchlessPath, PathKind};
pub use centroid::centroidal_vertices;
pub use coloring::{bipartite_coloring, Color};
pub use orbits::vertex_orbits;
