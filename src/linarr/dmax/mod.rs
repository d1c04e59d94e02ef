//! Maximizing `D`, the sum of edge lengths, under increasingly loose
//! structural constraints: a rooted tree's projective arrangements, a free
//! tree's planar (non-crossing) arrangements, a bipartite graph's coloring-
//! respecting arrangements, and the fully unconstrained optimum (branch and
//! bound, [`bnb`]) — the deepest component of this crate.

pub mod bnb;
pub mod planar;
pub mod projective;

pub use bnb::{branch_and_bound_max_d, branch_and_bound_max_d_one, MaxArrangements};
pub use planar::{planar_max_d, planar_max_d_all_best_roots};
pub use projective::embed_max;

use crate::arrangement::Arrangement;
use crate::graph::{FreeTree, RootedTree};

use super::DmaxAlgorithm;

/// One variant's input to [`maximum_d`]: the projective kernel needs a
/// rooted tree (the caller has already chosen the root); the planar and
/// unconstrained kernels need only the free tree and choose a root (or no
/// root at all) themselves. Mirrors [`crate::linarr::dmin::DminInput`].
#[derive(Clone, Copy, Debug)]
pub enum DmaxInput<'a> {
    /// A tree already rooted by the caller, for [`DmaxAlgorithm::Projective`].
    Rooted(&'a RootedTree),
    /// An unrooted tree, for [`DmaxAlgorithm::Planar`] or
    /// [`DmaxAlgorithm::BranchAndBound`].
    Free(&'a FreeTree),
}

/// Dispatches to whichever unconstrained-tree `DMax` kernel `algorithm`
/// names.
///
/// [`DmaxAlgorithm::Bipartite`] takes a different input shape (an arbitrary
/// bipartite graph plus its 2-coloring, not a tree) and so is not reachable
/// through this entry point — call
/// [`crate::linarr::bipartite::bipartite_optimal_d`] directly instead, the
/// same split [`crate::linarr::dmin::minimum_d`] makes between tree-shaped
/// and non-tree-shaped inputs.
///
/// # Panics
///
/// Debug builds assert that `input` matches what `algorithm` requires:
/// [`DmaxAlgorithm::Projective`] needs [`DmaxInput::Rooted`];
/// [`DmaxAlgorithm::Planar`] and [`DmaxAlgorithm::BranchAndBound`] need
/// [`DmaxInput::Free`]; [`DmaxAlgorithm::Bipartite`] is never reachable here.
#[must_use]
pub fn maximum_d(input: DmaxInput<'_>, algorithm: DmaxAlgorithm) -> (usize, Arrangement) {
    match (algorithm, input) {
        (DmaxAlgorithm::Projective, DmaxInput::Rooted(tree)) => embed_max(tree),
        (DmaxAlgorithm::Planar, DmaxInput::Free(tree)) => planar_max_d(tree),
        (DmaxAlgorithm::BranchAndBound, DmaxInput::Free(tree)) => {
            branch_and_bound_max_d_one(tree)
        }
        (DmaxAlgorithm::Bipartite, _) => {
            debug_assert!(
                false,
                "DmaxAlgorithm::Bipartite requires a graph + coloring; call \
                 linarr::bipartite::bipartite_optimal_d directly"
            );
            (0, Arrangement::identity(0))
        }
        (algorithm, input) => {
            debug_assert!(
                false,
                "{algorithm:?} does not accept this input shape: {input:?}"
            );
            (0, Arrangement::identity(0))
        }
    }
}
