//! Minimizing `D`, the sum of edge lengths, under increasingly loose
//! structural constraints: a rooted tree's projective arrangements, a free
//! tree's planar (non-crossing) arrangements, and finally the unconstrained
//! optimum — which, for trees, always coincides with the planar one.

pub mod planar;
pub mod projective;
pub mod unconstrained;

pub use planar::planar_min_d;
pub use projective::embed_min;
pub use unconstrained::{minimum_d as unconstrained_minimum_d, UnconstrainedAlgorithm};

use crate::arrangement::Arrangement;
use crate::graph::{FreeTree, RootedTree};

use super::DminAlgorithm;

/// One vertex's input to [`minimum_d`]: the projective kernel needs a
/// rooted tree (the caller has already chosen the root); the planar and
/// unconstrained kernels need only the free tree and choose a root
/// themselves.
#[derive(Clone, Copy, Debug)]
pub enum DminInput<'a> {
    /// A tree already rooted by the caller, for [`DminAlgorithm::Projective`].
    Rooted(&'a RootedTree),
    /// An unrooted tree, for [`DminAlgorithm::Planar`] or
    /// [`DminAlgorithm::Unconstrained`].
    Free(&'a FreeTree),
}

/// Dispatches to whichever `Dmin` kernel `algorithm` names.
///
/// # Panics
///
/// Debug builds assert that `input` matches what `algorithm` requires:
/// [`DminAlgorithm::Projective`] needs [`DminInput::Rooted`];
/// [`DminAlgorithm::Planar`] and [`DminAlgorithm::Unconstrained`] need
/// [`DminInput::Free`]. [`DminAlgorithm::Unconstrained`] runs
/// [`UnconstrainedAlgorithm::Shiloach`] — call
/// [`unconstrained::minimum_d`] directly to pick [`UnconstrainedAlgorithm::Chung`]
/// instead.
#[must_use]
pub fn minimum_d(input: DminInput<'_>, algorithm: DminAlgorithm) -> (usize, Arrangement) {
    match (algorithm, input) {
        (DminAlgorithm::Projective, DminInput::Rooted(tree)) => embed_min(tree),
        (DminAlgorithm::Planar, DminInput::Free(tree)) => planar_min_d(tree),
        (DminAlgorithm::Unconstrained, DminInput::Free(tree)) => {
            unconstrained::minimum_d(tree, UnconstrainedAlgorithm::Shiloach)
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
