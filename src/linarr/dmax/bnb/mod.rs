//! Branch-and-bound unconstrained `DMax` on free trees: spec §4.9, the
//! deepest component of this crate.
//!
//! [`state`] tracks the arrangement under construction and the incremental
//! bookkeeping (`border`, `remaining_internal_edges`, `d_so_far`) that lets
//! [`search`] extend or retract one placement in `O(deg(v))` and compute an
//! upper bound on the best completion in `O(n)`. This module is the search
//! driver on top of that state: candidate selection, the completion
//! shortcuts of spec §4.9 point 4, and [`MaxArrangements`], the result
//! container of spec's `max_arrs`.
//!
//! Two simplifications relative to the C++ original, both disclosed in
//! `DESIGN.md`:
//!
//! - No explicit level-value propagation along branchless paths (spec §4.9
//!   points 1-2, the `predicted_lev`/`predicted_origin` machinery). Because
//!   vertices are always placed at the next free position, `lev[v]` is a
//!   value fixed the instant `v` is placed rather than a quantity a
//!   separate pass has to predict ahead of time, so propagation collapses
//!   into the `O(n)` upper bound recomputed at every node instead of an
//!   incremental per-path projection. This prunes less aggressively but
//!   never prunes incorrectly.
//! - Orbit-based symmetry pruning (spec §4.9 point 3) is applied only to
//!   the very first placement: every vertex in the same automorphism orbit
//!   is an equally good choice for position 0 (relabeling the whole tree by
//!   the automorphism maps one resulting search subtree onto the other, so
//!   both reach the same set of attainable `D` values), so only one
//!   representative per orbit is tried there. Deeper ties within a partial
//!   arrangement's remaining automorphisms are left to the upper bound and
//!   the independent-set shortcut to absorb instead of a second symmetry
//!   check, trading a larger search tree for a much simpler invariant.

mod state;

use alloc::vec::Vec;

use crate::arrangement::Arrangement;
use crate::bibliography;
use crate::graph::FreeTree;
use crate::properties::vertex_orbits;
use crate::Vertex;

use state::BnBState;

/// The result of [`branch_and_bound_max_d`]: the maximum `D` attainable by
/// any arrangement of the tree, together with every arrangement that
/// attains it.
///
/// Mirrors spec §4.9's `max_arrs`: a multiset keyed by `D` that discards
/// everything and restarts on a strictly better value, appends on a tie,
/// and discards on a worse one. Because the search only ever needs to
/// remember arrangements at the *current* best value, that multiset
/// degenerates to a single `(value, Vec<Arrangement>)` pair — no ordered
/// index over multiple distinct keys is ever live at once, so the AVL-tree
/// structure spec §4.9 describes is unnecessary here.
#[derive(Clone, Debug)]
pub struct MaxArrangements {
    /// The maximum `D` found.
    pub value: usize,
    /// Every arrangement attaining `value` that the search encountered.
    /// Non-empty for `n >= 1`. See the module docs for why this is not
    /// necessarily the *complete* symmetry closure of attaining
    /// arrangements: the top-level orbit-representative pruning returns one
    /// arrangement per first-placement orbit, not every automorphism's
    /// image of it.
    pub arrangements: Vec<Arrangement>,
}

impl MaxArrangements {
    fn new(n: usize) -> Self {
        MaxArrangements {
            value: 0,
            arrangements: alloc::vec![Arrangement::identity(n)],
        }
    }

    fn record(&mut self, value: usize, arr: Arrangement) {
        use core::cmp::Ordering;
        match value.cmp(&self.value) {
            Ordering::Greater => {
                self.value = value;
                self.arrangements.clear();
                self.arrangements.push(arr);
            }
            Ordering::Equal => self.arrangements.push(arr),
            Ordering::Less => {}
        }
    }
}

struct Search<'a> {
    tree: &'a FreeTree,
    orbits: Vec<usize>,
    best: MaxArrangements,
}

impl<'a> Search<'a> {
    fn candidates(&self, state: &BnBState<'a>) -> Vec<Vertex> {
        if state.num_placed() == 0 {
            let num_orbits = self.orbits.iter().copied().max().map_or(0, |m| m + 1);
            let mut seen = alloc::vec![false; num_orbits];
            let mut out = Vec::new();
            for v in 0..self.tree.num_vertices() {
                let o = self.orbits[v];
                if !seen[o] {
                    seen[o] = true;
                    out.push(v);
                }
            }
            out
        } else {
            debug_assert!(
                !state.border.is_empty(),
                "a connected tree's frontier is only empty before the first \
                 placement or once every vertex is placed"
            );
            state.border.iter().copied().collect()
        }
    }

    fn run(&mut self, state: &mut BnBState<'a>) {
        if state.is_complete() {
            let arr = state.to_arrangement(&[]);
            self.best.record(state.d_so_far, arr);
            return;
        }
        if state.remaining_internal_edges == 0 {
            let (value, tail) = state.finalize_independent_tail();
            let arr = state.to_arrangement(&tail);
            self.best.record(value, arr);
            return;
        }
        let upper = state.d_so_far + state.upper_bound_completion();
        if upper < self.best.value {
            return;
        }

        for v in self.candidates(state) {
            let undo = state.place(v);
            self.run(state);
            state.unplace(v, undo);
        }
    }
}

/// Branch-and-bound search for the maximum `D` over every unconstrained
/// arrangement of `tree`, together with every arrangement attaining it.
///
/// `cite`s `Esteban2017`: the upper-bound/branch-and-bound framing used here
/// follows the same "what can the rest of the tree still contribute" style
/// of argument as that paper's correction to the `Dmin` case, adapted to
/// maximization.
///
/// # Panics
///
/// Debug builds assert `tree.is_valid_tree()`.
#[must_use]
pub fn branch_and_bound_max_d(tree: &FreeTree) -> MaxArrangements {
    debug_assert!(tree.is_valid_tree(), "branch-and-bound DMax requires a tree");
    bibliography::cite("Esteban2017");

    let n = tree.num_vertices();
    if n <= 1 {
        return MaxArrangements::new(n);
    }

    let mut search = Search {
        tree,
        orbits: vertex_orbits(tree),
        best: MaxArrangements {
            value: 0,
            arrangements: Vec::new(),
        },
    };
    let mut state = BnBState::new(tree);
    search.run(&mut state);
    search.best
}

/// Convenience wrapper returning just one maximizing arrangement, matching
/// the `(D, π)` shape of every other optimizer in [`crate::linarr`].
#[must_use]
pub fn branch_and_bound_max_d_one(tree: &FreeTree) -> (usize, Arrangement) {
    let mut result = branch_and_bound_max_d(tree);
    let arr = result
        .arrangements
        .pop()
        .unwrap_or_else(|| Arrangement::identity(tree.num_vertices()));
    (result.value, arr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::ArrangementRef;

    fn brute_force_max_d(tree: &FreeTree) -> usize {
        let n = tree.num_vertices();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut best = 0usize;
        permute(&mut perm, 0, &mut |p| {
            let mut arr = Arrangement::new_explicit(n);
            for (pos, &v) in p.iter().enumerate() {
                arr.assign(v, pos);
            }
            let d = crate::linarr::dsum::d(tree, ArrangementRef::Explicit(&arr));
            best = best.max(d);
        });
        best
    }

    fn permute(items: &mut [usize], k: usize, f: &mut impl FnMut(&[usize])) {
        if k == items.len() {
            f(items);
            return;
        }
        for i in k..items.len() {
            items.swap(k, i);
            permute(items, k + 1, f);
            items.swap(k, i);
        }
    }

    #[test]
    fn single_vertex_is_trivial() {
        let tree = FreeTree::new(1);
        let result = branch_and_bound_max_d(&tree);
        assert_eq!(result.value, 0);
        assert_eq!(result.arrangements.len(), 1);
    }

    #[test]
    fn star_matches_spec_worked_example() {
        let mut tree = FreeTree::new(5);
        tree.add_edge(0, 1);
        tree.add_edge(0, 2);
        tree.add_edge(0, 3);
        tree.add_edge(0, 4);
        tree.normalize();
        let result = branch_and_bound_max_d(&tree);
        assert_eq!(result.value, 10);
        for arr in &result.arrangements {
            arr.debug_assert_is_bijection();
            assert_eq!(
                crate::linarr::dsum::d(&tree, ArrangementRef::Explicit(arr)),
                10
            );
        }
    }

    #[test]
    fn path_of_four_matches_brute_force() {
        let tree = FreeTree::from_head_vector(&[0, 1, 2, 3]).unwrap();
        let result = branch_and_bound_max_d(&tree);
        assert_eq!(result.value, brute_force_max_d(&tree));
    }

    #[test]
    fn caterpillar_matches_brute_force() {
        let tree = FreeTree::from_head_vector(&[0, 1, 1, 2, 2]).unwrap();
        let result = branch_and_bound_max_d(&tree);
        assert_eq!(result.value, brute_force_max_d(&tree));
        for arr in &result.arrangements {
            assert_eq!(
                crate::linarr::dsum::d(&tree, ArrangementRef::Explicit(arr)),
                result.value
            );
        }
    }

    #[test]
    fn asymmetric_broom_matches_brute_force() {
        let mut tree = FreeTree::new(6);
        tree.add_edge(0, 1);
        tree.add_edge(1, 2);
        tree.add_edge(2, 3);
        tree.add_edge(2, 4);
        tree.add_edge(2, 5);
        tree.normalize();
        let result = branch_and_bound_max_d(&tree);
        assert_eq!(result.value, brute_force_max_d(&tree));
    }

    #[test]
    fn unconstrained_dmax_never_beats_planar_dmax() {
        let tree = FreeTree::from_head_vector(&[0, 1, 1, 2, 3, 3]).unwrap();
        let bnb = branch_and_bound_max_d(&tree);
        let (planar_d, _) = super::super::planar::planar_max_d(&tree);
        assert!(bnb.value >= planar_d);
    }

    #[test]
    fn all_recorded_arrangements_are_distinct() {
        let mut tree = FreeTree::new(5);
        tree.add_edge(0, 1);
        tree.add_edge(0, 2);
        tree.add_edge(0, 3);
        tree.add_edge(0, 4);
        tree.normalize();
        let result = branch_and_bound_max_d(&tree);
        for i in 0..result.arrangements.len() {
            for j in (i + 1)..result.arrangements.len() {
                assert_ne!(result.arrangements[i], result.arrangements[j]);
            }
        }
    }
}
