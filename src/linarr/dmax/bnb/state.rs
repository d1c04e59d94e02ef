//! Search state for the branch-and-bound `DMax` solver: the arrangement
//! under construction, its frontier, and the bookkeeping that lets
//! [`super::search`] extend or retract one placement in `O(deg(v))`.
//!
//! Vertices are always placed at the next free position (`0, 1, 2, ...`), so
//! a placement order *is* the arrangement: a vertex's already-placed
//! neighbors are necessarily to its left, and every neighbor placed later is
//! necessarily to its right. That turns `left_deg`/`right_deg`/`lev` from
//! spec §4.9 into values fixed the instant a vertex is placed, rather than
//! quantities a separate propagation pass has to predict ahead of time.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use crate::arrangement::Arrangement;
use crate::graph::{FreeTree, Neighbors};
use crate::Vertex;

/// The information [`BnBState::place`] returns, sufficient for
/// [`BnBState::unplace`] to undo it exactly without recomputation.
pub(super) struct PlaceUndo {
    contribution: usize,
    unplaced_neighbor_count: usize,
    newly_bordered: Vec<Vertex>,
    was_in_border: bool,
}

/// The arrangement-under-construction plus the frontier/edge-count
/// bookkeeping the search needs to prune and to finalize independent-set
/// tails in `O(n)`.
pub(super) struct BnBState<'a> {
    tree: &'a FreeTree,
    n: usize,
    pos_of: Vec<Option<usize>>,
    order: Vec<Vertex>,
    /// Unplaced vertices adjacent to at least one placed vertex — the
    /// candidate set for the next placement whenever it is non-empty (spec
    /// §4.9 "Search tree").
    pub(super) border: BTreeSet<Vertex>,
    /// Edges with *both* endpoints still unplaced. Zero means every
    /// remaining vertex's neighbors are already placed: the "independent
    /// set" shortcut of spec §4.9 point 4 applies (trivially true the
    /// moment the underlying graph has no edges among the vertices a tree
    /// leaves for last, which for a tree is already most of the search).
    pub(super) remaining_internal_edges: usize,
    /// `D` accumulated so far: the sum, over every edge with both endpoints
    /// placed, of the distance between their positions.
    pub(super) d_so_far: usize,
}

impl<'a> BnBState<'a> {
    #[must_use]
    pub(super) fn new(tree: &'a FreeTree) -> Self {
        let n = tree.num_vertices();
        let m = tree.num_edges();
        BnBState {
            tree,
            n,
            pos_of: vec![None; n],
            order: Vec::with_capacity(n),
            border: BTreeSet::new(),
            remaining_internal_edges: m,
            d_so_far: 0,
        }
    }

    #[must_use]
    pub(super) fn num_placed(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub(super) fn is_complete(&self) -> bool {
        self.order.len() == self.n
    }

    /// Places `v` at the next free position. `O(deg(v))`.
    pub(super) fn place(&mut self, v: Vertex) -> PlaceUndo {
        let p = self.order.len();
        debug_assert!(self.pos_of[v].is_none(), "vertex placed twice");
        self.pos_of[v] = Some(p);
        self.order.push(v);

        let mut contribution = 0usize;
        let mut unplaced_neighbor_count = 0usize;
        let mut newly_bordered = Vec::new();
        for &w in self.tree.neighbors(v) {
            match self.pos_of[w] {
                Some(pw) => contribution += p - pw,
                None => {
                    unplaced_neighbor_count += 1;
                    if self.border.insert(w) {
                        newly_bordered.push(w);
                    }
                }
            }
        }
        let was_in_border = self.border.remove(&v);
        self.remaining_internal_edges -= unplaced_neighbor_count;
        self.d_so_far += contribution;

        PlaceUndo {
            contribution,
            unplaced_neighbor_count,
            newly_bordered,
            was_in_border,
        }
    }

    /// Reverts the effect of the most recent [`BnBState::place`] of `v`.
    /// Must be called in LIFO order relative to `place` calls.
    pub(super) fn unplace(&mut self, v: Vertex, undo: PlaceUndo) {
        self.d_so_far -= undo.contribution;
        self.remaining_internal_edges += undo.unplaced_neighbor_count;
        if undo.was_in_border {
            self.border.insert(v);
        }
        for w in undo.newly_bordered {
            self.border.remove(&w);
        }
        self.order.pop();
        self.pos_of[v] = None;
    }

    /// Spec §4.9 "Upper bound": every remaining vertex can reach at best the
    /// far edge of the still-unassigned position range. `O(n)`.
    #[must_use]
    pub(super) fn upper_bound_completion(&self) -> usize {
        let n = self.n;
        let p = self.order.len();
        if p == n {
            return 0;
        }
        let span = n - 1 - p;
        let mut bound = self.remaining_internal_edges * span;
        for v in 0..n {
            if self.pos_of[v].is_some() {
                continue;
            }
            for &w in self.tree.neighbors(v) {
                if let Some(pw) = self.pos_of[w] {
                    bound += (n - 1) - pw;
                }
            }
        }
        bound
    }

    /// Finalizes the remaining vertices as a single independent-set tail
    /// (spec §4.9 point 4), valid only when `remaining_internal_edges == 0`.
    /// Returns the completed `D` value and the tail of vertices in the
    /// order they should occupy positions `num_placed()..n`.
    ///
    /// Every remaining vertex's only unresolved edges go to already-placed
    /// vertices, so its final contribution is `degree_to_placed(v) *
    /// position(v)` minus a fixed term; by the rearrangement inequality this
    /// sum is maximized by handing the largest remaining position to the
    /// vertex with the most placed neighbors. `O(n log n)`.
    #[must_use]
    pub(super) fn finalize_independent_tail(&self) -> (usize, Vec<Vertex>) {
        debug_assert_eq!(self.remaining_internal_edges, 0);
        let p = self.order.len();
        let remaining: Vec<Vertex> = (0..self.n).filter(|&v| self.pos_of[v].is_none()).collect();

        let mut degree_to_placed = vec![0usize; remaining.len()];
        let mut fixed_term = 0usize;
        for (i, &v) in remaining.iter().enumerate() {
            for &w in self.tree.neighbors(v) {
                if let Some(pw) = self.pos_of[w] {
                    degree_to_placed[i] += 1;
                    fixed_term += pw;
                }
            }
        }

        let mut order: Vec<usize> = (0..remaining.len()).collect();
        order.sort_by_key(|&i| degree_to_placed[i]);

        let mut extra = 0usize;
        for (offset, &i) in order.iter().enumerate() {
            extra += degree_to_placed[i] * (p + offset);
        }

        let tail: Vec<Vertex> = order.into_iter().map(|i| remaining[i]).collect();
        (self.d_so_far + extra - fixed_term, tail)
    }

    /// Materializes the current placement order (optionally extended by
    /// `tail`) as an [`Arrangement`].
    #[must_use]
    pub(super) fn to_arrangement(&self, tail: &[Vertex]) -> Arrangement {
        let mut arr = Arrangement::new_explicit(self.n);
        for (pos, &v) in self.order.iter().chain(tail.iter()).enumerate() {
            arr.assign(v, pos);
        }
        arr
    }
}
