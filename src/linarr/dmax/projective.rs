//! Projective `DMax`: the maximum sum of edge lengths over non-crossing
//! arrangements of a rooted tree.
//!
//! Unlike [`crate::linarr::dmin::projective`], there is no tension here
//! between a vertex's own distance to its parent and the sum of distances to
//! its children: both are maximized by the same construction — put every
//! child on one side of the vertex (not split into two), largest subtree
//! first (closest), and orient each child subtree so its own root sits as
//! far as possible from the edge facing its parent. This is the
//! rearrangement-inequality-optimal way to order a sequence of blocks to
//! maximize the sum of `1 + prefix_i` over every block, and simultaneously
//! it places the vertex itself at the very edge of its own subtree's block —
//! the largest possible offset to hand its own parent.

use alloc::vec::Vec;

use crate::arrangement::{Arrangement, ArrangementRef};
use crate::graph::{DirectedNeighbors, RootedTree};
use crate::sorting::{self, SortDirection};
use crate::Vertex;

struct Layout {
    order: Vec<Vertex>,
    root_index: usize,
}

impl Layout {
    fn size(&self) -> usize {
        self.order.len()
    }

    /// Re-orients so the root sits as far as possible from the left end
    /// (`want_root_far_from_left = true`) or the right end (`false`).
    fn oriented(mut self, want_root_far_from_left: bool) -> Layout {
        let from_left = self.root_index;
        let from_right = self.size() - 1 - self.root_index;
        let already_best = if want_root_far_from_left {
            from_left >= from_right
        } else {
            from_right >= from_left
        };
        if !already_best {
            self.order.reverse();
            self.root_index = self.size() - 1 - self.root_index;
        }
        self
    }
}

fn build_layouts(tree: &RootedTree) -> Vec<Option<Layout>> {
    let n = tree.num_vertices();
    let mut layouts: Vec<Option<Layout>> = (0..n).map(|_| None).collect();

    let mut post_order = Vec::with_capacity(n);
    let mut stack = alloc::vec![tree.root()];
    while let Some(u) = stack.pop() {
        post_order.push(u);
        for &c in tree.out_neighbors(u) {
            stack.push(c);
        }
    }

    for &v in post_order.iter().rev() {
        let mut children: Vec<Vertex> = tree.out_neighbors(v).to_vec();
        sorting::sort_by_key(&mut children, SortDirection::NonIncreasing, n, 4, |c| {
            layouts[c].as_ref().expect("children built before parent").size()
        });

        // Every child goes on the same side (here: left of v, nearest
        // child first), largest first, oriented to maximize its own root's
        // offset from the edge facing v.
        let mut order = Vec::new();
        for &c in &children {
            let layout = layouts[c].take().expect("built below").oriented(false);
            order.extend(layout.order);
        }
        let root_index = order.len();
        order.push(v);

        layouts[v] = Some(Layout { order, root_index });
    }

    layouts
}

/// Computes the maximum `D` of a projective arrangement of `tree`, and the
/// arrangement attaining it. `O(n log n)`.
#[must_use]
pub fn embed_max(tree: &RootedTree) -> (usize, Arrangement) {
    let n = tree.num_vertices();
    if n <= 1 {
        return (0, Arrangement::identity(n));
    }

    let mut layouts = build_layouts(tree);
    let root_layout = layouts[tree.root()].take().expect("root layout always built");
    debug_assert_eq!(root_layout.size(), n);

    let mut arr = Arrangement::new_explicit(n);
    for (pos, &v) in root_layout.order.iter().enumerate() {
        arr.assign(v, pos);
    }
    arr.debug_assert_is_bijection();

    let d = crate::linarr::dsum::d(tree, ArrangementRef::Explicit(&arr));
    (d, arr)
}
