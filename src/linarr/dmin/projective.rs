//! Projective `Dmin`: the minimum sum of edge lengths over arrangements of a
//! *rooted* tree that never cross when edges are drawn as arcs above the
//! line (equivalently: every subtree occupies a contiguous range of
//! positions).
//!
//! Hochberg–Stallmann's algorithm, with the correction noted by Esteban &
//! Ferrer-i-Cancho: at each vertex, split its children into two groups by
//! alternating through them in non-increasing order of subtree size, then
//! within each group place the *smallest* subtree closest to the vertex.
//! Each subtree is free to be laid out in either left-right orientation
//! (mirroring it changes none of its internal edge lengths), so it is always
//! oriented with its own root as close as possible to the parent-facing edge
//! of its block.

use alloc::vec::Vec;

use crate::arrangement::{Arrangement, ArrangementRef};
use crate::graph::{DirectedNeighbors, RootedTree};
use crate::sorting::{self, SortDirection};
use crate::Vertex;

/// One vertex's local layout: the left-to-right sequence of vertices in its
/// subtree, and the index of the vertex itself within that sequence.
pub(crate) struct Layout {
    pub(crate) order: Vec<Vertex>,
    root_index: usize,
}

impl Layout {
    fn size(&self) -> usize {
        self.order.len()
    }

    /// Returns this layout's vertex order with the root placed as close as
    /// possible to the left end (`want_root_near_left = true`) or the right
    /// end (`false`), mirroring if that is the closer option.
    fn oriented(mut self, want_root_near_left: bool) -> Layout {
        let from_left = self.root_index;
        let from_right = self.size() - 1 - self.root_index;
        let already_best = if want_root_near_left {
            from_left <= from_right
        } else {
            from_right <= from_left
        };
        if !already_best {
            self.order.reverse();
            self.root_index = self.size() - 1 - self.root_index;
        }
        self
    }
}

/// Splits `children` (already sorted non-increasing by subtree size) into
/// two groups by alternation: index 0, 2, 4, … go left; 1, 3, 5, … go right.
fn alternate_split(children: &[Vertex]) -> (Vec<Vertex>, Vec<Vertex>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (i, &c) in children.iter().enumerate() {
        if i % 2 == 0 {
            left.push(c);
        } else {
            right.push(c);
        }
    }
    (left, right)
}

/// Builds the optimal layout of `tree` bottom-up over an explicit stack
/// (post-order), then reads off the root's layout as the final arrangement.
fn build_layouts(tree: &RootedTree) -> Vec<Option<Layout>> {
    let n = tree.num_vertices();
    let mut post_order = Vec::with_capacity(n);
    let mut stack = alloc::vec![tree.root()];
    while let Some(u) = stack.pop() {
        post_order.push(u);
        for &c in tree.out_neighbors(u) {
            stack.push(c);
        }
    }
    post_order.reverse();
    build_layouts_with_order(tree, &post_order)
}

/// Builds every vertex's [`Layout`] by processing `process_order` in that
/// exact order. The caller is responsible for supplying an order in which
/// every vertex appears after all of its children — a post-order DFS walk
/// and a non-increasing-depth BFS walk both satisfy this, and are exactly
/// the two orders [`build_layouts`] and
/// [`super::unconstrained::chung_min_d`] each use.
pub(crate) fn build_layouts_with_order(
    tree: &RootedTree,
    process_order: &[Vertex],
) -> Vec<Option<Layout>> {
    let n = tree.num_vertices();
    let mut layouts: Vec<Option<Layout>> = (0..n).map(|_| None).collect();

    for &v in process_order {
        let mut children: Vec<Vertex> = tree.out_neighbors(v).to_vec();
        sorting::sort_by_key(&mut children, SortDirection::NonIncreasing, n, 4, |c| {
            layouts[c].as_ref().expect("children built before parent").size()
        });

        let (mut left_ids, mut right_ids) = alternate_split(&children);

        // Within each side, reorder ascending by size: smallest adjacent to
        // v minimizes the sum of that side's contributions (see module docs).
        sorting::sort_by_key(&mut left_ids, SortDirection::NonDecreasing, n, 4, |c| {
            layouts[c].as_ref().expect("built below").size()
        });
        sorting::sort_by_key(&mut right_ids, SortDirection::NonDecreasing, n, 4, |c| {
            layouts[c].as_ref().expect("built below").size()
        });

        let mut order = Vec::with_capacity(
            1 + left_ids.iter().map(|&c| layouts[c].as_ref().unwrap().size()).sum::<usize>()
                + right_ids.iter().map(|&c| layouts[c].as_ref().unwrap().size()).sum::<usize>(),
        );
        // Left side: descending by size, left to right (farthest-from-v
        // first), so the smallest sits last, adjacent to v.
        for &c in left_ids.iter().rev() {
            let layout = layouts[c].take().expect("built below").oriented(false);
            order.extend(layout.order);
        }
        let root_index = order.len();
        order.push(v);
        // Right side: ascending by size, smallest adjacent to v first.
        for &c in &right_ids {
            let layout = layouts[c].take().expect("built below").oriented(true);
            order.extend(layout.order);
        }

        layouts[v] = Some(Layout { order, root_index });
    }

    layouts
}

/// Computes the minimum `D` of a projective arrangement of `tree`, and the
/// arrangement attaining it. `O(n log n)`.
#[must_use]
pub fn embed_min(tree: &RootedTree) -> (usize, Arrangement) {
    crate::bibliography::cite("HS1996");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FreeTree;

    #[test]
    fn single_edge_is_trivially_optimal() {
        let tree = FreeTree::from_head_vector(&[0, 1]).unwrap();
        let rooted = tree.root_at(0);
        let (d, arr) = embed_min(&rooted);
        assert_eq!(d, 1);
        arr.debug_assert_is_bijection();
    }

    #[test]
    fn path_graph_optimal_is_the_path_itself() {
        // A path's Dmin is n-1 regardless of where it is rooted, since the
        // path itself (with no crossings) is already optimal.
        let tree = FreeTree::from_head_vector(&[0, 1, 2, 3]).unwrap();
        for root in 0..4 {
            let rooted = tree.root_at(root);
            let (d, _arr) = embed_min(&rooted);
            assert_eq!(d, 3, "root {root}");
        }
    }

    #[test]
    fn star_rooted_at_center_is_optimal_with_minimum_d_four() {
        // Star S5 rooted at its center: every arrangement of a star has the
        // same D since every leaf is interchangeable and the center's
        // distance to each leaf just partitions {1,2,3,4} however placed.
        let mut tree = FreeTree::new(5);
        tree.add_edge(0, 1);
        tree.add_edge(0, 2);
        tree.add_edge(0, 3);
        tree.add_edge(0, 4);
        tree.normalize();
        let rooted = tree.root_at(0);
        let (d, _arr) = embed_min(&rooted);
        assert_eq!(d, 1 + 1 + 2 + 2);
    }

    #[test]
    fn caterpillar_matches_exhaustive_search_over_projective_arrangements() {
        // root 0, children 1 and 2; 1 has child 3, 2 has child 4.
        let tree = FreeTree::from_head_vector(&[0, 1, 1, 2, 3]).unwrap();
        let rooted = tree.root_at(0);
        let (d, arr) = embed_min(&rooted);
        arr.debug_assert_is_bijection();

        let best = exhaustive_projective_min(&rooted);
        assert_eq!(d, best);
    }

    /// Every permutation of `0..n`, filtered down to those under which every
    /// subtree of `tree` occupies a contiguous range of positions (the
    /// projective constraint), taking the minimum `D` among survivors. This
    /// is independent of [`embed_min`]'s own recursive construction — it
    /// checks the constraint directly on each candidate arrangement rather
    /// than generating candidates the same way the algorithm does.
    fn exhaustive_projective_min(tree: &RootedTree) -> usize {
        let n = tree.num_vertices();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut best: Option<usize> = None;
        permute(&mut perm, 0, &mut |p| {
            let mut arr = Arrangement::new_explicit(n);
            for (pos, &v) in p.iter().enumerate() {
                arr.assign(v, pos);
            }
            if is_projective(tree, &arr) {
                let d = crate::linarr::dsum::d(tree, ArrangementRef::Explicit(&arr));
                best = Some(best.map_or(d, |b: usize| b.min(d)));
            }
        });
        best.expect("the tree's own subtree-contiguous layout is always projective")
    }

    fn is_projective(tree: &RootedTree, arr: &Arrangement) -> bool {
        let n = tree.num_vertices();
        let mut subtree: Vec<Vec<Vertex>> = alloc::vec![Vec::new(); n];
        let mut stack = alloc::vec![tree.root()];
        let mut post_order = Vec::new();
        while let Some(u) = stack.pop() {
            post_order.push(u);
            for &c in tree.out_neighbors(u) {
                stack.push(c);
            }
        }
        for &u in post_order.iter().rev() {
            subtree[u].push(u);
            let kids: Vec<Vertex> = tree.out_neighbors(u).to_vec();
            for c in kids {
                let grandkids = core::mem::take(&mut subtree[c]);
                subtree[u].extend(grandkids);
            }
        }
        for u in 0..n {
            let positions: Vec<usize> = subtree[u].iter().map(|&v| arr.position_of(v)).collect();
            let lo = *positions.iter().min().unwrap();
            let hi = *positions.iter().max().unwrap();
            if hi - lo + 1 != positions.len() {
                return false;
            }
        }
        true
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
}
