//! End-to-end scenarios exercising the crate's public API the way a
//! consumer would: build a graph, hand it to an optimizer or counter, check
//! the result — rather than reaching into a module's internals the way the
//! `#[cfg(test)]` unit tests beside each algorithm do.

use linarr::arrangement::{Arrangement, ArrangementRef};
use linarr::graph::{FreeTree, UnGraph};
use linarr::linarr::crossings::{count_crossings, CrossingAlgorithm};
use linarr::linarr::dmax::{branch_and_bound_max_d_one, planar_max_d};
use linarr::linarr::dmin::{unconstrained_minimum_d, UnconstrainedAlgorithm};
use linarr::linarr::dmin::planar::planar_min_d;
use linarr::linarr::dsum::d;
use linarr::properties::bipartite_coloring;
use linarr::linarr::bipartite::{bipartite_optimal_d, BipartiteGoal};

fn path_p4() -> FreeTree {
    FreeTree::from_head_vector(&[0, 1, 2, 3]).unwrap()
}

/// Path P4 = 0-1-2-3, identity arrangement: C = 0, D = 3.
#[test]
fn path_p4_identity_has_no_crossings_and_d_three() {
    let tree = path_p4();
    let arr = Arrangement::identity(4);
    let arr_ref = ArrangementRef::Explicit(&arr);
    assert_eq!(count_crossings(&tree, arr_ref, CrossingAlgorithm::Brute), 0);
    assert_eq!(d(&tree, arr_ref), 3);
}

/// Path P4, arrangement 0->0, 1->2, 2->1, 3->3: C = 0 (planar), D = 5.
#[test]
fn path_p4_swapped_middle_is_still_planar_with_d_five() {
    let tree = path_p4();
    let mut arr = Arrangement::new_explicit(4);
    arr.assign(0, 0);
    arr.assign(1, 2);
    arr.assign(2, 1);
    arr.assign(3, 3);
    let arr_ref = ArrangementRef::Explicit(&arr);
    assert_eq!(count_crossings(&tree, arr_ref, CrossingAlgorithm::Brute), 0);
    assert_eq!(d(&tree, arr_ref), 5);
}

fn star_s5() -> FreeTree {
    let mut tree = FreeTree::new(5);
    tree.add_edge(0, 1);
    tree.add_edge(0, 2);
    tree.add_edge(0, 3);
    tree.add_edge(0, 4);
    tree.normalize();
    tree
}

/// Star S5, center 0, leaves 1..4: identity D = 10, Dmin = 6, DMax = 10.
#[test]
fn star_s5_identity_dmin_dmax() {
    let tree = star_s5();
    let arr = Arrangement::identity(5);
    assert_eq!(d(&tree, ArrangementRef::Explicit(&arr)), 10);

    let (dmin, _) = unconstrained_minimum_d(&tree, UnconstrainedAlgorithm::Shiloach);
    assert_eq!(dmin, 6);

    let (dmax, _) = branch_and_bound_max_d_one(&tree);
    assert_eq!(dmax, 10);
}

/// Complete K4: identity C = 1 (edges 0-2 and 1-3 cross), D = 10.
#[test]
fn complete_k4_identity_c_one_d_ten() {
    let mut g = UnGraph::new(4);
    for u in 0..4 {
        for v in (u + 1)..4 {
            g.add_edge(u, v);
        }
    }
    g.normalize();
    let arr = Arrangement::identity(4);
    let arr_ref = ArrangementRef::Explicit(&arr);
    assert_eq!(count_crossings(&g, arr_ref, CrossingAlgorithm::Brute), 1);
    assert_eq!(d(&g, arr_ref), 10);
}

/// Rooted tree, head vector "0 1 1 2 2" (root=0, edges 1-0, 2-0, 3-1, 4-1):
/// exhaustive search over all 120 permutations confirms the true minimum D
/// is 5, attained by e.g. the arrangement 2,0,1,3,4.
#[test]
fn rooted_tree_head_vector_projective_dmin_five() {
    let tree = FreeTree::from_head_vector(&[0, 1, 1, 2, 2]).unwrap();
    let (dmin, arr) = planar_min_d(&tree);
    assert_eq!(dmin, 5);
    arr.debug_assert_is_bijection();
}

/// Bipartite complete K_{2,3}, classes {0,1}/{2,3,4}: bipartite Dmin/DMax
/// match exhaustive enumeration.
#[test]
fn bipartite_k23_dmin_dmax_match_exhaustive_search() {
    let mut g = UnGraph::new(5);
    for u in [0, 1] {
        for v in [2, 3, 4] {
            g.add_edge(u, v);
        }
    }
    g.normalize();
    let coloring = bipartite_coloring(&g).unwrap();

    let (dmin, arr_min) = bipartite_optimal_d(&g, &coloring, BipartiteGoal::Min);
    let (dmax, arr_max) = bipartite_optimal_d(&g, &coloring, BipartiteGoal::Max);
    arr_min.debug_assert_is_bijection();
    arr_max.debug_assert_is_bijection();

    let (best_min, best_max) = exhaustive_d_bounds(&g);
    assert_eq!(dmin, best_min);
    assert_eq!(dmax, best_max);
}

fn exhaustive_d_bounds(g: &UnGraph) -> (usize, usize) {
    use linarr::graph::GraphRef;
    let n = g.num_vertices();
    let mut perm: Vec<usize> = (0..n).collect();
    let mut min = usize::MAX;
    let mut max = 0usize;
    permute(&mut perm, 0, &mut |p| {
        let mut arr = Arrangement::new_explicit(n);
        for (pos, &v) in p.iter().enumerate() {
            arr.assign(v, pos);
        }
        let value = d(g, ArrangementRef::Explicit(&arr));
        min = min.min(value);
        max = max.max(value);
    });
    (min, max)
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

/// n = 1: all Dmin/DMax are 0, and the returned arrangement is trivial.
#[test]
fn single_vertex_boundary() {
    let tree = FreeTree::new(1);
    let (dmin, arr_min) = planar_min_d(&tree);
    let (dmax, arr_max) = branch_and_bound_max_d_one(&tree);
    assert_eq!(dmin, 0);
    assert_eq!(dmax, 0);
    assert_eq!(arr_min.size(), 1);
    assert_eq!(arr_max.size(), 1);
}

/// n = 2: C = 0, D = Dmin = DMax = 1.
#[test]
fn two_vertex_boundary() {
    let tree = FreeTree::from_head_vector(&[0, 1]).unwrap();
    let arr = Arrangement::identity(2);
    let arr_ref = ArrangementRef::Explicit(&arr);
    assert_eq!(count_crossings(&tree, arr_ref, CrossingAlgorithm::Brute), 0);
    assert_eq!(d(&tree, arr_ref), 1);
    let (dmin, _) = planar_min_d(&tree);
    let (dmax, _) = branch_and_bound_max_d_one(&tree);
    assert_eq!(dmin, 1);
    assert_eq!(dmax, 1);
}

/// Planar DMax never exceeds the unconstrained branch-and-bound DMax.
#[test]
fn planar_dmax_never_beats_unconstrained_dmax() {
    let tree = FreeTree::from_head_vector(&[0, 1, 1, 2, 3, 4]).unwrap();
    let (planar_d, _) = planar_max_d(&tree);
    let (bnb_d, _) = branch_and_bound_max_d_one(&tree);
    assert!(planar_d <= bnb_d);
}
