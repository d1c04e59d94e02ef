//! Bipartite `Dmin`/`DMax`: optimal arrangements of a bipartite graph
//! consistent with a given 2-coloring.
//!
//! Both directions share one kernel: split vertices by color, sort each
//! color class by degree, and place color-0 vertices first followed by
//! color-1 vertices. Which degree order each class gets (ascending vs.
//! descending) is the only thing that differs between `Dmin` and `DMax` —
//! see [`bipartite_optimal_d`].

use alloc::vec::Vec;

use crate::arrangement::Arrangement;
use crate::graph::{Edges, GraphRef};
use crate::properties::Color;
use crate::sorting::{self, SortDirection};
use crate::Vertex;

/// Whether to compute the minimum or maximum `D` consistent with the
/// coloring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BipartiteGoal {
    /// Minimize `D`.
    Min,
    /// Maximize `D`.
    Max,
}

/// Computes the optimal (min or max) `D` of a bipartite graph `g` with
/// 2-coloring `c`, and the arrangement attaining it.
///
/// Algorithm (Alemany, Ferrer-i-Cancho & Esteban): split the vertex set into
/// its two color classes, sort each class by degree — ascending for `Max`,
/// descending for `Min` — then place color-0 vertices first, color-1
/// vertices second. Every arrangement is equivalent, up to its contribution
/// to `D`, to assigning multiplier `n - p` to whichever vertex sits at
/// position `p`; within one color class the contribution is maximized
/// (minimized) by pairing the largest multipliers with the largest
/// (smallest) degrees, which is exactly what placing a degree-sorted class
/// contiguously achieves. `O(n log n)`.
///
/// # Panics
///
/// Debug builds assert that `c` has one entry per vertex of `g` and that it
/// uses exactly the two colors [`Color::Red`]/[`Color::Blue`] (no
/// [`Color::Invalid`] entries) — a valid 2-coloring is the caller's
/// responsibility, computed once via [`crate::properties::bipartite_coloring`]
/// and reused across calls rather than recomputed here.
#[must_use]
pub fn bipartite_optimal_d<G: GraphRef + Edges>(
    g: &G,
    c: &[Color],
    goal: BipartiteGoal,
) -> (usize, Arrangement) {
    let n = g.num_vertices();
    debug_assert_eq!(c.len(), n, "coloring must have one entry per vertex");
    debug_assert!(
        c.iter().all(|&col| col != Color::Invalid),
        "bipartite optimizer requires a complete 2-coloring"
    );

    if n == 0 {
        return (0, Arrangement::identity(0));
    }
    if n == 1 {
        return (0, Arrangement::identity(1));
    }

    let first_color = c[0];
    let mut class_a: Vec<Vertex> = Vec::new();
    let mut class_b: Vec<Vertex> = Vec::new();
    for v in 0..n {
        if c[v] == first_color {
            class_a.push(v);
        } else {
            class_b.push(v);
        }
    }

    let max_degree = (0..n).map(|v| g.degree(v)).max().unwrap_or(0);
    let dir = match goal {
        BipartiteGoal::Max => SortDirection::NonDecreasing,
        BipartiteGoal::Min => SortDirection::NonIncreasing,
    };
    sorting::sort_by_key(&mut class_a, dir, max_degree, 4, |v| g.degree(v));
    sorting::sort_by_key(&mut class_b, dir, max_degree, 4, |v| g.degree(v));

    let mut arr = Arrangement::new_explicit(n);
    let mut pos = 0usize;
    for &v in class_a.iter().chain(class_b.iter()) {
        arr.assign(v, pos);
        pos += 1;
    }

    let d = crate::linarr::dsum::d(g, crate::arrangement::ArrangementRef::Explicit(&arr));
    (d, arr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;
    use crate::properties::bipartite_coloring;

    fn k23() -> UnGraph {
        // classes {0,1} and {2,3,4}.
        let mut g = UnGraph::new(5);
        for u in [0, 1] {
            for v in [2, 3, 4] {
                g.add_edge(u, v);
            }
        }
        g.normalize();
        g
    }

    #[test]
    fn k23_dmin_matches_exhaustive_search() {
        let g = k23();
        let c = bipartite_coloring(&g).unwrap();
        let (d, arr) = bipartite_optimal_d(&g, &c, BipartiteGoal::Min);
        arr.debug_assert_is_bijection();

        // Exhaustive search over all 5! permutations.
        let best = exhaustive_bipartite(&g, BipartiteGoal::Min);
        assert_eq!(d, best);
    }

    #[test]
    fn k23_dmax_matches_exhaustive_search() {
        let g = k23();
        let c = bipartite_coloring(&g).unwrap();
        let (d, arr) = bipartite_optimal_d(&g, &c, BipartiteGoal::Max);
        arr.debug_assert_is_bijection();
        let best = exhaustive_bipartite(&g, BipartiteGoal::Max);
        assert_eq!(d, best);
    }

    fn exhaustive_bipartite(g: &UnGraph, goal: BipartiteGoal) -> usize {
        use crate::arrangement::{Arrangement, ArrangementRef};
        let n = g.num_vertices();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut best: Option<usize> = None;
        permute(&mut perm, 0, &mut |p| {
            let mut arr = Arrangement::new_explicit(n);
            for (pos, &v) in p.iter().enumerate() {
                arr.assign(v, pos);
            }
            let d = crate::linarr::dsum::d(g, ArrangementRef::Explicit(&arr));
            best = Some(match (best, goal) {
                (None, _) => d,
                (Some(b), BipartiteGoal::Min) => b.min(d),
                (Some(b), BipartiteGoal::Max) => b.max(d),
            });
        });
        best.unwrap()
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
        let g = UnGraph::new(1);
        let c = alloc::vec![Color::Red];
        let (d, arr) = bipartite_optimal_d(&g, &c, BipartiteGoal::Min);
        assert_eq!(d, 0);
        assert_eq!(arr.size(), 1);
    }
}
