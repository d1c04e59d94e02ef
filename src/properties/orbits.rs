//! Automorphism-orbit computation: partitioning vertices into classes that
//! are indistinguishable up to a structure-preserving relabeling.
//!
//! Uses iterated color refinement (each vertex's color becomes a function of
//! its own color and the sorted multiset of its neighbors' colors, applied
//! until the partition stops splitting) rather than an explicit automorphism
//! search. For trees this converges to the exact orbit partition — a tree
//! has no cycles to hide symmetry the local neighborhood signature can't
//! see — so the iterative, polynomial-time refinement is exact here, not an
//! approximation to fall back on only when the exact search is too slow.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use crate::graph::Neighbors;

/// Computes the orbit id of every vertex: two vertices share an orbit id if
/// and only if some automorphism of `g` maps one to the other (exact for
/// trees; for general graphs with cycles this is the coarser color-
/// refinement partition, a superset of the true orbits).
///
/// Orbit ids are canonicalized to `0..k` in order of each orbit's lowest
/// member vertex id, so the result is independent of any internal
/// refinement bookkeeping. `O(n^2)` in the worst case (each of up to `n`
/// refinement rounds re-derives every vertex's signature).
#[must_use]
pub fn vertex_orbits<G: Neighbors>(g: &G) -> Vec<usize> {
    let n = g.num_vertices();
    if n == 0 {
        return Vec::new();
    }

    let mut colors: Vec<usize> = (0..n).map(|v| g.degree(v)).collect();
    let mut distinct_count = distinct(&colors);

    loop {
        let mut signatures: Vec<(usize, Vec<usize>)> = Vec::with_capacity(n);
        for v in 0..n {
            let mut neighbor_colors: Vec<usize> =
                g.neighbors(v).iter().map(|&u| colors[u]).collect();
            neighbor_colors.sort_unstable();
            signatures.push((colors[v], neighbor_colors));
        }

        let mut distinct_sigs: Vec<&(usize, Vec<usize>)> = signatures.iter().collect();
        distinct_sigs.sort();
        distinct_sigs.dedup();

        let mut refined = vec![0usize; n];
        for v in 0..n {
            refined[v] = distinct_sigs
                .binary_search(&&signatures[v])
                .expect("every signature is present in its own distinct list");
        }

        let refined_count = distinct(&refined);
        colors = refined;
        if refined_count == distinct_count {
            break;
        }
        distinct_count = refined_count;
    }

    canonicalize(&colors)
}

fn distinct(colors: &[usize]) -> usize {
    colors.iter().copied().collect::<BTreeSet<_>>().len()
}

/// Relabels an arbitrary color assignment to `0..k`, ordered by the lowest
/// vertex index carrying each color, so the returned orbit ids are a
/// deterministic function of vertex order alone.
fn canonicalize(colors: &[usize]) -> Vec<usize> {
    let mut first_seen: Vec<(usize, usize)> = Vec::new();
    for (v, &c) in colors.iter().enumerate() {
        if !first_seen.iter().any(|&(seen_c, _)| seen_c == c) {
            first_seen.push((c, v));
        }
    }
    first_seen.sort_by_key(|&(_, v)| v);
    let mut remap = vec![0usize; colors.iter().copied().max().map_or(0, |m| m + 1)];
    for (new_id, &(old_c, _)) in first_seen.iter().enumerate() {
        remap[old_c] = new_id;
    }
    colors.iter().map(|&c| remap[c]).collect()
}
