//! Branchless-path decomposition.
//!
//! Walk outward from every "hub" (a vertex whose degree is not exactly 2)
//! along each incident edge until another hub is reached, collecting every
//! degree-2 vertex traversed as an internal vertex of that path. Every edge
//! of the tree belongs to exactly one branchless path.

use alloc::vec;
use alloc::vec::Vec;
use hashbrown_shim::HashSet;

use crate::graph::Neighbors;
use crate::Vertex;

// A tiny local shim so this module does not have to choose between
// `std::collections::HashSet` and `hashbrown` depending on the `std`
// feature; every other module that needs set-like behavior over small,
// bounded vertex ids uses a `Vec<bool>`/`FixedBitSet` instead, but visited
// *edges* are pairs, so a set is the natural fit here.
mod hashbrown_shim {
    use alloc::collections::BTreeSet;
    pub type HashSet<T> = BTreeSet<T>;
}

/// Whether a branchless path has a leaf endpoint (*antenna*) or not
/// (*bridge*), per the glossary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathKind {
    /// One endpoint is a leaf (degree 1).
    Antenna,
    /// Neither endpoint is a leaf.
    Bridge,
}

/// A maximal path `v0, v1, ..., vk` whose internal vertices all have degree
/// exactly 2, with endpoints ("hubs") of degree `!= 2`.
#[derive(Clone, Debug)]
pub struct BranchlessPath {
    /// The full vertex sequence, endpoints included, in walk order.
    pub vertices: Vec<Vertex>,
    /// The two endpoints ("hubs") of the path.
    pub hubs: (Vertex, Vertex),
    /// The lowest-lexicographic internal vertex, if the path has any
    /// internal vertices.
    pub lowest_internal: Option<Vertex>,
    /// Antenna or bridge classification.
    pub kind: PathKind,
}

impl BranchlessPath {
    /// Internal vertices only (excludes both hubs).
    #[must_use]
    pub fn internal_vertices(&self) -> &[Vertex] {
        &self.vertices[1..self.vertices.len() - 1]
    }
}

/// Computes the branchless-path decomposition of a free tree. `O(n)`.
#[must_use]
pub fn branchless_paths<G: Neighbors>(g: &G) -> Vec<BranchlessPath> {
    let n = g.num_vertices();
    let degree: Vec<usize> = (0..n).map(|v| g.degree(v)).collect();
    let mut visited_edges: HashSet<(Vertex, Vertex)> = HashSet::new();
    let mut paths = Vec::new();

    if n <= 2 {
        // n == 1: no edges at all. n == 2: the single edge is itself a
        // (degenerate, zero-internal-vertex) branchless path between two
        // hubs, both leaves.
        if n == 2 {
            paths.push(BranchlessPath {
                vertices: vec![0, 1],
                hubs: (0, 1),
                lowest_internal: None,
                kind: PathKind::Antenna,
            });
        }
        return paths;
    }

    for h in 0..n {
        if degree[h] == 2 {
            continue;
        }
        for &first in g.neighbors(h) {
            if visited_edges.contains(&(h, first)) {
                continue;
            }
            let mut vertices = vec![h];
            let mut prev = h;
            let mut cur = first;
            loop {
                visited_edges.insert((prev, cur));
                visited_edges.insert((cur, prev));
                vertices.push(cur);
                if degree[cur] != 2 {
                    break;
                }
                let next = *g
                    .neighbors(cur)
                    .iter()
                    .find(|&&w| w != prev)
                    .expect("degree-2 vertex has two distinct neighbors");
                prev = cur;
                cur = next;
            }
            let hub1 = h;
            let hub2 = cur;
            let lowest_internal = vertices[1..vertices.len() - 1].iter().copied().min();
            let kind = if degree[hub1] == 1 || degree[hub2] == 1 {
                PathKind::Antenna
            } else {
                PathKind::Bridge
            };
            paths.push(BranchlessPath {
                vertices,
                hubs: (hub1, hub2),
                lowest_internal,
                kind,
            });
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FreeTree;

    #[test]
    fn path_graph_is_one_branchless_path() {
        // 0-1-2-3-4: both endpoints are leaves (degree 1), internal
        // vertices 1,2,3 all have degree 2: this is one antenna path
        // covering the whole tree.
        let tree = FreeTree::from_head_vector(&[0, 1, 2, 3, 4]).unwrap();
        let paths = branchless_paths(&tree);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].vertices.len(), 5);
        assert_eq!(paths[0].kind, PathKind::Antenna);
        assert_eq!(paths[0].lowest_internal, Some(1));
    }

    #[test]
    fn caterpillar_splits_into_spine_bridge_and_leaf_antennas() {
        // spine 0-1-2 (each of degree 3 once leaves are attached), with a
        // leaf hanging off each spine vertex: 3-0, 4-1, 5-2.
        let mut tree = FreeTree::new(6);
        tree.add_edge(0, 1);
        tree.add_edge(1, 2);
        tree.add_edge(0, 3);
        tree.add_edge(1, 4);
        tree.add_edge(2, 5);
        tree.normalize();

        let paths = branchless_paths(&tree);
        // 5 edges, each its own degenerate (zero-internal) branchless path
        // since every spine/leaf vertex here has degree != 2.
        assert_eq!(paths.len(), 5);
        assert!(paths.iter().all(|p| p.internal_vertices().is_empty()));
        let bridges = paths
            .iter()
            .filter(|p| p.kind == PathKind::Bridge)
            .count();
        assert_eq!(bridges, 2); // 0-1 and 1-2
    }
}
