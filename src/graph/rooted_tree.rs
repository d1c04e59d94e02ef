//! Rooted trees: directed graphs with one root, edges pointing root → leaves.

use alloc::vec;
use alloc::vec::Vec;

use super::{DirectedNeighbors, Edges, FreeTree, GraphRef};
use crate::Vertex;

/// A rooted tree: a directed graph with exactly one vertex of in-degree 0
/// (the root), every other vertex of in-degree 1, edges pointing root →
/// leaves. Optionally carries a subtree-size array.
#[derive(Clone, Debug)]
pub struct RootedTree {
    n: usize,
    root: Vertex,
    parent: Vec<Option<Vertex>>,
    children: Vec<Vec<Vertex>>,
    n_sub: Option<Vec<usize>>,
}

impl RootedTree {
    /// Builds a [`RootedTree`] by rooting `tree` at `root`: a single BFS/DFS
    /// pass orienting every edge away from `root`. `O(n)`.
    #[must_use]
    pub fn from_free_tree(tree: &FreeTree, root: Vertex) -> Self {
        let n = tree.num_vertices();
        let mut parent: Vec<Option<Vertex>> = vec![None; n];
        let mut children: Vec<Vec<Vertex>> = vec![Vec::new(); n];

        // Manual stack walk (rather than a generic traversal helper) so we
        // can record parent/child edges as each vertex is first discovered.
        let mut stack = vec![root];
        let mut seen = vec![false; n];
        seen[root] = true;
        while let Some(u) = stack.pop() {
            for &v in tree.neighbors(u) {
                if !seen[v] {
                    seen[v] = true;
                    parent[v] = Some(u);
                    children[u].push(v);
                    stack.push(v);
                }
            }
        }
        for child_list in &mut children {
            child_list.sort_unstable();
        }

        RootedTree {
            n,
            root,
            parent,
            children,
            n_sub: None,
        }
    }

    /// The number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// The root vertex.
    #[must_use]
    pub fn root(&self) -> Vertex {
        self.root
    }

    /// The parent of `v`, or `None` if `v` is the root.
    #[must_use]
    pub fn parent(&self, v: Vertex) -> Option<Vertex> {
        self.parent[v]
    }

    /// The (ascending-sorted) children of `v`.
    #[must_use]
    pub fn children(&self, v: Vertex) -> &[Vertex] {
        &self.children[v]
    }

    /// Whether subtree sizes have been computed.
    #[must_use]
    pub fn are_subtree_sizes_valid(&self) -> bool {
        self.n_sub.is_some()
    }

    /// The size of the subtree rooted at `v` (number of vertices, including
    /// `v` itself).
    ///
    /// # Panics
    ///
    /// Debug builds assert [`RootedTree::are_subtree_sizes_valid`]; call
    /// [`RootedTree::compute_subtree_sizes`] first.
    #[must_use]
    pub fn n_sub(&self, v: Vertex) -> usize {
        debug_assert!(
            self.are_subtree_sizes_valid(),
            "subtree sizes were not computed"
        );
        self.n_sub.as_ref().map_or(1, |sizes| sizes[v])
    }

    /// Computes `n_sub[v] = |T_v|` for every vertex, via a single bottom-up
    /// pass over a post-order traversal. `O(n)`.
    pub fn compute_subtree_sizes(&mut self) {
        let mut sizes = vec![1usize; self.n];
        let mut post_order = Vec::with_capacity(self.n);
        let mut stack = vec![self.root];
        let mut visit_order = Vec::with_capacity(self.n);
        while let Some(u) = stack.pop() {
            visit_order.push(u);
            for &c in &self.children[u] {
                stack.push(c);
            }
        }
        post_order.extend(visit_order.into_iter().rev());
        for &u in &post_order {
            if let Some(p) = self.parent[u] {
                sizes[p] += sizes[u];
            }
        }
        self.n_sub = Some(sizes);
    }
}

impl GraphRef for RootedTree {
    fn num_vertices(&self) -> usize {
        self.n
    }

    fn degree(&self, v: Vertex) -> usize {
        self.out_neighbors(v).len() + self.in_neighbors(v).len()
    }

    fn is_normalized(&self) -> bool {
        true
    }

    fn is_directed(&self) -> bool {
        true
    }
}

impl DirectedNeighbors for RootedTree {
    fn out_neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.children[v]
    }

    fn in_neighbors(&self, v: Vertex) -> &[Vertex] {
        match &self.parent[v] {
            Some(p) => core::slice::from_ref(p),
            None => &[],
        }
    }
}

impl Edges for RootedTree {
    fn edges(&self) -> alloc::vec::IntoIter<(Vertex, Vertex)> {
        let mut out = Vec::new();
        for u in 0..self.n {
            for &v in &self.children[u] {
                out.push((u, v));
            }
        }
        out.into_iter()
    }
}
