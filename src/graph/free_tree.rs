//! Free trees: undirected, connected, acyclic graphs.

use alloc::vec::Vec;

use super::{Edges, GraphRef, Neighbors, RootedTree, UnGraph};
use crate::error::GraphError;
use crate::visit::{Bfs, BfsHooks};
use crate::Vertex;

/// An undirected, connected, acyclic graph: `m = n - 1`.
///
/// A thin wrapper over [`UnGraph`] that exists purely to mark, at the type
/// level, the invariant every tree-shaped algorithm in `linarr::linarr`
/// requires (projective/planar optimizers, unconstrained `Dmin`, the
/// branch-and-bound `DMax` solver). Building one does not verify
/// connectivity/acyclicity eagerly — call [`FreeTree::is_valid_tree`] at a
/// debug boundary before running a tree-only algorithm on it.
#[derive(Clone, Debug)]
pub struct FreeTree {
    graph: UnGraph,
}

impl FreeTree {
    /// Creates an edgeless "tree" on `n` vertices (only valid once `n - 1`
    /// edges connecting every vertex have been added).
    #[must_use]
    pub fn new(n: usize) -> Self {
        FreeTree {
            graph: UnGraph::new(n),
        }
    }

    /// Adds the edge `{u, v}`. See [`UnGraph::add_edge`].
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) {
        self.graph.add_edge(u, v);
    }

    /// Builds a [`FreeTree`] from a head vector, or an error if it does not
    /// describe a valid tree.
    ///
    /// A head vector of length `n` encodes, for every non-root vertex `v`
    /// (1-indexed positions `1..=n` in the classic treebank convention),
    /// the 1-indexed parent id, with 0 marking the root.
    pub fn from_head_vector(heads: &[usize]) -> Result<Self, GraphError> {
        let n = heads.len();
        let mut tree = FreeTree::new(n);
        for (i, &head) in heads.iter().enumerate() {
            if head != 0 {
                tree.try_add_edge(head - 1, i)?;
            }
        }
        tree.normalize();
        if !tree.is_valid_tree() {
            return Err(GraphError::NotATree {
                reason: "head vector does not describe a connected acyclic graph".into(),
            });
        }
        Ok(tree)
    }

    fn try_add_edge(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError> {
        self.graph.try_add_edge(u, v)
    }

    /// Sorts adjacency lists ascending.
    pub fn normalize(&mut self) {
        self.graph.normalize();
    }

    /// Checks `m == n - 1` and that the graph is connected (hence, together
    /// with the edge count, acyclic). `O(n)`.
    #[must_use]
    pub fn is_valid_tree(&self) -> bool {
        let n = self.num_vertices();
        if n == 0 {
            return true;
        }
        if self.num_edges() != n - 1 {
            return false;
        }
        let mut bfs = Bfs::new(n);
        let mut visited_count = 0usize;
        struct Count<'a>(&'a mut usize);
        impl BfsHooks for Count<'_> {
            fn on_current(&mut self, _v: Vertex) {
                *self.0 += 1;
            }
        }
        bfs.start_at(0, self, &mut Count(&mut visited_count));
        visited_count == n
    }

    /// Re-roots this tree at `root`, producing a [`RootedTree`] with edges
    /// pointing root → leaves and (optionally) computed subtree sizes.
    ///
    /// `O(n)`.
    #[must_use]
    pub fn root_at(&self, root: Vertex) -> RootedTree {
        RootedTree::from_free_tree(self, root)
    }

    /// Borrows the underlying undirected graph view.
    #[must_use]
    pub fn as_ungraph(&self) -> &UnGraph {
        &self.graph
    }
}

impl GraphRef for FreeTree {
    fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    fn degree(&self, v: Vertex) -> usize {
        self.graph.degree(v)
    }

    fn is_normalized(&self) -> bool {
        self.graph.is_normalized()
    }

    fn is_directed(&self) -> bool {
        false
    }
}

impl Neighbors for FreeTree {
    fn neighbors(&self, v: Vertex) -> &[Vertex] {
        self.graph.neighbors(v)
    }
}

impl Edges for FreeTree {
    fn edges(&self) -> alloc::vec::IntoIter<(Vertex, Vertex)> {
        self.graph.edges()
    }
}

/// Degrees of every vertex, in vertex-id order. A cheap `O(n)` summary many
/// optimizers need up front (sorting by degree, bipartite split, ...).
#[must_use]
pub fn degree_sequence<G: GraphRef>(g: &G) -> Vec<usize> {
    (0..g.num_vertices()).map(|v| g.degree(v)).collect()
}
