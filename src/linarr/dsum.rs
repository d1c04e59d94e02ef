//! `D`, the sum of edge lengths of an arrangement, plus its expectation and
//! variance under a few standard random-arrangement models.
//!
//! The expectation/variance formulas are derived here from first principles
//! (not transcribed from a particular paper's closed form) via exact
//! rational arithmetic over [`num_rational::BigRational`], so every
//! intermediate quantity stays exact regardless of `n`.

use alloc::vec::Vec;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::arrangement::ArrangementRef;
use crate::graph::{Edges, GraphRef, RootedTree};

/// `D`: the sum, over every edge, of the distance between its two
/// endpoints' positions.
#[must_use]
pub fn d<G: Edges>(g: &G, arr: ArrangementRef<'_>) -> usize {
    g.edges()
        .map(|(u, v)| {
            let (pu, pv) = (arr.position_of(u), arr.position_of(v));
            pu.abs_diff(pv)
        })
        .sum()
}

fn bi(x: usize) -> BigInt {
    BigInt::from(x)
}

fn ratio(num: BigInt, den: BigInt) -> BigRational {
    BigRational::new(num, den)
}

fn int(x: BigInt) -> BigRational {
    BigRational::from_integer(x)
}

/// `E[D]` of a uniformly random arrangement of any `n`-vertex, `m`-edge
/// graph: `m(n+1)/3`. Independent of which edges exist — only `n` and `m`
/// matter, since every single edge's expected length is the same by
/// symmetry.
#[must_use]
pub fn expected_d_uniform(n: usize, m: usize) -> BigRational {
    ratio(bi(m) * (bi(n) + BigInt::one()), bi(3))
}

/// The sum of distances from position `x` to every other position in
/// `0..n`: `L(L+1)/2 + R(R+1)/2` where `L = x`, `R = n - 1 - x`.
fn t_of(x: usize, n: usize) -> BigRational {
    let l = bi(x);
    let r = bi(n - 1 - x);
    ratio(l.clone() * (l + BigInt::one()), bi(2)) + ratio(r.clone() * (r + BigInt::one()), bi(2))
}

/// The sum of squared distances from position `x` to every other position.
fn q_of(x: usize, n: usize) -> BigRational {
    let l = bi(x);
    let r = bi(n - 1 - x);
    let l_term = l.clone() * (l.clone() + BigInt::one()) * (bi(2) * l + BigInt::one());
    let r_term = r.clone() * (r.clone() + BigInt::one()) * (bi(2) * r + BigInt::one());
    ratio(l_term, bi(6)) + ratio(r_term, bi(6))
}

/// The degree-sequence summary that every expectation/variance formula in
/// this module reduces to: vertex count, edge count, and how many edge
/// pairs share a vertex versus how many don't. Computed once so
/// [`GraphMoments::expected_d`], [`GraphMoments::variance_d`],
/// [`GraphMoments::expected_c`] and [`GraphMoments::variance_c_approx`] can
/// each reuse it instead of re-deriving `q1`/`q0` from scratch.
#[derive(Clone, Debug)]
pub struct GraphMoments {
    n: usize,
    m: usize,
    /// Pairs of edges sharing exactly one vertex: `sum_v C(deg(v), 2)`.
    q1: usize,
    /// Pairs of edges sharing no vertex: `C(m, 2) - q1`.
    q0: usize,
}

impl GraphMoments {
    /// Summarizes `g`'s degree sequence.
    #[must_use]
    pub fn from_graph<G: GraphRef>(g: &G) -> Self {
        let n = g.num_vertices();
        let degrees: Vec<usize> = (0..n).map(|v| g.degree(v)).collect();
        let m = degrees.iter().sum::<usize>() / 2;
        let q1: usize = degrees.iter().map(|&deg| deg * deg.saturating_sub(1) / 2).sum();
        let total_pairs = m * m.saturating_sub(1) / 2;
        let q0 = total_pairs - q1;
        GraphMoments { n, m, q1, q0 }
    }

    /// `E[D]` under a uniformly random arrangement: `m(n+1)/3`.
    #[must_use]
    pub fn expected_d(&self) -> BigRational {
        expected_d_uniform(self.n, self.m)
    }

    /// `Var[D]` under a uniformly random arrangement.
    ///
    /// Splits into the variance of each single edge's length plus the
    /// covariance of every pair of edges, with the pairwise covariance
    /// taking one of two values depending only on whether the pair shares a
    /// vertex — by the symmetry of a uniform random permutation, it never
    /// depends on *which* vertex or edges. `O(n)` once [`GraphMoments`]
    /// itself has been built.
    #[must_use]
    pub fn variance_d(&self) -> BigRational {
        let n = self.n;
        if n < 2 || self.m == 0 {
            return BigRational::zero();
        }

        let mean_x = ratio(bi(n) + BigInt::one(), bi(3));
        let var_x = ratio((bi(n) + BigInt::one()) * (bi(n) - bi(2)), bi(18));

        let mut sum_t2 = BigRational::zero();
        let mut sum_q = BigRational::zero();
        for x in 0..n {
            let t = t_of(x, n);
            sum_t2 = sum_t2 + t.clone() * t;
            sum_q = sum_q + q_of(x, n);
        }

        let cov_shared = if n >= 3 {
            let f_n = sum_t2.clone() - sum_q;
            let denom = bi(n) * bi(n - 1) * bi(n - 2);
            let e_xy = f_n / int(denom);
            e_xy - mean_x.clone() * mean_x.clone()
        } else {
            BigRational::zero()
        };

        let cov_disjoint = if n >= 4 {
            let a = ratio(bi(n) * bi(n - 1) * (bi(n) + BigInt::one()), bi(3));
            let correction = int(bi(4)) * sum_t2.clone()
                - ratio(bi(n - 1) * bi(n) * bi(n) * (bi(n) + BigInt::one()), bi(3));
            let g_n = a.clone() * a - correction;
            let denom = bi(n) * bi(n - 1) * bi(n - 2) * bi(n - 3);
            let e_xy = g_n / int(denom);
            e_xy - mean_x.clone() * mean_x
        } else {
            BigRational::zero()
        };

        int(bi(self.m)) * var_x
            + int(bi(2)) * int(bi(self.q1)) * cov_shared
            + int(bi(2)) * int(bi(self.q0)) * cov_disjoint
    }

    /// `E[C]` under a uniformly random arrangement.
    ///
    /// A pair of edges sharing a vertex can never cross (crossing needs 4
    /// distinct, properly interleaved positions), so only disjoint pairs
    /// contribute. For 4 distinct random positions split into two fixed
    /// pairs, exactly one of the 3 equally likely relative orderings of
    /// those pairs (nested, sequential, crossing) crosses, so each disjoint
    /// pair crosses with probability `1/3`.
    #[must_use]
    pub fn expected_c(&self) -> BigRational {
        ratio(bi(self.q0), bi(3))
    }

    /// An approximation of `Var[C]` under a uniformly random arrangement,
    /// treating every disjoint edge pair's crossing indicator as an
    /// independent Bernoulli(1/3) (`Var = p(1-p) = 2/9` per pair). The
    /// indicators are not actually independent — two disjoint pairs that
    /// themselves share an edge are correlated — so this systematically
    /// understates the true variance; it is a cheap first-order estimate,
    /// not an exact figure.
    #[must_use]
    pub fn variance_c_approx(&self) -> BigRational {
        ratio(bi(2 * self.q0), bi(9))
    }
}

/// `Var[D]` of a uniformly random arrangement of `g`. Shorthand for
/// `GraphMoments::from_graph(g).variance_d()`.
#[must_use]
pub fn variance_d_uniform<G: GraphRef>(g: &G) -> BigRational {
    GraphMoments::from_graph(g).variance_d()
}

/// Per-vertex subtree sizes of a rooted tree, computed fresh (does not
/// require [`RootedTree::compute_subtree_sizes`] to have been called).
fn subtree_sizes(tree: &RootedTree) -> Vec<usize> {
    let n = tree.num_vertices();
    let mut order = Vec::with_capacity(n);
    let mut stack = alloc::vec![tree.root()];
    while let Some(u) = stack.pop() {
        order.push(u);
        for &c in tree.children(u) {
            stack.push(c);
        }
    }
    let mut sizes = alloc::vec![1usize; n];
    for &u in order.iter().rev() {
        if let Some(p) = tree.parent(u) {
            sizes[p] += sizes[u];
        }
    }
    sizes
}

/// `E[D]` under a uniformly random *projective* arrangement of a rooted
/// tree: at every vertex, independently, its children's subtrees (as
/// contiguous blocks) and the vertex itself are shuffled into one of
/// `(k+1)!` equally likely relative orders.
///
/// For an edge `(v, parent(v))`, writing `n_v` for the size of `v`'s
/// subtree and `n_p` for its parent's: each of `v`'s own children ends up
/// between `v` and the parent with probability `1/2` (it is equally likely
/// to land on either side of `v` within `v`'s own shuffle), and each
/// sibling subtree of `v` ends up between `v` and the parent with
/// probability `1/3` (by symmetry among the 3 possible relative orders of
/// `v`, the parent, and the sibling). Summing these contributes:
///
/// `E[|pos(v) - pos(parent(v))|] = 1 + (n_v - 1)/2 + (n_p - 1 - n_v)/3`
#[must_use]
pub fn expected_d_projective(tree: &RootedTree) -> BigRational {
    let sizes = subtree_sizes(tree);
    let mut total = BigRational::zero();
    for v in 0..tree.num_vertices() {
        let Some(p) = tree.parent(v) else { continue };
        let n_v = sizes[v];
        let n_p = sizes[p];
        let own_children_term = ratio(bi(n_v.saturating_sub(1)), bi(2));
        let siblings_term = ratio(bi(n_p.saturating_sub(1).saturating_sub(n_v)), bi(3));
        total = total + int(BigInt::one()) + own_children_term + siblings_term;
    }
    total
}

/// `E[D]` under a uniformly random *planar* (non-crossing, root
/// unconstrained) arrangement of a free tree, computed as the projective
/// expectation of the tree rooted at a centroid — consistent with how this
/// crate's planar `Dmin`/`DMax` solvers also root at a centroid before
/// delegating to the projective machinery.
#[must_use]
pub fn expected_d_planar(tree: &crate::graph::FreeTree) -> BigRational {
    let (centroid, _) = crate::properties::centroidal_vertices(tree);
    expected_d_projective(&tree.root_at(centroid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::Arrangement;
    use crate::graph::FreeTree;

    #[test]
    fn d_of_identity_star_matches_hand_count() {
        let mut tree = FreeTree::new(5);
        tree.add_edge(0, 1);
        tree.add_edge(0, 2);
        tree.add_edge(0, 3);
        tree.add_edge(0, 4);
        tree.normalize();
        let arr = Arrangement::identity(5);
        assert_eq!(d(&tree, ArrangementRef::from_option(Some(&arr))), 1 + 2 + 3 + 4);
    }

    #[test]
    fn expected_d_uniform_matches_closed_form() {
        // n=4, m=3: E[D] = 3*5/3 = 5.
        let e = expected_d_uniform(4, 3);
        assert_eq!(e, BigRational::new(BigInt::from(5), BigInt::from(1)));
    }

    #[test]
    fn variance_d_uniform_of_a_single_edge_matches_single_edge_formula() {
        // A 2-vertex, 1-edge graph: Var(D) = Var(X) = (n+1)(n-2)/18 with n=2
        // -> 3*0/18 = 0 (only one possible arrangement up to symmetry, the
        // edge length is always 1).
        use crate::graph::UnGraph;
        let mut g = UnGraph::new(2);
        g.add_edge(0, 1);
        g.normalize();
        let v = variance_d_uniform(&g);
        assert_eq!(v, BigRational::zero());
    }

    #[test]
    fn graph_moments_expected_c_of_two_disjoint_edges_is_one_third() {
        use crate::graph::UnGraph;
        let mut g = UnGraph::new(4);
        g.add_edge(0, 1);
        g.add_edge(2, 3);
        g.normalize();
        let moments = GraphMoments::from_graph(&g);
        assert_eq!(moments.expected_c(), BigRational::new(BigInt::from(1), BigInt::from(3)));
    }

    #[test]
    fn graph_moments_expected_c_of_a_star_is_zero() {
        // Every pair of edges in a star shares the center, so no disjoint
        // pair exists to ever cross.
        use crate::graph::UnGraph;
        let mut g = UnGraph::new(4);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 3);
        g.normalize();
        let moments = GraphMoments::from_graph(&g);
        assert_eq!(moments.expected_c(), BigRational::zero());
    }

    #[test]
    fn expected_d_projective_of_a_two_vertex_tree_is_one() {
        let mut tree = FreeTree::new(2);
        tree.add_edge(0, 1);
        tree.normalize();
        let rooted = tree.root_at(0);
        assert_eq!(
            expected_d_projective(&rooted),
            BigRational::from_integer(BigInt::one())
        );
    }

    #[test]
    fn expected_d_projective_of_three_vertex_path_matches_hand_derivation() {
        // root r (child v1), v1 has child v2: E[D] = 1.5 + 1 = 2.5.
        let mut path = FreeTree::new(3);
        path.add_edge(0, 1);
        path.add_edge(1, 2);
        path.normalize();
        let rooted = path.root_at(0);
        let expected = expected_d_projective(&rooted);
        assert_eq!(
            expected,
            BigRational::new(BigInt::from(5), BigInt::from(2))
        );
    }
}
