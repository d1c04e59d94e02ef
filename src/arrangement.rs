//! Linear arrangements: bijections between vertices and positions.
//!
//! Uses a plain `Vec`-backed index map with a documented panic contract and
//! no `Result` in the hot path.

use alloc::vec;
use alloc::vec::Vec;

use crate::{Position, Vertex};

/// A bijection `π` between vertex ids `0..n` and positions `0..n`.
///
/// Two parallel arrays give constant-time lookup in both directions:
/// `direct[v]` is the position of vertex `v`, and `inverse[p]` is the vertex
/// at position `p`. The invariants `direct[inverse[p]] == p` and
/// `inverse[direct[v]] == v` hold for every valid index.
///
/// The [`Arrangement::identity`] constructor is zero-allocation: it carries
/// no backing arrays at all and both directions collapse to the identity
/// function. This is the common case — most analyses run against "no
/// arrangement given" — and callers that build one explicitly only pay for
/// the two `Vec`s once [`Arrangement::assign`] (or
/// [`Arrangement::materialize`]) is called.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrangement {
    size: usize,
    // `None` for both fields encodes the identity arrangement.
    maps: Option<Maps>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Maps {
    direct: Vec<Position>,
    inverse: Vec<Vertex>,
}

impl Arrangement {
    /// Creates the identity arrangement on `n` vertices: `π(v) = v`.
    ///
    /// Zero-allocation — see the type-level docs.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Arrangement { size: n, maps: None }
    }

    /// Creates an explicit, materialized identity arrangement on `n`
    /// vertices.
    ///
    /// Behaviorally identical to [`Arrangement::identity`] but allocates the
    /// backing arrays up front; useful when a caller is about to mutate it
    /// with [`Arrangement::assign`] and wants to avoid the one-time
    /// allocation happening lazily.
    #[must_use]
    pub fn new_explicit(n: usize) -> Self {
        let mut arr = Arrangement { size: n, maps: None };
        arr.materialize();
        arr
    }

    /// The number of vertices (equivalently, positions) in this arrangement.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether this arrangement is still the zero-allocation identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.maps.is_none()
    }

    fn materialize(&mut self) {
        if self.maps.is_none() {
            let direct: Vec<Position> = (0..self.size).collect();
            let inverse: Vec<Vertex> = (0..self.size).collect();
            self.maps = Some(Maps { direct, inverse });
        }
    }

    /// Returns the position of vertex `v`.
    ///
    /// # Panics
    ///
    /// Panics (via indexing) if `v >= self.size()`.
    #[must_use]
    pub fn position_of(&self, v: Vertex) -> Position {
        match &self.maps {
            Some(m) => m.direct[v],
            None => v,
        }
    }

    /// Returns the vertex at position `p`.
    ///
    /// # Panics
    ///
    /// Panics (via indexing) if `p >= self.size()`.
    #[must_use]
    pub fn vertex_at(&self, p: Position) -> Vertex {
        match &self.maps {
            Some(m) => m.inverse[p],
            None => p,
        }
    }

    /// Assigns vertex `v` to position `p`, updating both directions.
    ///
    /// Materializes the backing arrays on first use (so calling this on an
    /// identity arrangement is the one point it stops being zero-allocation).
    ///
    /// # Panics
    ///
    /// Debug builds assert `v < self.size()` and `p < self.size()`; this is
    /// caller responsibility, not a recoverable error.
    pub fn assign(&mut self, v: Vertex, p: Position) {
        debug_assert!(v < self.size, "vertex {v} out of range");
        debug_assert!(p < self.size, "position {p} out of range");
        self.materialize();
        let m = self.maps.as_mut().expect("materialized above");
        m.direct[v] = p;
        m.inverse[p] = v;
    }

    /// Iterates positions `0..size` paired with the vertex occupying each.
    pub fn iter_positions(&self) -> impl Iterator<Item = (Position, Vertex)> + '_ {
        (0..self.size).map(move |p| (p, self.vertex_at(p)))
    }

    /// Iterates vertices `0..size` paired with their assigned position.
    pub fn iter_vertices(&self) -> impl Iterator<Item = (Vertex, Position)> + '_ {
        (0..self.size).map(move |v| (v, self.position_of(v)))
    }

    /// Debug-only check that this arrangement is a bijection on `0..size`.
    ///
    /// Used to validate caller-provided arrangements at API boundaries.
    pub fn debug_assert_is_bijection(&self) {
        if cfg!(debug_assertions) {
            let mut seen = vec![false; self.size];
            for v in 0..self.size {
                let p = self.position_of(v);
                assert!(p < self.size, "position {p} out of range for vertex {v}");
                assert!(!seen[p], "position {p} assigned to more than one vertex");
                seen[p] = true;
                assert_eq!(self.vertex_at(p), v, "direct/inverse maps disagree");
            }
        }
    }
}

/// A typed wrapper over either an explicit [`Arrangement`] or the implicit
/// identity, for the hottest inner loops that call `position_of(v)` and
/// `vertex_at(v)` without forcing callers to branch on `Option` themselves.
///
/// Unlike [`Arrangement`], which already special-cases the identity
/// internally, `ArrangementRef` lets a caller hold a *borrowed* arrangement
/// (or none at all) without committing to `Arrangement`'s ownership, the way
/// a graph-reference wrapper defers to the underlying graph instead of
/// copying it.
#[derive(Clone, Copy, Debug)]
pub enum ArrangementRef<'a> {
    /// No arrangement was supplied: behave as the identity.
    Identity,
    /// An explicit arrangement to delegate to.
    Explicit(&'a Arrangement),
}

impl<'a> ArrangementRef<'a> {
    /// Builds a reference from an `Option`, the shape most call sites take
    /// an optional input arrangement in: `None` becomes
    /// [`ArrangementRef::Identity`], `Some` wraps the borrowed arrangement.
    #[must_use]
    pub fn from_option(arr: Option<&'a Arrangement>) -> Self {
        match arr {
            Some(a) => ArrangementRef::Explicit(a),
            None => ArrangementRef::Identity,
        }
    }

    #[inline]
    #[must_use]
    pub fn position_of(&self, v: Vertex) -> Position {
        match self {
            ArrangementRef::Identity => v,
            ArrangementRef::Explicit(a) => a.position_of(v),
        }
    }

    #[inline]
    #[must_use]
    pub fn vertex_at(&self, p: Position) -> Vertex {
        match self {
            ArrangementRef::Identity => p,
            ArrangementRef::Explicit(a) => a.vertex_at(p),
        }
    }
}
