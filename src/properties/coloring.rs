//! Bipartite 2-coloring.

use alloc::vec;
use alloc::vec::Vec;

use crate::graph::Neighbors;
use crate::visit::{Bfs, BfsHooks};
use crate::Vertex;

/// A vertex's bipartite color: red (0), blue (1), or invalid (2, meaning
/// "no valid 2-coloring exists" or "not yet computed").
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Color 0.
    Red = 0,
    /// Color 1.
    Blue = 1,
    /// Sentinel for "no valid 2-coloring" or "not yet computed".
    Invalid = 2,
}

/// Computes a 2-coloring of `g` by BFS parity, one component at a time.
///
/// Returns `None` if `g` is not bipartite (an odd cycle was found), in which
/// case the caller holds no valid coloring at all — this crate never hands
/// back a partially valid [`Color::Invalid`]-tagged vector, since the
/// bipartite optimizer in [`crate::linarr::bipartite`] requires a coloring
/// to even be called.
///
/// `O(n + m)`.
#[must_use]
pub fn bipartite_coloring<G: Neighbors>(g: &G) -> Option<Vec<Color>> {
    let n = g.num_vertices();
    let mut colors = vec![Color::Invalid; n];
    let mut bfs = Bfs::new(n);
    // Conflicts show up as a back-edge between two already-visited,
    // same-colored vertices, so `on_neighbor` must fire for those too.
    bfs.set_process_visited_neighbors(true);

    for start in 0..n {
        if bfs.is_visited(start) {
            continue;
        }
        colors[start] = Color::Red;

        struct Paint<'a> {
            colors: &'a mut [Color],
            conflict: bool,
        }
        impl BfsHooks for Paint<'_> {
            fn on_neighbor(&mut self, current: Vertex, neighbor: Vertex, _dir: crate::visit::ScanDirection) {
                let next_color = match self.colors[current] {
                    Color::Red => Color::Blue,
                    Color::Blue => Color::Red,
                    Color::Invalid => unreachable!("current vertex always colored before scan"),
                };
                if self.colors[neighbor] == Color::Invalid {
                    self.colors[neighbor] = next_color;
                } else if self.colors[neighbor] != next_color {
                    self.conflict = true;
                }
            }
        }

        let mut hooks = Paint {
            colors: &mut colors,
            conflict: false,
        };
        bfs.start_at(start, g, &mut hooks);
        if hooks.conflict {
            return None;
        }
    }
    Some(colors)
}
