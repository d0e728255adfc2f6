//! Worklist constraint propagation over the grid
//!
//! Standard arc-consistency: after a collapse, neighboring cells keep only
//! tiles compatible with at least one possibility of the constrained cell,
//! and any cell that shrinks pushes its own neighbors back onto the
//! worklist. Possibility sets only shrink and are bounded below by the
//! empty set, so the traversal always terminates.

use crate::spatial::Grid;
use crate::tiles::TileSet;
use std::collections::VecDeque;

/// Result of one propagation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// Every cell kept at least one possibility
    Consistent,
    /// Propagation emptied a cell's possibility set
    Contradiction {
        /// Column of the contradicted cell
        x: usize,
        /// Row of the contradicted cell
        y: usize,
    },
}

impl PropagationOutcome {
    /// True when the pass emptied some cell
    pub const fn is_contradiction(self) -> bool {
        matches!(self, Self::Contradiction { .. })
    }
}

/// Propagate constraints outward from a just-constrained cell
///
/// Collapsed neighbors are restricted like any other cell, so a forced
/// assignment that breaks an already-collapsed neighbor surfaces as a
/// contradiction instead of being silently ignored.
pub fn propagate(grid: &mut Grid, tileset: &TileSet, start: (usize, usize)) -> PropagationOutcome {
    let mut worklist = VecDeque::with_capacity(grid.total_cells());
    worklist.push_back(start);

    while let Some((x, y)) = worklist.pop_front() {
        let Ok(cell) = grid.cell(x, y) else {
            continue;
        };
        let allowed = tileset.allowed_neighbors_of_set(cell.possibilities());

        for (nx, ny) in grid.neighbors_of(x, y) {
            let Some(neighbor) = grid.cell_at_mut(nx, ny) else {
                continue;
            };
            if !neighbor.restrict_to(&allowed) {
                continue;
            }
            if neighbor.is_contradicted() {
                return PropagationOutcome::Contradiction { x: nx, y: ny };
            }
            worklist.push_back((nx, ny));
        }
    }

    PropagationOutcome::Consistent
}
