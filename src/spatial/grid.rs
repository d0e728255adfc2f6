//! Bounded 2-D cell grid with 4-directional neighbor topology
//!
//! The grid owns every [`Cell`] for one solver instance. Coordinates are
//! `(x, y)` with `x` in `[0, width)` and `y` in `[0, height)`; storage is
//! row-major. A retry resets cell contents in place rather than
//! reallocating the grid.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, WfcError};
use crate::spatial::cell::Cell;
use ndarray::Array2;

/// Width × height array of cells owned by one solver
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid with every cell fully superposed over `universe`
    pub(crate) fn new(width: usize, height: usize, universe: &TileBitset) -> Self {
        let cells = Array2::from_shape_fn((height, width), |(y, x)| Cell::new(x, y, universe));
        Self {
            cells,
            width,
            height,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn total_cells(&self) -> usize {
        self.width * self.height
    }

    /// Read the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::OutOfBounds`] for coordinates outside
    /// `[0, width) × [0, height)`; coordinates are never clamped
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell> {
        self.cells.get((y, x)).ok_or(WfcError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Mutable cell access for the solver's collapse and propagation paths
    pub(crate) fn cell_at_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.cells.get_mut((y, x))
    }

    /// In-bounds 4-directional neighbor coordinates of `(x, y)`
    ///
    /// Returns 2–4 positions depending on how close `(x, y)` sits to the
    /// grid edge. Out-of-range inputs yield an empty list.
    pub fn neighbors_of(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        if x >= self.width || y >= self.height {
            return Vec::new();
        }
        let mut neighbors = Vec::with_capacity(4);
        if y + 1 < self.height {
            neighbors.push((x, y + 1));
        }
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        if x + 1 < self.width {
            neighbors.push((x + 1, y));
        }
        if x > 0 {
            neighbors.push((x - 1, y));
        }
        neighbors
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Reset every cell to the full universe
    pub(crate) fn initialize(&mut self, universe: &TileBitset) {
        for cell in self.cells.iter_mut() {
            cell.reset(universe);
        }
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_collapsed()).count()
    }

    /// True once every cell is collapsed
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// First cell with zero possibilities, in row-major order
    pub fn contradicted_position(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .find(|c| c.is_contradicted())
            .map(|c| (c.x(), c.y()))
    }

    /// Text dump of the grid, one row per line
    ///
    /// Collapsed cells print their tile symbol. Uncollapsed cells print
    /// their entropy count when `show_entropy` is set, `??` otherwise.
    pub fn render_text(&self, show_entropy: bool) -> String {
        let mut out = String::with_capacity(self.total_cells() * 3 + self.height);
        for row in self.cells.rows() {
            let mut line = String::with_capacity(self.width * 3);
            for cell in row {
                match cell.collapsed_tile() {
                    Some(tile) => line.push_str(&format!("{:<2} ", tile.symbol())),
                    None if show_entropy => line.push_str(&format!("{:<2} ", cell.entropy())),
                    None => line.push_str("?? "),
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
