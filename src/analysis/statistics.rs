//! Completion and entropy statistics over a generation grid
//!
//! Collected by pure reads so callers can inspect progress between any two
//! steps without disturbing solver state.

use crate::spatial::Grid;
use std::collections::BTreeMap;
use std::fmt;

/// Snapshot of grid completion and entropy spread
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStatistics {
    /// Number of cells in the grid
    pub total_cells: usize,
    /// Cells narrowed to a single tile
    pub collapsed_cells: usize,
    /// Cells still holding more than one possibility, or none
    pub uncollapsed_cells: usize,
    /// `collapsed_cells / total_cells`, as a percentage
    pub completion_percentage: f64,
    /// Histogram of entropy values across uncollapsed cells
    pub entropy_distribution: BTreeMap<usize, usize>,
    /// Steps taken in the current attempt
    pub generation_step: usize,
    /// Contradictions hit so far in the current run
    pub retries: usize,
}

impl GenerationStatistics {
    /// Collect statistics from a grid and the solver's counters
    pub fn collect(grid: &Grid, generation_step: usize, retries: usize) -> Self {
        let total_cells = grid.total_cells();
        let collapsed_cells = grid.collapsed_count();

        let mut entropy_distribution = BTreeMap::new();
        for cell in grid.cells() {
            if !cell.is_collapsed() {
                *entropy_distribution.entry(cell.entropy()).or_insert(0) += 1;
            }
        }

        let completion_percentage = if total_cells == 0 {
            0.0
        } else {
            (collapsed_cells as f64 / total_cells as f64) * 100.0
        };

        Self {
            total_cells,
            collapsed_cells,
            uncollapsed_cells: total_cells - collapsed_cells,
            completion_percentage,
            entropy_distribution,
            generation_step,
            retries,
        }
    }
}

impl fmt::Display for GenerationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}/{} cells collapsed ({:.1}%), step {}, retries {}",
            self.collapsed_cells,
            self.total_cells,
            self.completion_percentage,
            self.generation_step,
            self.retries
        )?;
        if !self.entropy_distribution.is_empty() {
            write!(f, "entropy histogram:")?;
            for (entropy, count) in &self.entropy_distribution {
                write!(f, " {entropy}:{count}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
