//! Wave function collapse solver: selection, collapse, propagation, and
//! retry orchestration
//!
//! One solver exclusively owns one [`Grid`] and one PRNG stream for the
//! lifetime of a generation attempt. Stepping is synchronous and
//! cooperative: [`WaveFunctionCollapse::generate_step`] always runs to
//! completion before returning, and callers drive it from whatever loop
//! they like.

use crate::algorithm::propagation::{PropagationOutcome, propagate};
use crate::algorithm::selection::{
    RandomSelector, TileWeights, choose_tile, min_entropy_positions,
};
use crate::analysis::statistics::GenerationStatistics;
use crate::io::configuration::{DEFAULT_MAX_RETRIES, DEFAULT_MAX_STEPS, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_configuration};
use crate::spatial::{Cell, Grid};
use crate::tiles::{TileSet, TileType};

/// Solver lifecycle state
///
/// `Complete`, `Contradicted`, and `StepLimitExceeded` are terminal for the
/// current attempt; a fresh `generate` call re-enters `Ready` through an
/// implicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverPhase {
    /// Grid fully superposed, no step taken yet
    Ready,
    /// Stepping is in progress
    Running,
    /// Every cell collapsed with no contradiction
    Complete,
    /// Contradiction with the retry budget exhausted
    Contradicted,
    /// Step counter hit the configured cap before completion
    StepLimitExceeded,
}

impl SolverPhase {
    /// True for states that end the current attempt
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Complete | Self::Contradicted | Self::StepLimitExceeded
        )
    }
}

/// Result of one generation step
///
/// `proceed` is false exactly when the solver has reached a terminal
/// state; the message is human-readable and stable under a fixed seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether further steps can make progress
    pub proceed: bool,
    /// What happened during this step
    pub message: String,
}

impl StepOutcome {
    const fn stop(message: String) -> Self {
        Self {
            proceed: false,
            message,
        }
    }

    const fn advance(message: String) -> Self {
        Self {
            proceed: true,
            message,
        }
    }
}

/// Adjacency-constraint wave function collapse over a 2-D grid
///
/// Repeatedly collapses the lowest-entropy cell to a weighted random tile
/// and propagates the consequences. Contradictions inside the retry budget
/// reset the grid in place and continue drawing from the same PRNG stream,
/// so the next attempt explores different choices; only exhaustion
/// surfaces as the terminal `Contradicted` phase.
pub struct WaveFunctionCollapse {
    tileset: TileSet,
    grid: Grid,
    selector: RandomSelector,
    weights: TileWeights,
    phase: SolverPhase,
    step: usize,
    retries: usize,
    max_retries: usize,
    max_steps: usize,
}

impl WaveFunctionCollapse {
    /// Create a solver over a fresh, fully superposed grid
    ///
    /// With `seed` present every subsequent random draw is fixed; two
    /// solvers constructed with identical dimensions, tileset, and seed
    /// produce bit-identical step sequences and final grids. Without a
    /// seed the stream comes from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WfcError::InvalidConfiguration`] for zero or
    /// oversized dimensions, or an empty tileset
    pub fn new(width: usize, height: usize, tileset: TileSet, seed: Option<u64>) -> Result<Self> {
        if width == 0 || width > MAX_GRID_DIMENSION {
            return Err(invalid_configuration(
                "width",
                &width,
                &format!("width must be in 1..={MAX_GRID_DIMENSION}"),
            ));
        }
        if height == 0 || height > MAX_GRID_DIMENSION {
            return Err(invalid_configuration(
                "height",
                &height,
                &format!("height must be in 1..={MAX_GRID_DIMENSION}"),
            ));
        }
        if tileset.tile_count() == 0 {
            return Err(invalid_configuration(
                "tileset",
                &"empty",
                &"tileset must define at least one tile",
            ));
        }

        let grid = Grid::new(width, height, tileset.universe());
        let selector = seed.map_or_else(RandomSelector::from_os_entropy, RandomSelector::new);

        Ok(Self {
            tileset,
            grid,
            selector,
            weights: TileWeights::uniform(),
            phase: SolverPhase::Ready,
            step: 0,
            retries: 0,
            max_retries: DEFAULT_MAX_RETRIES,
            max_steps: DEFAULT_MAX_STEPS,
        })
    }

    /// Override the retry budget for contradiction recovery
    ///
    /// # Errors
    ///
    /// Returns [`crate::WfcError::InvalidConfiguration`] for a budget of
    /// zero
    pub fn set_max_retries(&mut self, max_retries: usize) -> Result<()> {
        if max_retries == 0 {
            return Err(invalid_configuration(
                "max_retries",
                &max_retries,
                &"retry budget must be positive",
            ));
        }
        self.max_retries = max_retries;
        Ok(())
    }

    /// Override the per-attempt step cap used by manual stepping
    ///
    /// `generate` replaces this with its own argument.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WfcError::InvalidConfiguration`] for a cap of zero
    pub fn set_max_steps(&mut self, max_steps: usize) -> Result<()> {
        if max_steps == 0 {
            return Err(invalid_configuration(
                "max_steps",
                &max_steps,
                &"step cap must be positive",
            ));
        }
        self.max_steps = max_steps;
        Ok(())
    }

    /// Replace the per-tile collapse weights (uniform by default)
    pub fn set_tile_weights(&mut self, weights: TileWeights) {
        self.weights = weights;
    }

    /// Current lifecycle phase
    pub const fn phase(&self) -> SolverPhase {
        self.phase
    }

    /// The tileset this solver draws from
    pub const fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    /// Read access to the grid and its cells
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Steps taken in the current attempt
    pub const fn step_count(&self) -> usize {
        self.step
    }

    /// Contradictions hit so far across all attempts of the current run
    pub const fn retry_count(&self) -> usize {
        self.retries
    }

    /// Read the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::WfcError::OutOfBounds`] outside the grid extent
    pub fn get_cell(&self, x: usize, y: usize) -> Result<&Cell> {
        self.grid.cell(x, y)
    }

    /// The collapsed tile at `(x, y)`, if that cell has collapsed
    pub fn tile_at(&self, x: usize, y: usize) -> Option<TileType> {
        self.grid.cell(x, y).ok().and_then(Cell::collapsed_tile)
    }

    /// True iff generation finished with every cell collapsed
    pub fn is_complete(&self) -> bool {
        self.phase == SolverPhase::Complete
    }

    /// True in the terminal contradiction state, or whenever some cell
    /// currently has zero possibilities
    pub fn has_contradiction(&self) -> bool {
        self.phase == SolverPhase::Contradicted || self.grid.contradicted_position().is_some()
    }

    /// Snapshot of completion and entropy statistics
    ///
    /// Pure read; computable between any two steps without disturbing the
    /// solver.
    pub fn statistics(&self) -> GenerationStatistics {
        GenerationStatistics::collect(&self.grid, self.step, self.retries)
    }

    /// Debug text dump of the grid
    pub fn render_text(&self, show_entropy: bool) -> String {
        self.grid.render_text(show_entropy)
    }

    /// Perform one atomic unit of generation
    ///
    /// Selects the lowest-entropy uncollapsed cell (seeded uniform
    /// tie-break), collapses it to a weighted random tile, and propagates.
    /// Contradictions inside the retry budget reset the grid and report
    /// `proceed = true`; terminal states report `proceed = false` and
    /// leave the solver untouched on subsequent calls.
    pub fn generate_step(&mut self) -> StepOutcome {
        match self.phase {
            SolverPhase::Complete => return StepOutcome::stop("complete".to_string()),
            SolverPhase::Contradicted => {
                return StepOutcome::stop("contradiction, retries exhausted".to_string());
            }
            SolverPhase::StepLimitExceeded => {
                return StepOutcome::stop("step limit exceeded".to_string());
            }
            SolverPhase::Ready | SolverPhase::Running => {}
        }
        self.phase = SolverPhase::Running;

        // A cell emptied outside this step (contrived setups) still counts
        // as a contradiction for the current attempt.
        if let Some((x, y)) = self.grid.contradicted_position() {
            return self.handle_contradiction(x, y);
        }

        let candidates = min_entropy_positions(&self.grid);
        let Some(&first) = candidates.first() else {
            // No cell above one possibility and none below: all collapsed.
            self.phase = SolverPhase::Complete;
            return StepOutcome::stop("complete".to_string());
        };

        self.step += 1;
        if self.step > self.max_steps {
            self.phase = SolverPhase::StepLimitExceeded;
            return StepOutcome::stop(format!("step limit exceeded ({})", self.max_steps));
        }

        let index = self.selector.pick_index(candidates.len());
        let (x, y) = candidates.get(index).copied().unwrap_or(first);

        let chosen = self
            .grid
            .cell(x, y)
            .ok()
            .and_then(|cell| choose_tile(cell, &self.weights, &mut self.selector));
        let Some(tile) = chosen else {
            return self.handle_contradiction(x, y);
        };
        if let Some(cell) = self.grid.cell_at_mut(x, y) {
            cell.collapse_to(tile);
        }

        match propagate(&mut self.grid, &self.tileset, (x, y)) {
            PropagationOutcome::Consistent => StepOutcome::advance(format!(
                "step {}: collapsed ({x}, {y}) to {tile}",
                self.step
            )),
            PropagationOutcome::Contradiction { x: cx, y: cy } => {
                self.handle_contradiction(cx, cy)
            }
        }
    }

    /// Run steps until a terminal state, with `max_steps` bounding each
    /// attempt
    ///
    /// Implicitly resets the solver to `Ready` first, so a finished solver
    /// can be reused for a fresh run. Returns true iff the terminal state
    /// is `Complete`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WfcError::InvalidConfiguration`] for a step cap of
    /// zero
    pub fn generate(&mut self, max_steps: usize) -> Result<bool> {
        if max_steps == 0 {
            return Err(invalid_configuration(
                "max_steps",
                &max_steps,
                &"step cap must be positive",
            ));
        }
        self.max_steps = max_steps;
        self.reset_run();

        loop {
            let outcome = self.generate_step();
            if !outcome.proceed {
                break;
            }
        }
        Ok(self.is_complete())
    }

    /// Reset the grid and counters for a fresh run
    fn reset_run(&mut self) {
        self.grid.initialize(self.tileset.universe());
        self.phase = SolverPhase::Ready;
        self.step = 0;
        self.retries = 0;
    }

    /// Consume one retry for a contradiction at `(x, y)`
    ///
    /// Inside the budget the grid resets in place (same allocation, fresh
    /// superposition) and the PRNG stream simply continues, so the next
    /// attempt sees different draws without reseeding. Exhaustion
    /// transitions to the terminal `Contradicted` phase.
    fn handle_contradiction(&mut self, x: usize, y: usize) -> StepOutcome {
        self.retries += 1;
        if self.retries <= self.max_retries {
            self.grid.initialize(self.tileset.universe());
            self.step = 0;
            self.phase = SolverPhase::Ready;
            StepOutcome::advance(format!(
                "contradiction at ({x}, {y}), retrying ({}/{})",
                self.retries, self.max_retries
            ))
        } else {
            self.phase = SolverPhase::Contradicted;
            StepOutcome::stop(format!(
                "contradiction at ({x}, {y}), retries exhausted"
            ))
        }
    }
}
