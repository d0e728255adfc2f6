//! Entropy-driven cell selection and seeded random choice
//!
//! Selection always targets the lowest-entropy uncollapsed cells; ties are
//! broken uniformly with the solver's owned PRNG stream. Given the same
//! seed and draw history, every choice here is reproducible, which is what
//! makes whole runs bit-identical across solvers.

use crate::io::error::{Result, invalid_configuration};
use crate::spatial::{Cell, Grid};
use crate::tiles::TileType;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
///
/// Owns its `StdRng` stream outright; two selectors never share state, so
/// concurrent solvers cannot perturb each other's sequences.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic selector from a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from the operating system
    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uniform index choice in `[0, len)`
    ///
    /// Consumes a draw only when there is a real choice to make, so a
    /// single-candidate selection does not advance the stream.
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            0
        } else {
            self.rng.random_range(0..len)
        }
    }

    /// Weighted random selection over a slice of non-negative weights
    ///
    /// Returns an index into the weights slice using the cumulative
    /// distribution; degenerate inputs (empty, all-zero) fall back to 0.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }
}

/// Per-tile collapse weights, uniform by default
#[derive(Debug, Clone)]
pub struct TileWeights {
    weights: [f64; TileType::COUNT],
}

impl Default for TileWeights {
    fn default() -> Self {
        Self::uniform()
    }
}

impl TileWeights {
    /// Equal weight for every tile kind
    pub const fn uniform() -> Self {
        Self {
            weights: [1.0; TileType::COUNT],
        }
    }

    /// Set the collapse weight for one tile kind
    ///
    /// # Errors
    ///
    /// Returns [`crate::WfcError::InvalidConfiguration`] if the weight is
    /// negative or not finite
    pub fn set(&mut self, tile: TileType, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(invalid_configuration(
                "tile_weight",
                &weight,
                &"weights must be finite and non-negative",
            ));
        }
        if let Some(slot) = self.weights.get_mut(tile.index()) {
            *slot = weight;
        }
        Ok(())
    }

    /// The collapse weight for one tile kind
    pub fn get(&self, tile: TileType) -> f64 {
        self.weights.get(tile.index()).copied().unwrap_or(0.0)
    }
}

/// All uncollapsed positions sharing the current minimum entropy
///
/// Cells with one possibility are collapsed and skipped; cells with zero
/// are contradictions handled elsewhere. Positions come back in row-major
/// order so tie-breaking indexes a stable list.
pub fn min_entropy_positions(grid: &Grid) -> Vec<(usize, usize)> {
    let mut min_entropy = usize::MAX;
    let mut candidates = Vec::new();

    for cell in grid.cells() {
        let entropy = cell.entropy();
        if entropy <= 1 {
            continue;
        }
        if entropy < min_entropy {
            min_entropy = entropy;
            candidates.clear();
            candidates.push((cell.x(), cell.y()));
        } else if entropy == min_entropy {
            candidates.push((cell.x(), cell.y()));
        }
    }

    candidates
}

/// Weighted choice of one tile from a cell's remaining possibilities
///
/// Returns `None` for contradicted cells. A single remaining possibility
/// is returned without consuming a draw.
pub fn choose_tile(
    cell: &Cell,
    weights: &TileWeights,
    selector: &mut RandomSelector,
) -> Option<TileType> {
    let tiles = cell.possibilities().to_vec();
    match tiles.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ => {
            let tile_weights: Vec<f64> = tiles.iter().map(|&t| weights.get(t)).collect();
            let index = selector.weighted_choice(&tile_weights);
            tiles.get(index).copied()
        }
    }
}
