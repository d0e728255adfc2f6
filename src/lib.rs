//! Adjacency-constrained wave function collapse for 2-D terrain maps
//!
//! The solver collapses per-cell superpositions of tile kinds down to
//! single values while enforcing pairwise adjacency rules between
//! neighbors: lowest-entropy cell first, weighted random collapse, then
//! worklist constraint propagation, with a bounded retry loop recovering
//! from contradictions. Generation is deterministic under a fixed seed.

#![forbid(unsafe_code)]

/// Core solver: bitsets, selection, propagation, and the state machine
pub mod algorithm;
/// Read-only statistics over generation state
pub mod analysis;
/// Errors, configuration, CLI, progress, and image export
pub mod io;
/// Cells and the 2-D grid
pub mod spatial;
/// Tile vocabulary, adjacency constraints, and biome presets
pub mod tiles;

pub use algorithm::{SolverPhase, StepOutcome, WaveFunctionCollapse};
pub use io::error::{Result, WfcError};
pub use tiles::{TileSet, TileType};
