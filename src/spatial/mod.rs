//! Spatial state for generation: cells and the 2-D grid
//!
//! This module contains the per-position superposition state and the
//! bounded grid that owns it. All cell mutation is routed through the
//! solver so propagation invariants hold.

/// Per-position superposition state
pub mod cell;
/// Bounded 2-D cell array with 4-directional topology
pub mod grid;

pub use cell::Cell;
pub use grid::Grid;
