/// Fixed-size bitsets for tile possibility tracking
pub mod bitset;
/// Solver state machine and generation orchestration
pub mod executor;
/// Worklist constraint propagation and contradiction detection
pub mod propagation;
/// Entropy-driven cell selection and seeded random choice
pub mod selection;

pub use executor::{SolverPhase, StepOutcome, WaveFunctionCollapse};
