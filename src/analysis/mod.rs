//! Read-only analysis of generation state

/// Completion and entropy statistics
pub mod statistics;

pub use statistics::GenerationStatistics;
