//! Input/output: errors, configuration, CLI, progress, and image export

/// Command-line interface
pub mod cli;
/// Constants and configuration defaults
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// PNG export of generation grids
pub mod image;
/// Progress display for generation runs
pub mod progress;

pub use error::{Result, WfcError};
