//! Error types for solver construction, queries, and output

use crate::tiles::TileType;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver and I/O operations
///
/// Contradiction exhaustion is deliberately absent: it is an expected
/// algorithmic outcome surfaced through the solver's terminal phase, not
/// an error callers should have to catch.
#[derive(Debug)]
pub enum WfcError {
    /// Coordinate outside the grid extent
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
    },

    /// A tile kind referenced outside the tileset's universe
    UnknownTile {
        /// The unrecognized tile
        tile: TileType,
    },

    /// Constructor or setter parameter validation failed
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A tileset under construction is inconsistent
    InvalidTileSet {
        /// Description of the inconsistency
        reason: String,
    },

    /// Failed to save a rendered grid image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for WfcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinate ({x}, {y}) is outside the {width}x{height} grid"
                )
            }
            Self::UnknownTile { tile } => {
                write!(f, "Tile '{tile}' is not part of this tileset")
            }
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTileSet { reason } => {
                write!(f, "Invalid tileset: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WfcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, WfcError>;

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WfcError {
    WfcError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
