//! Solver constants and runtime configuration defaults

/// Default retry budget for contradiction recovery
pub const DEFAULT_MAX_RETRIES: usize = 5;

/// Default cap on steps per generation attempt
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 24;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 24;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 4_096;

/// Default edge length of one cell in exported images, in pixels
pub const DEFAULT_CELL_PIXEL_SIZE: u32 = 8;

/// Fill color for cells still uncollapsed at export time
pub const UNCOLLAPSED_COLOR: [u8; 3] = [40, 40, 40];

/// Fill color for contradicted cells at export time
pub const CONTRADICTED_COLOR: [u8; 3] = [255, 0, 255];

/// Default output path for the rendered map
pub const DEFAULT_OUTPUT: &str = "map.png";
