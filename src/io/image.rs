//! PNG export of a generation grid
//!
//! Renders one colored square per cell using the tileset's display colors.
//! Uncollapsed and contradicted cells get neutral marker colors so partial
//! or failed runs still export something inspectable.

use crate::io::configuration::{CONTRADICTED_COLOR, UNCOLLAPSED_COLOR};
use crate::io::error::{Result, WfcError, invalid_configuration};
use crate::spatial::Grid;
use crate::tiles::TileSet;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Color for one cell: tile color if collapsed, marker colors otherwise
fn cell_color(grid: &Grid, tileset: &TileSet, x: usize, y: usize) -> [u8; 3] {
    let Ok(cell) = grid.cell(x, y) else {
        return UNCOLLAPSED_COLOR;
    };
    if cell.is_contradicted() {
        return CONTRADICTED_COLOR;
    }
    cell.collapsed_tile()
        .and_then(|tile| tileset.tile(tile).ok())
        .map_or(UNCOLLAPSED_COLOR, |tile| tile.color)
}

/// Export the grid as a PNG with `cell_px` pixels per cell edge
///
/// # Errors
///
/// Returns [`WfcError::InvalidConfiguration`] for a zero pixel size and
/// [`WfcError::ImageExport`] if encoding or writing fails
pub fn export_grid_as_png(
    grid: &Grid,
    tileset: &TileSet,
    path: &Path,
    cell_px: u32,
) -> Result<()> {
    if cell_px == 0 {
        return Err(invalid_configuration(
            "cell_px",
            &cell_px,
            &"cell pixel size must be positive",
        ));
    }

    let image_width = grid.width() as u32 * cell_px;
    let image_height = grid.height() as u32 * cell_px;

    let buffer = RgbImage::from_fn(image_width, image_height, |px, py| {
        let x = (px / cell_px) as usize;
        let y = (py / cell_px) as usize;
        Rgb(cell_color(grid, tileset, x, y))
    });

    buffer.save(path).map_err(|source| WfcError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
