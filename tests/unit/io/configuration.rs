//! Sanity checks on configuration defaults

use wavemap::io::configuration::{
    CONTRADICTED_COLOR, DEFAULT_CELL_PIXEL_SIZE, DEFAULT_HEIGHT, DEFAULT_MAX_RETRIES,
    DEFAULT_MAX_STEPS, DEFAULT_OUTPUT, DEFAULT_WIDTH, MAX_GRID_DIMENSION, UNCOLLAPSED_COLOR,
};

#[test]
fn test_default_dimensions_fit_the_grid_limit() {
    assert!(DEFAULT_WIDTH >= 1);
    assert!(DEFAULT_HEIGHT >= 1);
    assert!(DEFAULT_WIDTH <= MAX_GRID_DIMENSION);
    assert!(DEFAULT_HEIGHT <= MAX_GRID_DIMENSION);
}

#[test]
fn test_default_budgets_are_positive() {
    assert!(DEFAULT_MAX_RETRIES >= 1);
    assert!(DEFAULT_MAX_STEPS >= DEFAULT_WIDTH * DEFAULT_HEIGHT);
    assert!(DEFAULT_CELL_PIXEL_SIZE >= 1);
}

#[test]
fn test_marker_colors_are_distinct() {
    // Neither marker may collide with the other, or a partial export
    // would be unreadable.
    assert_ne!(UNCOLLAPSED_COLOR, CONTRADICTED_COLOR);
}

#[test]
fn test_default_output_is_a_png_path() {
    assert!(DEFAULT_OUTPUT.ends_with(".png"));
}
