//! Tests for constraint propagation across the grid

use wavemap::algorithm::propagation::PropagationOutcome;
use wavemap::tiles::{TileSet, TileType, biome};
use wavemap::{SolverPhase, WaveFunctionCollapse};

/// Two tile kinds that each only tolerate themselves.
fn self_only() -> TileSet {
    TileSet::builder()
        .tile(TileType::Grass, [0, 255, 0])
        .tile(TileType::Water, [0, 0, 255])
        .allow(TileType::Grass, TileType::Grass)
        .allow(TileType::Water, TileType::Water)
        .build()
        .unwrap()
}

#[test]
fn test_outcome_contradiction_flag() {
    assert!(!PropagationOutcome::Consistent.is_contradiction());
    assert!(PropagationOutcome::Contradiction { x: 2, y: 0 }.is_contradiction());
}

#[test]
fn test_collapse_ripples_to_adjacent_cells() {
    let mut solver = WaveFunctionCollapse::new(2, 1, self_only(), Some(1)).unwrap();
    let outcome = solver.generate_step();
    assert!(outcome.proceed);

    // Restricting the neighbor to the collapsed tile's valid set leaves a
    // single possibility, so one step collapses both cells.
    let first = solver.tile_at(0, 0).unwrap();
    let second = solver.tile_at(1, 0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_propagation_chains_through_the_whole_row() {
    let mut solver = WaveFunctionCollapse::new(4, 1, self_only(), Some(7)).unwrap();
    solver.generate_step();

    let anchor = solver.tile_at(0, 0).unwrap();
    for x in 1..4 {
        assert_eq!(solver.tile_at(x, 0), Some(anchor));
    }
}

#[test]
fn test_propagation_never_grows_possibility_sets() {
    let mut solver = WaveFunctionCollapse::new(3, 3, biome::ocean(), Some(4)).unwrap();
    solver.generate_step();

    let before: Vec<_> = solver
        .grid()
        .cells()
        .map(|cell| cell.possibilities().clone())
        .collect();
    let retries_before = solver.retry_count();

    let outcome = solver.generate_step();
    assert!(outcome.proceed);
    if solver.retry_count() != retries_before {
        // A retry resets the grid wholesale; the monotonicity claim only
        // holds within one attempt.
        return;
    }

    for (cell, old) in solver.grid().cells().zip(&before) {
        assert!(cell.possibilities().is_subset_of(old));
    }
}

#[test]
fn test_emptied_neighbor_surfaces_as_contradiction() {
    let isolated = TileSet::builder()
        .tile(TileType::Sand, [238, 203, 173])
        .tile(TileType::Snow, [255, 250, 250])
        .build()
        .unwrap();
    let mut solver = WaveFunctionCollapse::new(2, 1, isolated, Some(0)).unwrap();

    // With no allowed pairs at all, the first collapse empties its neighbor.
    let outcome = solver.generate_step();
    assert!(outcome.message.contains("contradiction"));
    assert!(outcome.proceed);
    assert_eq!(solver.retry_count(), 1);
    assert_eq!(solver.phase(), SolverPhase::Ready);
}
