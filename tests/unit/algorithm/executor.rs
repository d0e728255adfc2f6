//! Tests for solver lifecycle, stepping, and retry handling

use wavemap::tiles::{TileSet, TileType, biome};
use wavemap::{SolverPhase, WaveFunctionCollapse, WfcError};

fn no_pairs() -> TileSet {
    TileSet::builder()
        .tile(TileType::Grass, [0, 255, 0])
        .tile(TileType::Water, [0, 0, 255])
        .build()
        .unwrap()
}

#[test]
fn test_new_rejects_zero_dimensions() {
    let zero_width = WaveFunctionCollapse::new(0, 4, biome::terrain(), Some(0));
    assert!(matches!(
        zero_width,
        Err(WfcError::InvalidConfiguration { parameter: "width", .. })
    ));

    let zero_height = WaveFunctionCollapse::new(4, 0, biome::terrain(), Some(0));
    assert!(matches!(
        zero_height,
        Err(WfcError::InvalidConfiguration { parameter: "height", .. })
    ));
}

#[test]
fn test_new_rejects_oversized_dimensions() {
    let oversized = WaveFunctionCollapse::new(4_097, 4, biome::terrain(), Some(0));
    assert!(matches!(
        oversized,
        Err(WfcError::InvalidConfiguration { parameter: "width", .. })
    ));
}

#[test]
fn test_fresh_solver_starts_ready() {
    let solver = WaveFunctionCollapse::new(4, 3, biome::terrain(), Some(0)).unwrap();
    assert_eq!(solver.phase(), SolverPhase::Ready);
    assert_eq!(solver.step_count(), 0);
    assert_eq!(solver.retry_count(), 0);
    assert!(!solver.is_complete());
    assert!(!solver.has_contradiction());
    assert_eq!(solver.grid().collapsed_count(), 0);
}

#[test]
fn test_setters_reject_zero_budgets() {
    let mut solver = WaveFunctionCollapse::new(4, 4, biome::terrain(), Some(0)).unwrap();
    assert!(solver.set_max_retries(0).is_err());
    assert!(solver.set_max_steps(0).is_err());
    assert!(solver.set_max_retries(2).is_ok());
    assert!(solver.set_max_steps(50).is_ok());
}

#[test]
fn test_generate_step_collapses_one_cell() {
    let mut solver = WaveFunctionCollapse::new(4, 4, biome::terrain(), Some(11)).unwrap();
    let outcome = solver.generate_step();

    assert!(outcome.proceed);
    assert_eq!(solver.phase(), SolverPhase::Running);
    assert_eq!(solver.step_count(), 1);
    assert!(solver.grid().collapsed_count() >= 1);
    assert!(outcome.message.contains("step 1"));
}

#[test]
fn test_generate_runs_to_completion() {
    let mut solver = WaveFunctionCollapse::new(5, 5, biome::terrain(), Some(3)).unwrap();
    let completed = solver.generate(10_000).unwrap();

    if completed {
        assert_eq!(solver.phase(), SolverPhase::Complete);
        assert!(solver.grid().is_fully_collapsed());
    } else {
        assert!(solver.phase().is_terminal());
    }
}

#[test]
fn test_generate_rejects_zero_step_cap() {
    let mut solver = WaveFunctionCollapse::new(4, 4, biome::terrain(), Some(0)).unwrap();
    assert!(matches!(
        solver.generate(0),
        Err(WfcError::InvalidConfiguration { parameter: "max_steps", .. })
    ));
}

#[test]
fn test_tile_at_reflects_collapse_state() {
    let mut solver = WaveFunctionCollapse::new(1, 1, biome::mountain(), Some(9)).unwrap();
    assert_eq!(solver.tile_at(0, 0), None);

    assert!(solver.generate(10).unwrap());
    let tile = solver.tile_at(0, 0).unwrap();
    assert!(solver.tileset().contains(tile));

    // Out-of-range coordinates answer None rather than panicking
    assert_eq!(solver.tile_at(5, 5), None);
}

#[test]
fn test_contradiction_consumes_retries_then_terminates() {
    let mut solver = WaveFunctionCollapse::new(2, 1, no_pairs(), Some(0)).unwrap();
    solver.set_max_retries(2).unwrap();

    let completed = solver.generate(100).unwrap();
    assert!(!completed);
    assert_eq!(solver.phase(), SolverPhase::Contradicted);
    assert_eq!(solver.retry_count(), 3);
    assert!(solver.has_contradiction());
}

#[test]
fn test_terminal_phase_classification() {
    assert!(!SolverPhase::Ready.is_terminal());
    assert!(!SolverPhase::Running.is_terminal());
    assert!(SolverPhase::Complete.is_terminal());
    assert!(SolverPhase::Contradicted.is_terminal());
    assert!(SolverPhase::StepLimitExceeded.is_terminal());
}

#[test]
fn test_stepping_a_complete_solver_is_a_no_op() {
    let mut solver = WaveFunctionCollapse::new(2, 2, biome::ocean(), Some(21)).unwrap();
    if !solver.generate(1_000).unwrap() {
        return;
    }

    let steps_before = solver.step_count();
    let outcome = solver.generate_step();
    assert!(!outcome.proceed);
    assert_eq!(outcome.message, "complete");
    assert_eq!(solver.step_count(), steps_before);
}
