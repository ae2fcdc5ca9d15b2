//! BFS optimality and termination against an independent oracle.

use lock_tests::oracle::shortest_distance;
use lock_tests::{layout, ENCLOSED, GATE_3X3, OPEN_3X3, WINDING};
use maze_kernel::grid::{Cell, Grid, Position};
use maze_search::engine::{SearchEngine, SearchStatus, StepOutcome};
use maze_search::path::FinalPath;
use proptest::prelude::*;

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Random grid with ~30% walls and distinct Start/End.
fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..8, 2usize..8).prop_flat_map(|(rows, cols)| {
        let n = rows * cols;
        (
            prop::collection::vec(prop::bool::weighted(0.3), n),
            0..n,
            0..n - 1,
        )
            .prop_map(move |(walls, s, e)| {
                let e = if e >= s { e + 1 } else { e };
                let mut grid = Grid::new(rows, cols).unwrap();
                for (i, wall) in walls.into_iter().enumerate() {
                    if wall {
                        grid.set_cell(p(i / cols, i % cols), Cell::Wall).unwrap();
                    }
                }
                grid.set_cell(p(s / cols, s % cols), Cell::Start).unwrap();
                grid.set_cell(p(e / cols, e % cols), Cell::End).unwrap();
                grid
            })
    })
}

fn run(grid: &Grid) -> (SearchEngine, StepOutcome) {
    let mut engine = SearchEngine::begin(grid).unwrap();
    let outcome = engine.run_to_completion(grid);
    (engine, outcome)
}

fn found_path(outcome: StepOutcome) -> FinalPath {
    match outcome {
        StepOutcome::Found { path: Ok(path), .. } => path,
        other => panic!("expected a reconstructed path, got {other:?}"),
    }
}

fn assert_walkable(grid: &Grid, path: &FinalPath) {
    let cells = path.cells();
    assert_eq!(cells.first().copied(), grid.start());
    assert_eq!(cells.last().copied(), grid.end());
    for pair in cells.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {} is not a move", pair[0], pair[1]);
    }
    for &pos in cells {
        assert_ne!(grid.cell_at(pos).unwrap(), Cell::Wall, "path crosses wall at {pos}");
    }
}

proptest! {
    #[test]
    fn path_length_matches_oracle(grid in grid_strategy()) {
        let expected = shortest_distance(&grid);
        let (engine, outcome) = run(&grid);
        match expected {
            Some(distance) => {
                let path = found_path(outcome);
                prop_assert_eq!(path.len(), distance);
                assert_walkable(&grid, &path);
                prop_assert_eq!(engine.status(), SearchStatus::Found);
            }
            None => {
                prop_assert_eq!(outcome, StepOutcome::NotFound);
                prop_assert!(engine.frontier().is_empty());
            }
        }
    }

    #[test]
    fn every_queued_cell_has_one_predecessor(grid in grid_strategy()) {
        let (engine, _) = run(&grid);
        let start = engine.start();
        prop_assert!(!engine.predecessors().contains_key(&start));
        for (child, parent) in engine.predecessors() {
            prop_assert!(child.is_adjacent(*parent));
        }
    }
}

#[test]
fn open_three_by_three_goes_down_then_right() {
    let grid = layout(OPEN_3X3);
    let path = found_path(run(&grid).1);
    assert_eq!(path.len(), 4);
    assert_eq!(path.cells(), &[p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
    assert_eq!(path.interior(), &[p(1, 0), p(2, 0), p(2, 1)]);
}

#[test]
fn gate_three_by_three_routes_through_centre() {
    let grid = layout(GATE_3X3);
    let path = found_path(run(&grid).1);
    assert_eq!(path.len(), 4);
    assert!(path.cells().contains(&p(1, 1)));
    assert_walkable(&grid, &path);
}

#[test]
fn enclosed_start_exhausts_frontier() {
    let grid = layout(ENCLOSED);
    let (engine, outcome) = run(&grid);
    assert_eq!(outcome, StepOutcome::NotFound);
    assert!(engine.frontier().is_empty());
    assert_eq!(engine.visited().len(), 1);
}

#[test]
fn winding_maze_matches_oracle() {
    let grid = layout(WINDING);
    let path = found_path(run(&grid).1);
    assert_eq!(Some(path.len()), shortest_distance(&grid));
    assert_eq!(path.len(), 15);
    assert_walkable(&grid, &path);
}
