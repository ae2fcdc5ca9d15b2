//! Shared helpers for maze benchmark suites.
//!
//! Each regime is a grid shaped to stress one part of the search: wide open
//! space (frontier pressure), a serpentine corridor (long paths), and an
//! unreachable End (full exhaustion).

use maze_harness::config::MazeConfig;
use maze_harness::scheduler::ManualScheduler;
use maze_harness::session::MazeSession;
use maze_harness::surface::AsciiSurface;
use maze_kernel::grid::{Cell, Grid, Position};
use maze_kernel::proof::hash::{canonical_hash, ContentHash};
use maze_kernel::proof::hash_domain::HashDomain;
use maze_search::engine::{SearchEngine, StepOutcome};

/// A named benchmark grid.
pub struct Regime {
    pub name: &'static str,
    pub grid: Grid,
}

/// Open `rows × cols` grid, Start top-left, End bottom-right.
///
/// # Panics
///
/// Panics if either dimension is zero or the grid has a single cell.
#[must_use]
pub fn open_maze(rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols).expect("non-zero dimensions");
    grid.set_cell(Position::new(0, 0), Cell::Start)
        .expect("start in bounds");
    grid.set_cell(Position::new(rows - 1, cols - 1), Cell::End)
        .expect("end in bounds");
    grid
}

/// Every other row is a wall with a gap at alternating ends, forcing a
/// single snaking corridor.
///
/// # Panics
///
/// Panics if either dimension is zero.
#[must_use]
pub fn serpentine_maze(rows: usize, cols: usize) -> Grid {
    let mut grid = open_maze(rows, cols);
    for row in (1..rows).step_by(2) {
        let gap = if (row / 2) % 2 == 0 { cols - 1 } else { 0 };
        for col in (0..cols).filter(|&c| c != gap) {
            let pos = Position::new(row, col);
            if grid.cell_at(pos) == Ok(Cell::Empty) {
                grid.set_cell(pos, Cell::Wall).expect("in bounds");
            }
        }
    }
    grid
}

/// Open grid whose End is walled in: the search visits every other cell.
///
/// # Panics
///
/// Panics if either dimension is below 3.
#[must_use]
pub fn exhaustive_dead_end(rows: usize, cols: usize) -> Grid {
    let mut grid = open_maze(rows, cols);
    grid.set_cell(Position::new(rows - 2, cols - 1), Cell::Wall)
        .expect("in bounds");
    grid.set_cell(Position::new(rows - 1, cols - 2), Cell::Wall)
        .expect("in bounds");
    grid
}

/// The standard regime set.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "open_20x30",
            grid: open_maze(20, 30),
        },
        Regime {
            name: "open_100x100",
            grid: open_maze(100, 100),
        },
        Regime {
            name: "serpentine_41x60",
            grid: serpentine_maze(41, 60),
        },
        Regime {
            name: "exhaustive_dead_end_60x60",
            grid: exhaustive_dead_end(60, 60),
        },
    ]
}

/// Begin and drain a search; return the engine for inspection.
///
/// # Panics
///
/// Panics if the grid lacks an endpoint.
#[must_use]
pub fn run_engine(grid: &Grid) -> (SearchEngine, StepOutcome) {
    let mut engine = SearchEngine::begin(grid).expect("regime grids have both endpoints");
    let outcome = engine.run_to_completion(grid);
    (engine, outcome)
}

/// Drive a full session (rendering into an [`AsciiSurface`]) to completion.
///
/// # Panics
///
/// Panics if the session rejects the layout or the search cannot begin.
#[must_use]
pub fn run_session(grid: &Grid) -> Option<StepOutcome> {
    let config = MazeConfig {
        rows: grid.rows(),
        cols: grid.cols(),
        step_interval_ms: 0,
        ..MazeConfig::default()
    };
    let surface = AsciiSurface::new(grid.rows(), grid.cols()).expect("benchmark grids fit a surface");
    let mut session =
        MazeSession::new(config, surface, ManualScheduler::new()).expect("valid config");
    session.load_layout(grid).expect("layout matches config");
    session.begin_search().expect("endpoints present");
    session.drain_scheduler().expect("search runs")
}

/// Fingerprint of a finished search, to detect benchmarks silently
/// measuring different work after a change.
///
/// # Panics
///
/// Panics if the trace cannot be canonicalized.
#[must_use]
pub fn result_fingerprint(engine: &SearchEngine) -> ContentHash {
    let bytes = engine
        .trace()
        .to_canonical_json_bytes()
        .expect("trace canonicalizes");
    canonical_hash(HashDomain::BenchGuard, &bytes)
}
