//! Determinism of per-step change sets, traces, and paint sequences.
//!
//! Two searches over identical grids must agree step for step, and
//! everything derived from them (trace bytes, digests, render calls) must be
//! byte-identical.

use lock_tests::recording::RecordingSurface;
use lock_tests::{layout, ENCLOSED, OPEN_3X3, WINDING};
use maze_harness::config::MazeConfig;
use maze_harness::scheduler::ManualScheduler;
use maze_harness::session::MazeSession;
use maze_kernel::grid::Grid;
use maze_search::delta::StepDelta;
use maze_search::engine::{SearchEngine, StepOutcome};

fn deltas(grid: &Grid) -> (Vec<StepDelta>, StepOutcome) {
    let mut engine = SearchEngine::begin(grid).unwrap();
    let mut out = Vec::new();
    loop {
        match engine.step(grid) {
            StepOutcome::Expanded(delta) => out.push(delta),
            terminal => return (out, terminal),
        }
    }
}

fn trace_bytes(grid: &Grid) -> Vec<u8> {
    let mut engine = SearchEngine::begin(grid).unwrap();
    let _ = engine.run_to_completion(grid);
    engine.trace().to_canonical_json_bytes().unwrap()
}

fn paints(grid: &Grid) -> RecordingSurface {
    let config = MazeConfig {
        rows: grid.rows(),
        cols: grid.cols(),
        step_interval_ms: 0,
        ..MazeConfig::default()
    };
    let mut session =
        MazeSession::new(config, RecordingSurface::new(), ManualScheduler::new()).unwrap();
    session.load_layout(grid).unwrap();
    session.begin_search().unwrap();
    session.drain_scheduler().unwrap();
    session.surface().clone()
}

#[test]
fn step_deltas_identical_across_runs() {
    for ascii in [OPEN_3X3, ENCLOSED, WINDING] {
        let grid = layout(ascii);
        assert_eq!(deltas(&grid), deltas(&grid), "deltas differ for\n{ascii}");
    }
}

#[test]
fn first_deltas_of_open_grid() {
    let (steps, _) = deltas(&layout(OPEN_3X3));
    let first = &steps[0];
    assert_eq!(first.index, 0);
    assert_eq!(first.current.to_string(), "(0, 0)");
    // Up and left are off-grid; down precedes right.
    let enqueued: Vec<String> = first.enqueued.iter().map(ToString::to_string).collect();
    assert_eq!(enqueued, ["(1, 0)", "(0, 1)"]);
}

#[test]
fn trace_bytes_and_digests_identical_across_runs() {
    let grid = layout(WINDING);
    assert_eq!(trace_bytes(&grid), trace_bytes(&grid));

    let mut a = SearchEngine::begin(&grid).unwrap();
    let mut b = SearchEngine::begin(&grid).unwrap();
    let _ = a.run_to_completion(&grid);
    let _ = b.run_to_completion(&grid);
    assert_eq!(a.trace().digest().unwrap(), b.trace().digest().unwrap());
    assert_eq!(a.trace().chain_digest(), b.trace().chain_digest());
}

#[test]
fn trace_differs_when_layout_differs() {
    let a = layout("S..\n...\n..E");
    let b = layout("S..\n.#.\n..E");
    assert_ne!(trace_bytes(&a), trace_bytes(&b));
}

#[test]
fn paint_sequence_identical_across_runs() {
    let grid = layout(WINDING);
    assert_eq!(paints(&grid), paints(&grid));
}

#[test]
fn trace_json_is_canonical() {
    let bytes = trace_bytes(&layout(OPEN_3X3));
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["chain_digest", "header", "steps", "termination"]);
    assert!(!bytes.contains(&b'\n'));
}
