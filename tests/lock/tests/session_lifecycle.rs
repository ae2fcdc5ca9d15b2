//! Session-level lifecycle locks: edit gating, reset/clear, stale ticks,
//! and the rule that endpoints are never painted with search colours.

use lock_tests::recording::RecordingSurface;
use lock_tests::{layout, ENCLOSED, GATE_3X3, OPEN_3X3, WINDING};
use maze_harness::config::MazeConfig;
use maze_harness::contract::ColorTag;
use maze_harness::edit::Tool;
use maze_harness::mode::{Completion, Mode};
use maze_harness::scheduler::ManualScheduler;
use maze_harness::session::{MazeSession, SessionError};
use maze_harness::status::StatusLine;
use maze_kernel::grid::{Grid, Position};
use maze_search::engine::StepOutcome;
use proptest::prelude::*;

type Session = MazeSession<RecordingSurface, ManualScheduler>;

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

fn session_with(grid: &Grid) -> Session {
    let config = MazeConfig {
        rows: grid.rows(),
        cols: grid.cols(),
        step_interval_ms: 0,
        ..MazeConfig::default()
    };
    let mut s = MazeSession::new(config, RecordingSurface::new(), ManualScheduler::new()).unwrap();
    s.load_layout(grid).unwrap();
    s
}

fn tool_strategy() -> impl Strategy<Value = Tool> {
    prop_oneof![
        Just(Tool::Wall),
        Just(Tool::Path),
        Just(Tool::Start),
        Just(Tool::End),
    ]
}

proptest! {
    #[test]
    fn edits_rejected_while_running(
        row in 0usize..6,
        col in 0usize..8,
        tool in tool_strategy(),
        steps in 0usize..10,
    ) {
        let mut s = session_with(&layout(WINDING));
        s.begin_search().unwrap();
        for _ in 0..steps {
            if s.step().unwrap().is_terminal() {
                break;
            }
        }
        let before = s.grid().clone();
        let err = s.apply_tool(p(row, col), tool).unwrap_err();
        prop_assert!(matches!(err, SessionError::EditLocked { .. }), "expected EditLocked, got {:?}", err);
        prop_assert_eq!(s.grid(), &before);
    }
}

#[test]
fn edits_rejected_while_completed() {
    let mut s = session_with(&layout(OPEN_3X3));
    s.begin_search().unwrap();
    s.run_to_completion().unwrap();
    assert_eq!(s.mode(), Mode::Completed(Completion::Found));
    assert_eq!(
        s.apply_tool(p(0, 1), Tool::Wall),
        Err(SessionError::EditLocked {
            mode: Mode::Completed(Completion::Found)
        })
    );
    assert_eq!(s.pointer_press(1, 1), Err(SessionError::EditLocked {
        mode: Mode::Completed(Completion::Found)
    }));
}

#[test]
fn endpoints_never_get_search_colours() {
    for ascii in [OPEN_3X3, GATE_3X3, ENCLOSED, WINDING] {
        let grid = layout(ascii);
        let (start, end) = (grid.start().unwrap(), grid.end().unwrap());
        let mut s = session_with(&grid);
        s.begin_search().unwrap();
        s.drain_scheduler().unwrap();
        for tag in [ColorTag::Frontier, ColorTag::Visited, ColorTag::Final] {
            let painted = s.surface().painted_with(tag);
            assert!(!painted.contains(&start), "start painted {tag} in\n{ascii}");
            assert!(!painted.contains(&end), "end painted {tag} in\n{ascii}");
        }
    }
}

#[test]
fn final_path_painted_on_interior_only() {
    let mut s = session_with(&layout(OPEN_3X3));
    s.begin_search().unwrap();
    s.drain_scheduler().unwrap();
    assert_eq!(
        s.surface().painted_with(ColorTag::Final),
        vec![p(1, 0), p(2, 0), p(2, 1)]
    );
    assert_eq!(s.status().to_string(), "Path found: 4 steps.");
}

#[test]
fn reset_is_idempotent() {
    let grid = layout(WINDING);
    let mut s = session_with(&grid);
    s.begin_search().unwrap();
    for _ in 0..5 {
        s.step().unwrap();
    }
    s.reset_search();
    let once = (s.grid().clone(), s.mode(), s.status(), s.scheduler().pending_len());
    s.reset_search();
    let twice = (s.grid().clone(), s.mode(), s.status(), s.scheduler().pending_len());
    assert_eq!(once, twice);
    assert_eq!(s.grid(), &grid);
    assert_eq!(s.mode(), Mode::Edit);
    assert!(s.engine().is_none());
}

#[test]
fn reset_repaints_base_colours() {
    let grid = layout(GATE_3X3);
    let mut s = session_with(&grid);
    s.begin_search().unwrap();
    s.run_to_completion().unwrap();
    let mark = s.surface().paints.len();
    s.reset_search();
    let repaint = &s.surface().paints[mark..];
    assert_eq!(repaint.len(), 9);
    for &(pos, tag) in repaint {
        assert_eq!(tag, ColorTag::base(grid.cell_at(pos).unwrap()));
    }
    assert_eq!(s.status(), StatusLine::Reset);
}

#[test]
fn stale_tick_after_reset_and_restart_is_ignored() {
    let mut s = session_with(&layout(WINDING));
    s.begin_search().unwrap();
    let stale = s.scheduler_mut().pop_next().unwrap();
    s.reset_search();
    s.begin_search().unwrap();
    let steps_before = s.stats().unwrap().steps;
    assert_eq!(s.on_tick(stale.ticket), Ok(None));
    assert_eq!(s.stats().unwrap().steps, steps_before);
    // The fresh ticket still drives the new search.
    assert!(matches!(
        s.drain_scheduler().unwrap(),
        Some(StepOutcome::Found { .. })
    ));
}

#[test]
fn clear_returns_to_fresh_state() {
    let mut s = session_with(&layout(WINDING));
    s.begin_search().unwrap();
    s.step().unwrap();
    s.clear_maze();
    assert_eq!(s.mode(), Mode::Edit);
    assert!(!s.grid().is_ready());
    assert!(s.grid().iter().all(|(_, c)| c == maze_kernel::grid::Cell::Empty));
    assert_eq!(s.scheduler().pending_len(), 0);
    assert_eq!(
        s.begin_search(),
        Err(SessionError::MissingEndpoints {
            missing_start: true,
            missing_end: true,
        })
    );
    assert_eq!(s.mode(), Mode::Edit);
}

#[test]
fn no_path_reports_and_allows_restart() {
    let mut s = session_with(&layout(ENCLOSED));
    s.begin_search().unwrap();
    assert_eq!(s.drain_scheduler(), Ok(Some(StepOutcome::NotFound)));
    assert_eq!(s.mode(), Mode::Completed(Completion::NotFound));
    assert_eq!(s.status().to_string(), "Search finished: no path found.");
    assert!(s.final_path().is_none());

    s.begin_search().unwrap();
    assert_eq!(s.mode(), Mode::Running);
}

#[test]
fn edit_after_reset_then_search_again() {
    let mut s = session_with(&layout(ENCLOSED));
    s.begin_search().unwrap();
    s.run_to_completion().unwrap();
    s.reset_search();
    s.apply_tool(p(0, 1), Tool::Path).unwrap();
    s.begin_search().unwrap();
    assert!(matches!(
        s.run_to_completion().unwrap(),
        StepOutcome::Found { path: Ok(_), .. }
    ));
}
