//! The editor session: one grid, one mode, at most one search.
//!
//! [`MazeSession`] owns every piece of mutable editor state and talks to the
//! outside world only through the [`RenderSurface`] and [`StepScheduler`]
//! capabilities it is constructed with.
//!
//! # Lifecycle
//!
//! ```text
//! new() ─► Edit ──begin_search()──► Running ──on_tick()* ──► Completed(Found | NotFound)
//!           ▲                          │                          │
//!           └────── reset_search() / clear_maze() ◄───────────────┘
//! ```
//!
//! Each scheduled tick carries a [`StepTicket`]. Reset and clear cancel the
//! pending handle and advance the generation, so a tick that was already in
//! flight is ignored when it arrives.

use maze_kernel::grid::{CellChange, Grid, GridError, Position};
use maze_search::delta::{SearchMark, StepDelta};
use maze_search::engine::{SearchEngine, SearchStats, StepOutcome};
use maze_search::error::SearchError;
use maze_search::path::{BrokenChain, FinalPath};
use tracing::{debug, error, info, warn};

use crate::config::{ConfigError, MazeConfig};
use crate::contract::{ColorTag, RenderSurface, ScheduleHandle, StepScheduler, StepTicket};
use crate::edit::{EditController, EditError, Tool};
use crate::mode::{Completion, Mode, ModeStateMachine};
use crate::scheduler::ManualScheduler;
use crate::status::StatusLine;

/// A session command was rejected. State is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Edits are only accepted in `Edit` mode.
    EditLocked { mode: Mode },
    /// Position outside the grid.
    Grid(GridError),
    /// Begin requested without Start or End on the grid.
    MissingEndpoints {
        missing_start: bool,
        missing_end: bool,
    },
    /// Begin requested while a search is already running.
    SearchInProgress,
    /// Step requested while no search is running.
    NotRunning { mode: Mode },
    /// A loaded layout does not match the configured dimensions.
    LayoutMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EditLocked { mode } => write!(f, "edits are locked in {mode} mode"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::MissingEndpoints {
                missing_start,
                missing_end,
            } => write!(
                f,
                "{}",
                SearchError::MissingEndpoints {
                    missing_start: *missing_start,
                    missing_end: *missing_end,
                }
            ),
            Self::SearchInProgress => write!(f, "a search is already running"),
            Self::NotRunning { mode } => write!(f, "no search is running (mode is {mode})"),
            Self::LayoutMismatch { expected, found } => write!(
                f,
                "layout is {}x{}, session expects {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<EditError> for SessionError {
    fn from(e: EditError) -> Self {
        match e {
            EditError::Locked { mode } => Self::EditLocked { mode },
            EditError::Grid(g) => Self::Grid(g),
        }
    }
}

impl From<SearchError> for SessionError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::MissingEndpoints {
                missing_start,
                missing_end,
            } => Self::MissingEndpoints {
                missing_start,
                missing_end,
            },
        }
    }
}

/// Editor state plus its two collaborators.
pub struct MazeSession<R: RenderSurface, S: StepScheduler> {
    config: MazeConfig,
    grid: Grid,
    mode: ModeStateMachine,
    editor: EditController,
    engine: Option<SearchEngine>,
    final_path: Option<FinalPath>,
    surface: R,
    scheduler: S,
    pending: Option<ScheduleHandle>,
    generation: u64,
    status: StatusLine,
}

impl<R: RenderSurface, S: StepScheduler> MazeSession<R, S> {
    /// A session in `Edit` mode over an empty grid. Every cell is painted
    /// [`ColorTag::Path`].
    ///
    /// # Errors
    ///
    /// Any [`MazeConfig::validate`] error.
    pub fn new(config: MazeConfig, surface: R, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)
            .map_err(|e| ConfigError::from_grid(e, config.rows, config.cols))?;
        let mut session = Self {
            config,
            grid,
            mode: ModeStateMachine::new(),
            editor: EditController::new(),
            engine: None,
            final_path: None,
            surface,
            scheduler,
            pending: None,
            generation: 0,
            status: StatusLine::Editing,
        };
        session.repaint_all();
        Ok(session)
    }

    // -----------------------------------------------------------------
    // Edit commands
    // -----------------------------------------------------------------

    /// Paint `tool` at `pos` and repaint every cell that changed.
    ///
    /// # Errors
    ///
    /// [`SessionError::EditLocked`] outside `Edit` mode,
    /// [`SessionError::Grid`] for an out-of-bounds position.
    pub fn apply_tool(&mut self, pos: Position, tool: Tool) -> Result<Vec<CellChange>, SessionError> {
        let changes = self
            .editor
            .apply_tool(&mut self.grid, &self.mode, pos, tool)
            .map_err(|e| {
                warn!(%pos, ?tool, error = %e, "edit rejected");
                SessionError::from(e)
            })?;
        for change in &changes {
            self.surface.paint_cell(change.pos, ColorTag::base(change.to));
        }
        Ok(changes)
    }

    /// Tool used by pointer events.
    pub fn select_tool(&mut self, tool: Tool) {
        self.editor.select(tool);
    }

    #[must_use]
    pub fn selected_tool(&self) -> Tool {
        self.editor.selected()
    }

    /// Paint the selected tool under pixel `(x, y)`.
    ///
    /// Returns the cell painted, or `None` when the pointer is off the
    /// canvas.
    ///
    /// # Errors
    ///
    /// [`SessionError::EditLocked`] outside `Edit` mode.
    pub fn pointer_press(&mut self, x: i64, y: i64) -> Result<Option<Position>, SessionError> {
        let Some(pos) = self.config.geometry().cell_at(x, y) else {
            return Ok(None);
        };
        self.apply_tool(pos, self.editor.selected())?;
        Ok(Some(pos))
    }

    /// Same as [`MazeSession::pointer_press`]; drags paint every cell they
    /// cross.
    ///
    /// # Errors
    ///
    /// [`SessionError::EditLocked`] outside `Edit` mode.
    pub fn pointer_drag(&mut self, x: i64, y: i64) -> Result<Option<Position>, SessionError> {
        self.pointer_press(x, y)
    }

    /// Replace the whole grid with `layout`.
    ///
    /// # Errors
    ///
    /// [`SessionError::EditLocked`] outside `Edit` mode,
    /// [`SessionError::LayoutMismatch`] if the dimensions differ.
    pub fn load_layout(&mut self, layout: &Grid) -> Result<(), SessionError> {
        if !self.mode.permits_edit() {
            warn!(mode = %self.mode.mode(), "layout load rejected");
            return Err(SessionError::EditLocked {
                mode: self.mode.mode(),
            });
        }
        let expected = (self.grid.rows(), self.grid.cols());
        let found = (layout.rows(), layout.cols());
        if expected != found {
            warn!(?expected, ?found, "layout load rejected: dimension mismatch");
            return Err(SessionError::LayoutMismatch { expected, found });
        }
        self.grid = layout.clone();
        self.repaint_all();
        self.status = StatusLine::Editing;
        info!(digest = %self.grid.layout_digest(), "layout loaded");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Search commands
    // -----------------------------------------------------------------

    /// Start a search and schedule its first step.
    ///
    /// From `Completed` the previous search is reset first.
    ///
    /// # Errors
    ///
    /// - [`SessionError::SearchInProgress`] while `Running`.
    /// - [`SessionError::MissingEndpoints`] if Start or End is absent; the
    ///   mode stays `Edit`.
    pub fn begin_search(&mut self) -> Result<(), SessionError> {
        match self.mode.mode() {
            Mode::Running => {
                warn!("begin rejected: search in progress");
                return Err(SessionError::SearchInProgress);
            }
            Mode::Completed(_) => self.discard_search(),
            Mode::Edit => {}
        }

        let engine = match SearchEngine::begin(&self.grid) {
            Ok(engine) => engine,
            Err(e) => {
                warn!(error = %e, "begin rejected");
                self.status = StatusLine::NeedEndpoints;
                return Err(e.into());
            }
        };
        self.mode
            .begin()
            .map_err(|_| SessionError::SearchInProgress)?;
        self.engine = Some(engine);
        self.final_path = None;
        self.status = StatusLine::Running;
        self.schedule_next();
        Ok(())
    }

    /// Handle a scheduler callback.
    ///
    /// Returns `Ok(None)` for a stale ticket. Otherwise performs one step
    /// and, unless it was terminal, schedules the next.
    ///
    /// # Errors
    ///
    /// Same as [`MazeSession::step`].
    pub fn on_tick(&mut self, ticket: StepTicket) -> Result<Option<StepOutcome>, SessionError> {
        if ticket.generation() != self.generation || !self.mode.is_running() {
            debug!(
                ticket = ticket.generation(),
                current = self.generation,
                "stale tick ignored"
            );
            return Ok(None);
        }
        self.pending = None;
        let outcome = self.step()?;
        if !outcome.is_terminal() {
            self.schedule_next();
        }
        Ok(Some(outcome))
    }

    /// Advance the running search by one cell and paint the result.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotRunning`] unless the mode is `Running`.
    pub fn step(&mut self) -> Result<StepOutcome, SessionError> {
        let mode = self.mode.mode();
        let Some(engine) = self.engine.as_mut().filter(|_| mode == Mode::Running) else {
            return Err(SessionError::NotRunning { mode });
        };
        let outcome = engine.step(&self.grid);
        match &outcome {
            StepOutcome::Expanded(delta) => self.paint_delta(delta),
            StepOutcome::Found { path, .. } => self.finish_found(path),
            StepOutcome::NotFound => self.finish(Completion::NotFound, StatusLine::NoPath),
            StepOutcome::Terminated(_) => {}
        }
        Ok(outcome)
    }

    /// Drain the running search synchronously and return its terminal
    /// outcome. The pending tick, if any, is cancelled.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotRunning`] unless the mode is `Running`.
    pub fn run_to_completion(&mut self) -> Result<StepOutcome, SessionError> {
        if !self.mode.is_running() {
            return Err(SessionError::NotRunning {
                mode: self.mode.mode(),
            });
        }
        self.cancel_pending();
        loop {
            let outcome = self.step()?;
            if outcome.is_terminal() {
                return Ok(outcome);
            }
        }
    }

    /// Abandon any search and return to `Edit`, keeping the layout.
    /// Calling it twice is the same as calling it once.
    pub fn reset_search(&mut self) {
        self.discard_search();
        self.status = StatusLine::Reset;
        info!("search reset");
    }

    /// Abandon any search, erase the layout, return to `Edit`.
    pub fn clear_maze(&mut self) {
        self.discard_search();
        self.grid.clear();
        self.repaint_all();
        self.status = StatusLine::Cleared;
        info!("maze cleared");
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    #[must_use]
    pub fn status(&self) -> StatusLine {
        self.status
    }

    /// The running or finished search, if any.
    #[must_use]
    pub fn engine(&self) -> Option<&SearchEngine> {
        self.engine.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> Option<SearchStats> {
        self.engine.as_ref().map(SearchEngine::stats)
    }

    /// Path of the last successful search, start to end.
    #[must_use]
    pub fn final_path(&self) -> Option<&FinalPath> {
        self.final_path.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pending(&self) -> Option<ScheduleHandle> {
        self.pending
    }

    #[must_use]
    pub fn surface(&self) -> &R {
        &self.surface
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    fn schedule_next(&mut self) {
        let ticket = StepTicket::new(self.generation);
        let handle = self
            .scheduler
            .schedule_after(self.config.step_interval(), ticket);
        self.pending = Some(handle);
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn discard_search(&mut self) {
        self.cancel_pending();
        self.generation += 1;
        self.engine = None;
        self.final_path = None;
        self.mode.reset();
        self.repaint_all();
    }

    fn finish(&mut self, completion: Completion, status: StatusLine) {
        if let Err(e) = self.mode.complete(completion) {
            error!(error = %e, "completion outside Running");
        }
        self.status = status;
    }

    fn finish_found(&mut self, path: &Result<FinalPath, BrokenChain>) {
        match path {
            Ok(found) => {
                self.paint_search_cells(found.interior(), ColorTag::Final);
                self.final_path = Some(found.clone());
                self.finish(
                    Completion::Found,
                    StatusLine::PathFound { steps: found.len() },
                );
            }
            Err(broken) => {
                self.paint_search_cells(&broken.partial, ColorTag::Final);
                self.finish(Completion::Found, StatusLine::PathBroken);
            }
        }
    }

    fn paint_delta(&mut self, delta: &StepDelta) {
        for change in delta.changes() {
            let tag = match change.mark {
                SearchMark::Visited => ColorTag::Visited,
                SearchMark::Frontier => ColorTag::Frontier,
            };
            self.paint_search_cells(&[change.pos], tag);
        }
    }

    /// Start and End keep their own colours whatever the search says.
    fn paint_search_cells(&mut self, cells: &[Position], tag: ColorTag) {
        for &pos in cells {
            if self.grid.cell_at(pos).is_ok_and(|c| !c.is_endpoint()) {
                self.surface.paint_cell(pos, tag);
            }
        }
    }

    fn repaint_all(&mut self) {
        for (pos, cell) in self.grid.iter() {
            self.surface.paint_cell(pos, ColorTag::base(cell));
        }
    }
}

impl<R: RenderSurface> MazeSession<R, ManualScheduler> {
    /// Fire pending ticks, ignoring their delays, until none remain.
    /// Returns the last outcome produced.
    ///
    /// # Errors
    ///
    /// Same as [`MazeSession::on_tick`].
    pub fn drain_scheduler(&mut self) -> Result<Option<StepOutcome>, SessionError> {
        let mut last = None;
        while let Some(tick) = self.scheduler.pop_next() {
            if let Some(outcome) = self.on_tick(tick.ticket)? {
                last = Some(outcome);
            }
        }
        Ok(last)
    }
}
