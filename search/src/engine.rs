//! Search entry point and the single-step expansion.
//!
//! The engine never runs on its own: each [`SearchEngine::step`] call dequeues
//! at most one cell and checks at most four neighbours. Pacing belongs to the
//! caller.

use std::collections::{BTreeMap, BTreeSet};

use maze_kernel::grid::{Cell, Grid, Position};
use tracing::{debug, error, info};

use crate::delta::StepDelta;
use crate::error::SearchError;
use crate::frontier::FifoFrontier;
use crate::path::{reconstruct, BrokenChain, FinalPath};
use crate::trace::{SearchTraceV1, TerminationV1};

/// Lifecycle of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Found,
    NotFound,
}

/// Result of one [`SearchEngine::step`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A cell was expanded; the frontier may have grown.
    Expanded(StepDelta),
    /// End was dequeued. `path` is `Err` only if bookkeeping is corrupted.
    Found {
        end: Position,
        path: Result<FinalPath, BrokenChain>,
    },
    /// The frontier was empty.
    NotFound,
    /// The search had already terminated; nothing was done.
    Terminated(SearchStatus),
}

impl StepOutcome {
    /// Whether no further step can make progress.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Expanded(_))
    }
}

/// Counters over the life of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Expansions performed (terminal steps excluded).
    pub steps: u64,
    /// Cells in the visited set.
    pub visited: usize,
    /// Cells ever queued, Start included.
    pub enqueued: u64,
    /// Largest frontier length observed.
    pub frontier_high_water: u64,
}

/// Incremental BFS state: frontier, visited set, predecessor map.
///
/// # Invariants
///
/// - A cell is in at most one of {visited, frontier}.
/// - Every queued cell other than Start has exactly one predecessor, the
///   cell that discovered it first; the map is a tree rooted at Start.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    start: Position,
    end: Position,
    frontier: FifoFrontier,
    visited: BTreeSet<Position>,
    predecessors: BTreeMap<Position, Position>,
    steps: u64,
    enqueued: u64,
    status: SearchStatus,
    trace: SearchTraceV1,
}

impl SearchEngine {
    /// Seed a search on `grid`: frontier = [start], everything else empty.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingEndpoints`] if Start or End is absent.
    pub fn begin(grid: &Grid) -> Result<Self, SearchError> {
        let (start, end) = SearchError::endpoints(grid)?;
        let mut frontier = FifoFrontier::new();
        frontier.push(start);
        info!(%start, %end, rows = grid.rows(), cols = grid.cols(), "search started");
        Ok(Self {
            start,
            end,
            frontier,
            visited: BTreeSet::new(),
            predecessors: BTreeMap::new(),
            steps: 0,
            enqueued: 1,
            status: SearchStatus::Running,
            trace: SearchTraceV1::open(grid, start, end),
        })
    }

    /// Advance by exactly one frontier cell.
    ///
    /// `grid` must be the grid the search began on; the engine reads it and
    /// never writes it.
    pub fn step(&mut self, grid: &Grid) -> StepOutcome {
        if self.status != SearchStatus::Running {
            return StepOutcome::Terminated(self.status);
        }

        let Some(current) = self.frontier.pop() else {
            self.status = SearchStatus::NotFound;
            self.trace.terminate(TerminationV1::NotFound);
            info!(
                steps = self.steps,
                visited = self.visited.len(),
                "search exhausted the frontier"
            );
            return StepOutcome::NotFound;
        };

        if current == self.end {
            let path = reconstruct(&self.predecessors, self.start, self.end);
            match &path {
                Ok(found) => info!(steps = self.steps, path_len = found.len(), "search reached end"),
                Err(broken) => error!(
                    at = %broken.at,
                    partial = broken.partial.len(),
                    "predecessor chain broken during reconstruction"
                ),
            }
            self.trace.terminate(TerminationV1::from_reconstruction(&path));
            self.status = SearchStatus::Found;
            return StepOutcome::Found { end: current, path };
        }

        self.visited.insert(current);
        let mut enqueued = Vec::with_capacity(4);
        for next in current.neighbours() {
            if !grid.contains(next) || self.visited.contains(&next) || self.frontier.contains(next)
            {
                continue;
            }
            if !grid.cell_at(next).is_ok_and(Cell::is_passable) {
                continue;
            }
            self.predecessors.insert(next, current);
            self.frontier.push(next);
            enqueued.push(next);
        }

        let delta = StepDelta {
            index: self.steps,
            current,
            enqueued,
        };
        self.steps += 1;
        self.enqueued += delta.enqueued.len() as u64;
        self.trace.push_step(&delta);
        debug!(
            step = delta.index,
            %current,
            enqueued = delta.enqueued.len(),
            frontier = self.frontier.len(),
            "expanded"
        );
        StepOutcome::Expanded(delta)
    }

    /// Step until a terminal outcome and return it.
    pub fn run_to_completion(&mut self, grid: &Grid) -> StepOutcome {
        loop {
            let outcome = self.step(grid);
            if outcome.is_terminal() {
                return outcome;
            }
        }
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Position {
        self.end
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub fn frontier(&self) -> &FifoFrontier {
        &self.frontier
    }

    #[must_use]
    pub fn visited(&self) -> &BTreeSet<Position> {
        &self.visited
    }

    #[must_use]
    pub fn predecessors(&self) -> &BTreeMap<Position, Position> {
        &self.predecessors
    }

    #[must_use]
    pub fn trace(&self) -> &SearchTraceV1 {
        &self.trace
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            steps: self.steps,
            visited: self.visited.len(),
            enqueued: self.enqueued,
            frontier_high_water: self.frontier.high_water(),
        }
    }
}
