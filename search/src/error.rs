//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (Found, NotFound, a broken predecessor chain) are expressed via
//! [`crate::engine::StepOutcome`] and always leave a complete
//! [`crate::trace::SearchTraceV1`] behind.

use maze_kernel::grid::{Grid, Position};

/// Typed failure for pre-flight search validation.
///
/// Returned before any step is taken; no search state exists afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start and/or End have not been placed on the grid.
    MissingEndpoints { missing_start: bool, missing_end: bool },
}

impl SearchError {
    /// The `(start, end)` pair of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingEndpoints`] naming whichever is absent.
    pub fn endpoints(grid: &Grid) -> Result<(Position, Position), Self> {
        match (grid.start(), grid.end()) {
            (Some(start), Some(end)) => Ok((start, end)),
            (start, end) => Err(Self::MissingEndpoints {
                missing_start: start.is_none(),
                missing_end: end.is_none(),
            }),
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEndpoints {
                missing_start,
                missing_end,
            } => {
                let what = match (missing_start, missing_end) {
                    (true, true) => "start (S) and end (E)",
                    (true, false) => "start (S)",
                    (false, _) => "end (E)",
                };
                write!(f, "place {what} before starting the search")
            }
        }
    }
}

impl std::error::Error for SearchError {}
