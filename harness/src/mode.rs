//! Editor phase state machine.
//!
//! ```text
//!            begin (grid ready)
//!   Edit ────────────────────────▶ Running
//!    ▲                               │ step dequeues End / empties frontier
//!    │ reset | clear                 ▼
//!    └──────────────────────── Completed(Found | NotFound)
//!    ▲                               │
//!    └───────── reset | clear ───────┘ (also from Running)
//! ```
//!
//! Only `Edit` permits grid mutation. The grid-readiness precondition of
//! `begin` is checked by the session before calling [`ModeStateMachine::begin`].

use tracing::info;

/// How a finished search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Found,
    NotFound,
}

/// Editor phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Edit,
    Running,
    Completed(Completion),
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Running => "running",
            Self::Completed(Completion::Found) => "completed_found",
            Self::Completed(Completion::NotFound) => "completed_not_found",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Begin,
    Complete(Completion),
    Reset,
}

/// A transition not allowed from the current mode. The mode is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalTransition {
    pub from: Mode,
    pub transition: Transition,
}

impl std::fmt::Display for IllegalTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} is not allowed in mode {}", self.transition, self.from)
    }
}

impl std::error::Error for IllegalTransition {}

/// Holds the current [`Mode`] and enforces the legal transitions.
#[derive(Debug, Clone, Default)]
pub struct ModeStateMachine {
    mode: Mode,
}

impl ModeStateMachine {
    /// Start in [`Mode::Edit`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether grid edits are allowed.
    #[must_use]
    pub fn permits_edit(&self) -> bool {
        self.mode == Mode::Edit
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    /// `Edit → Running`.
    ///
    /// # Errors
    ///
    /// [`IllegalTransition`] from any other mode.
    pub fn begin(&mut self) -> Result<(), IllegalTransition> {
        self.apply(Transition::Begin)
    }

    /// `Running → Completed(completion)`.
    ///
    /// # Errors
    ///
    /// [`IllegalTransition`] from any other mode.
    pub fn complete(&mut self, completion: Completion) -> Result<(), IllegalTransition> {
        self.apply(Transition::Complete(completion))
    }

    /// `Running | Completed(*) → Edit`. A no-op in `Edit`.
    ///
    /// Returns whether the mode changed.
    pub fn reset(&mut self) -> bool {
        self.apply(Transition::Reset).is_ok()
    }

    fn apply(&mut self, transition: Transition) -> Result<(), IllegalTransition> {
        let next = match (self.mode, transition) {
            (Mode::Edit, Transition::Begin) => Mode::Running,
            (Mode::Running, Transition::Complete(c)) => Mode::Completed(c),
            (Mode::Running | Mode::Completed(_), Transition::Reset) => Mode::Edit,
            (from, transition) => return Err(IllegalTransition { from, transition }),
        };
        info!(from = %self.mode, to = %next, "mode transition");
        self.mode = next;
        Ok(())
    }
}
