//! Collaborator contracts: what the editor core consumes from the outside.
//!
//! The core owns no timer, no window and no event loop. It asks a
//! [`StepScheduler`] for the next tick, tells a [`RenderSurface`] which cells
//! to repaint, and receives cell coordinates already translated by
//! [`crate::geometry::CellGeometry`].
//!
//! Implementations may NOT call back into the session from inside these
//! methods; the caller drives ticks by handing a fired [`StepTicket`] to
//! [`crate::session::MazeSession::on_tick`].

use std::time::Duration;

use maze_kernel::grid::{Cell, Position};

/// Paint role of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorTag {
    Wall,
    Path,
    Start,
    End,
    Frontier,
    Visited,
    Final,
}

impl ColorTag {
    /// All tags in declaration order.
    pub const ALL: [ColorTag; 7] = [
        Self::Wall,
        Self::Path,
        Self::Start,
        Self::End,
        Self::Frontier,
        Self::Visited,
        Self::Final,
    ];

    /// The base (non-search) tag of a cell.
    #[must_use]
    pub const fn base(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self::Path,
            Cell::Wall => Self::Wall,
            Cell::Start => Self::Start,
            Cell::End => Self::End,
        }
    }

    /// Stable lowercase name, also the palette key in config JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Path => "path",
            Self::Start => "start",
            Self::End => "end",
            Self::Frontier => "frontier",
            Self::Visited => "visited",
            Self::Final => "final",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render capability: repaint one cell.
pub trait RenderSurface {
    fn paint_cell(&mut self, pos: Position, tag: ColorTag);
}

/// Proof that a tick belongs to the search generation that scheduled it.
///
/// Reset and clear advance the generation, so a ticket issued before them is
/// recognised as stale and ignored even if the scheduler fires it anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTicket {
    generation: u64,
}

impl StepTicket {
    pub(crate) const fn new(generation: u64) -> Self {
        Self { generation }
    }

    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Opaque id of a scheduled continuation, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleHandle(pub u64);

/// Scheduler capability: deliver `ticket` back to the session after `delay`.
pub trait StepScheduler {
    fn schedule_after(&mut self, delay: Duration, ticket: StepTicket) -> ScheduleHandle;

    /// Cancel a pending continuation. Unknown or already-fired handles are
    /// ignored.
    fn cancel(&mut self, handle: ScheduleHandle);
}
