//! Per-step change sets handed to the renderer.

use maze_kernel::grid::Position;

/// Search colouring of a cell, layered under the Start/End identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMark {
    /// Discovered and queued, not yet expanded.
    Frontier,
    /// Dequeued and expanded.
    Visited,
}

impl SearchMark {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontier => "frontier",
            Self::Visited => "visited",
        }
    }
}

/// One cell changing search colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkChange {
    pub pos: Position,
    pub mark: SearchMark,
}

/// Everything one expansion changed: the expanded cell first, then each
/// newly queued neighbour in exploration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDelta {
    /// Zero-based step counter.
    pub index: u64,
    /// The cell dequeued and expanded by this step.
    pub current: Position,
    /// Neighbours queued by this step, in up/down/left/right order.
    pub enqueued: Vec<Position>,
}

impl StepDelta {
    /// The change set as `(cell, mark)` pairs in application order.
    #[must_use]
    pub fn changes(&self) -> Vec<MarkChange> {
        std::iter::once(MarkChange {
            pos: self.current,
            mark: SearchMark::Visited,
        })
        .chain(self.enqueued.iter().map(|&pos| MarkChange {
            pos,
            mark: SearchMark::Frontier,
        }))
        .collect()
    }
}
