//! Path reconstruction from the predecessor map.

use std::collections::BTreeMap;

use maze_kernel::grid::Position;

/// A reconstructed shortest path, ordered start → end, endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalPath {
    cells: Vec<Position>,
}

impl FinalPath {
    /// Every cell on the path, start first, end last.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// The cells between start and end: what gets the "final path" marking.
    #[must_use]
    pub fn interior(&self) -> &[Position] {
        match self.cells.len() {
            0..=2 => &[],
            n => &self.cells[1..n - 1],
        }
    }

    /// Number of moves from start to end.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The predecessor chain ended before reaching start.
///
/// Only possible if search bookkeeping is corrupted; callers treat it as an
/// internal-consistency diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenChain {
    /// The cell with no predecessor entry.
    pub at: Position,
    /// Cells walked so far, ordered `at` → end.
    pub partial: Vec<Position>,
}

impl std::fmt::Display for BrokenChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "predecessor chain broken at {} after {} cells",
            self.at,
            self.partial.len()
        )
    }
}

impl std::error::Error for BrokenChain {}

/// Walk `predecessors` from `end` back to `start`.
///
/// The walk is bounded by the map size, so a corrupted map containing a
/// cycle is reported as [`BrokenChain`] rather than looping.
///
/// # Errors
///
/// Returns [`BrokenChain`] if a cell other than `start` has no predecessor.
pub fn reconstruct(
    predecessors: &BTreeMap<Position, Position>,
    start: Position,
    end: Position,
) -> Result<FinalPath, BrokenChain> {
    let mut walked = vec![end];
    let mut current = end;
    while current != start {
        let next = match predecessors.get(&current) {
            Some(&prev) if walked.len() <= predecessors.len() => prev,
            _ => {
                walked.reverse();
                return Err(BrokenChain {
                    at: current,
                    partial: walked,
                });
            }
        };
        walked.push(next);
        current = next;
    }
    walked.reverse();
    Ok(FinalPath { cells: walked })
}
