//! FIFO frontier with membership tracking.
//!
//! Membership uses a `BTreeSet` (not `HashSet`) so that any iteration at a
//! serialization boundary is ordered.

use std::collections::{BTreeSet, VecDeque};

use maze_kernel::grid::Position;

/// Breadth-first frontier.
///
/// Maintains:
/// - A `VecDeque` queue in discovery order
/// - A `BTreeSet` mirror of the queue for O(log n) "already queued?" checks
/// - The high-water mark of the queue length
#[derive(Debug, Clone, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Position>,
    in_queue: BTreeSet<Position>,
    high_water: u64,
}

impl FifoFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `pos` at the back.
    ///
    /// Returns `false` if `pos` is already queued (not added twice).
    pub fn push(&mut self, pos: Position) -> bool {
        if !self.in_queue.insert(pos) {
            return false;
        }
        self.queue.push_back(pos);
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Dequeue the oldest position and drop it from the membership set.
    pub fn pop(&mut self) -> Option<Position> {
        let pos = self.queue.pop_front()?;
        self.in_queue.remove(&pos);
        Some(pos)
    }

    /// Whether `pos` is currently queued.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.in_queue.contains(&pos)
    }

    /// Queued positions in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.queue.iter().copied()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
