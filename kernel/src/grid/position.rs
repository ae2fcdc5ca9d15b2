//! Grid coordinates and the fixed neighbour order.

/// A `(row, col)` coordinate.
///
/// Ordered row-major so that `BTreeSet<Position>` iterates in reading order.
/// Validity against a concrete grid is checked by [`super::Grid::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Axis-aligned move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Exploration order: up, down, left, right.
    ///
    /// The search depends on this order for reproducible tie-breaking.
    pub const ORDER: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbour one step in `dir`, or `None` if it would leave the
    /// non-negative quadrant. Upper bounds are the grid's concern.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Direction::Down => self.row.checked_add(1).map(|row| Self::new(row, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::Right => self.col.checked_add(1).map(|col| Self::new(self.row, col)),
        }
    }

    /// Candidate neighbours in [`Direction::ORDER`].
    pub fn neighbours(self) -> impl Iterator<Item = Self> {
        Direction::ORDER.into_iter().filter_map(move |d| self.step(d))
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if `other` is exactly one axis-aligned step away.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
