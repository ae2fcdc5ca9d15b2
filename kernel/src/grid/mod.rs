//! The maze grid: a fixed `rows × cols` matrix of [`Cell`] with cached
//! Start/End positions.
//!
//! # Invariant
//!
//! `start() == Some(p)` iff the cell at `p` is [`Cell::Start`], and no other
//! cell is `Start`. The same holds for `end()` and [`Cell::End`]. Every
//! mutation goes through [`Grid::set_cell`] or [`Grid::clear`], which keep
//! the caches and the matrix in lockstep.

mod cell;
mod error;
mod layout;
mod position;

pub use cell::Cell;
pub use error::{GridError, LayoutError};
pub use position::{Direction, Position};

use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// One cell whose content changed as the result of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub pos: Position,
    pub from: Cell,
    pub to: Cell,
}

/// Rectangular maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Option<Position>,
    end: Option<Position>,
}

impl Grid {
    /// Largest number of cells a grid may hold.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Number of cells in a `rows × cols` grid.
    ///
    /// # Errors
    ///
    /// - [`GridError::ZeroDimension`] if either dimension is zero.
    /// - [`GridError::TooLarge`] if the product overflows or exceeds
    ///   [`Grid::MAX_CELLS`].
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        rows.checked_mul(cols)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(GridError::TooLarge { rows, cols })
    }

    /// Create an all-empty grid.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::cell_count`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let count = Self::cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; count],
            start: None,
            end: None,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cached Start position.
    #[must_use]
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    /// Cached End position.
    #[must_use]
    pub fn end(&self) -> Option<Position> {
        self.end
    }

    /// True iff both Start and End are placed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Whether `pos` lies inside the matrix.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn offset(&self, pos: Position) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.row * self.cols + pos.col)
        } else {
            Err(GridError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// The cell kind at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn cell_at(&self, pos: Position) -> Result<Cell, GridError> {
        self.offset(pos).map(|i| self.cells[i])
    }

    /// Write `kind` at `pos`, keeping Start/End unique.
    ///
    /// Placing a Start erases any previous Start to [`Cell::Empty`] (same for
    /// End). Overwriting the current Start/End with another kind clears that
    /// cache. Returns every cell whose content changed, displaced endpoints
    /// first; an empty list means the cell already held `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid. The
    /// grid is unchanged in that case.
    pub fn set_cell(&mut self, pos: Position, kind: Cell) -> Result<Vec<CellChange>, GridError> {
        let idx = self.offset(pos)?;
        let current = self.cells[idx];
        if current == kind {
            return Ok(Vec::new());
        }

        let mut changes = Vec::with_capacity(2);
        let displaced = match kind {
            Cell::Start => self.start.take(),
            Cell::End => self.end.take(),
            Cell::Empty | Cell::Wall => None,
        };
        if let Some(old) = displaced {
            let old_idx = self.offset(old)?;
            self.cells[old_idx] = Cell::Empty;
            changes.push(CellChange {
                pos: old,
                from: kind,
                to: Cell::Empty,
            });
        }

        match current {
            Cell::Start => self.start = None,
            Cell::End => self.end = None,
            Cell::Empty | Cell::Wall => {}
        }
        self.cells[idx] = kind;
        match kind {
            Cell::Start => self.start = Some(pos),
            Cell::End => self.end = Some(pos),
            Cell::Empty | Cell::Wall => {}
        }
        changes.push(CellChange {
            pos,
            from: current,
            to: kind,
        });
        Ok(changes)
    }

    /// Reset every cell to [`Cell::Empty`] and forget both endpoints.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.start = None;
        self.end = None;
    }

    /// All positions with their cells, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Position::new(i / cols, i % cols), cell))
    }

    /// Number of cells holding `kind`.
    #[must_use]
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Digest of dimensions + layout, stable across processes.
    #[must_use]
    pub fn layout_digest(&self) -> ContentHash {
        let basis = format!("{}x{}\n{}", self.rows, self.cols, self.to_ascii());
        canonical_hash(HashDomain::GridLayout, basis.as_bytes())
    }
}
