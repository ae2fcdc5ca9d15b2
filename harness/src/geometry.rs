//! Pixel ↔ cell translation for pointer input and drawing.

use maze_kernel::grid::Position;

/// Square-cell layout of the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub rows: usize,
    pub cols: usize,
    /// Side of one cell in pixels. Always positive after config validation.
    pub cell_size: u32,
}

/// Pixel rectangle `[x0, x1) × [y0, y1)` of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x0: u64,
    pub y0: u64,
    pub x1: u64,
    pub y1: u64,
}

impl CellGeometry {
    /// The cell under pixel `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn cell_at(&self, x: i64, y: i64) -> Option<Position> {
        if self.cell_size == 0 {
            return None;
        }
        let x = u64::try_from(x).ok()?;
        let y = u64::try_from(y).ok()?;
        let size = u64::from(self.cell_size);
        let col = usize::try_from(x / size).ok()?;
        let row = usize::try_from(y / size).ok()?;
        (row < self.rows && col < self.cols).then_some(Position::new(row, col))
    }

    /// Pixel rectangle covered by `pos`.
    #[must_use]
    pub fn cell_rect(&self, pos: Position) -> CellRect {
        let size = u64::from(self.cell_size);
        let x0 = pos.col as u64 * size;
        let y0 = pos.row as u64 * size;
        CellRect {
            x0,
            y0,
            x1: x0 + size,
            y1: y0 + size,
        }
    }

    /// Canvas size in pixels as `(width, height)`.
    #[must_use]
    pub fn canvas_size(&self) -> (u64, u64) {
        let size = u64::from(self.cell_size);
        (self.cols as u64 * size, self.rows as u64 * size)
    }
}
