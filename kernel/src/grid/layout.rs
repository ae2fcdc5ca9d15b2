//! ASCII maze layouts: `#` wall, `.` or space empty, `S` start, `E` end.
//!
//! Short rows are padded with empty cells to the widest row. Trailing
//! blank lines are ignored.

use super::{Cell, Grid, GridError, LayoutError, Position};

impl Grid {
    /// Parse an ASCII layout.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::Empty`] if there are no non-blank rows.
    /// - [`LayoutError::UnknownGlyph`] for any character outside the glyph set.
    /// - [`LayoutError::DuplicateEndpoint`] for a second `S` or `E`.
    pub fn from_ascii(text: &str) -> Result<Self, LayoutError> {
        let mut lines: Vec<&str> = text
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        let rows = lines.len();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut grid = Grid::new(rows, cols).map_err(|e| match e {
            GridError::TooLarge { rows, cols } => LayoutError::TooLarge { rows, cols },
            GridError::ZeroDimension { .. } | GridError::OutOfBounds { .. } => LayoutError::Empty,
        })?;

        for (row, line) in lines.iter().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                let cell =
                    Cell::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph { pos, glyph })?;
                let seen = match cell {
                    Cell::Start => Some(&mut grid.start),
                    Cell::End => Some(&mut grid.end),
                    Cell::Empty | Cell::Wall => None,
                };
                if let Some(seen) = seen {
                    if let Some(first) = *seen {
                        return Err(LayoutError::DuplicateEndpoint {
                            glyph,
                            first,
                            second: pos,
                        });
                    }
                    *seen = Some(pos);
                }
                grid.cells[row * cols + col] = cell;
            }
        }
        Ok(grid)
    }

    /// Render as ASCII rows joined by `\n`, using `.` for empty cells.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for (pos, cell) in self.iter() {
            if pos.col == 0 && pos.row > 0 {
                out.push('\n');
            }
            out.push(cell.glyph());
        }
        out
    }
}
