//! In-memory render surface that keeps one [`ColorTag`] per cell.
//!
//! Backs the terminal driver and the tests; it can print itself as ASCII.

use maze_kernel::grid::{Grid, GridError, Position};

use crate::contract::{ColorTag, RenderSurface};

/// Character shown for each tag by [`AsciiSurface::render`].
#[must_use]
pub const fn glyph(tag: ColorTag) -> char {
    match tag {
        ColorTag::Wall => '#',
        ColorTag::Path => '.',
        ColorTag::Start => 'S',
        ColorTag::End => 'E',
        ColorTag::Frontier => 'o',
        ColorTag::Visited => ':',
        ColorTag::Final => '*',
    }
}

/// A `rows × cols` buffer of paint tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiSurface {
    rows: usize,
    cols: usize,
    tags: Vec<ColorTag>,
    paints: u64,
}

impl AsciiSurface {
    /// A surface with every cell painted [`ColorTag::Path`].
    ///
    /// # Errors
    ///
    /// Same dimension limits as [`Grid::new`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let cells = Grid::cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            tags: vec![ColorTag::Path; cells],
            paints: 0,
        })
    }

    /// Tag currently shown at `pos`, or `None` outside the surface.
    #[must_use]
    pub fn tag_at(&self, pos: Position) -> Option<ColorTag> {
        (pos.row < self.rows && pos.col < self.cols).then(|| self.tags[pos.row * self.cols + pos.col])
    }

    /// Number of cells showing `tag`.
    #[must_use]
    pub fn count(&self, tag: ColorTag) -> usize {
        self.tags.iter().filter(|&&t| t == tag).count()
    }

    /// Total `paint_cell` calls received.
    #[must_use]
    pub fn paints(&self) -> u64 {
        self.paints
    }

    /// Rows of glyphs joined by `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        self.tags
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|&t| glyph(t)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl RenderSurface for AsciiSurface {
    fn paint_cell(&mut self, pos: Position, tag: ColorTag) {
        if pos.row < self.rows && pos.col < self.cols {
            self.tags[pos.row * self.cols + pos.col] = tag;
            self.paints += 1;
        }
    }
}
