//! Typed grid and layout errors.

use super::position::Position;

/// Failure of a grid access or construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The position lies outside the `rows × cols` matrix.
    OutOfBounds {
        pos: Position,
        rows: usize,
        cols: usize,
    },
    /// A grid must have at least one row and one column.
    ZeroDimension { rows: usize, cols: usize },
    /// `rows × cols` exceeds [`super::Grid::MAX_CELLS`] or overflows.
    TooLarge { rows: usize, cols: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "position {pos} is outside the {rows}x{cols} grid")
            }
            Self::ZeroDimension { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::TooLarge { rows, cols } => write!(
                f,
                "{rows}x{cols} grid exceeds the limit of {} cells",
                super::Grid::MAX_CELLS
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Failure parsing an ASCII maze layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no rows, or only blank rows.
    Empty,
    /// The layout has more cells than a grid may hold.
    TooLarge { rows: usize, cols: usize },
    /// A character other than `# . space S E` was found.
    UnknownGlyph { pos: Position, glyph: char },
    /// A second `S` or `E` was found.
    DuplicateEndpoint {
        glyph: char,
        first: Position,
        second: Position,
    },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "layout is empty"),
            Self::TooLarge { rows, cols } => write!(f, "layout is too large ({rows}x{cols})"),
            Self::UnknownGlyph { pos, glyph } => {
                write!(f, "unknown glyph {glyph:?} at {pos}")
            }
            Self::DuplicateEndpoint {
                glyph,
                first,
                second,
            } => write!(
                f,
                "layout has more than one {glyph:?}: first at {first}, again at {second}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
