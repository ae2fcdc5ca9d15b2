//! Edit controller: cell-painting tools gated by the editor mode.

use maze_kernel::grid::{Cell, CellChange, Grid, GridError, Position};

use crate::mode::{Mode, ModeStateMachine};

/// A painting tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Wall,
    /// Erase back to an empty cell.
    Path,
    Start,
    End,
}

impl Tool {
    /// The cell kind this tool writes.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Self::Wall => Cell::Wall,
            Self::Path => Cell::Empty,
            Self::Start => Cell::Start,
            Self::End => Cell::End,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "wall" => Some(Self::Wall),
            "path" => Some(Self::Path),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

/// Why an edit was rejected. The grid is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Edits are only allowed in [`Mode::Edit`].
    Locked { mode: Mode },
    /// The grid rejected the write.
    Grid(GridError),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locked { mode } => write!(f, "editing is locked while mode is {mode}"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EditError {}

impl From<GridError> for EditError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Applies tools to the grid and remembers the selected tool.
#[derive(Debug, Clone, Default)]
pub struct EditController {
    selected: Tool,
}

impl EditController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Tool {
        self.selected
    }

    pub fn select(&mut self, tool: Tool) {
        self.selected = tool;
    }

    /// Paint `tool` at `pos`.
    ///
    /// Returns the cells whose content changed (empty when the cell already
    /// held the requested kind).
    ///
    /// # Errors
    ///
    /// - [`EditError::Locked`] if the mode is not `Edit` (checked first).
    /// - [`EditError::Grid`] with `OutOfBounds` if `pos` is invalid.
    pub fn apply_tool(
        &self,
        grid: &mut Grid,
        mode: &ModeStateMachine,
        pos: Position,
        tool: Tool,
    ) -> Result<Vec<CellChange>, EditError> {
        if !mode.permits_edit() {
            return Err(EditError::Locked { mode: mode.mode() });
        }
        Ok(grid.set_cell(pos, tool.cell())?)
    }

    /// Paint the selected tool at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`EditController::apply_tool`].
    pub fn apply_selected(
        &self,
        grid: &mut Grid,
        mode: &ModeStateMachine,
        pos: Position,
    ) -> Result<Vec<CellChange>, EditError> {
        self.apply_tool(grid, mode, pos, self.selected)
    }
}
