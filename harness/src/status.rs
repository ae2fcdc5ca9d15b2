//! One-line, human-readable session status.

/// What the status line currently says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLine {
    #[default]
    Editing,
    Running,
    /// Reconstruction succeeded; `steps` is the number of moves.
    PathFound { steps: usize },
    /// End was reached but the predecessor chain was broken.
    PathBroken,
    NoPath,
    Reset,
    Cleared,
    /// Begin was refused because Start or End is missing.
    NeedEndpoints,
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editing => write!(f, "Edit mode: draw walls, start and end."),
            Self::Running => write!(f, "Search running..."),
            Self::PathFound { steps } => write!(f, "Path found: {steps} steps."),
            Self::PathBroken => write!(f, "End reached, but the path could not be rebuilt."),
            Self::NoPath => write!(f, "Search finished: no path found."),
            Self::Reset => write!(f, "Search reset. Edit mode."),
            Self::Cleared => write!(f, "Maze cleared. Edit mode."),
            Self::NeedEndpoints => {
                write!(f, "Place start (S) and end (E) before starting the search.")
            }
        }
    }
}
